//! Repeating-timer abstraction used by carousel autoplay.
//!
//! The carousel never owns a thread or a task directly. It asks a
//! [`Scheduler`] for a repeating timer that posts
//! [`CarouselEvent::AutoplayTick`] into the carousel's own channel, and keeps
//! the returned [`TimerHandle`] as its single timer slot. Ticks are then
//! drained on the UI thread, so timer-driven advances and user gestures never
//! run concurrently.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::carousel::CarouselEvent;
use crate::error::KitResult;

/// Handle to a live repeating timer.
///
/// Dropping the handle must cancel the timer.
pub trait TimerHandle {
    /// Stop the timer. Calling this on a cancelled timer is a no-op.
    fn cancel(&mut self);

    /// Whether the timer will still fire.
    fn is_active(&self) -> bool;
}

/// Source of repeating timers.
pub trait Scheduler {
    /// Start a timer that sends `AutoplayTick { generation }` on `tx` every
    /// `period`, first firing one period from now.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has nothing to run timers on.
    fn schedule_repeating(
        &self,
        period: Duration,
        tx: UnboundedSender<CarouselEvent>,
        generation: u64,
    ) -> KitResult<Box<dyn TimerHandle>>;
}
