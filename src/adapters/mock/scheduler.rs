//! Mock scheduler for deterministic autoplay tests.
//!
//! Timers never fire on their own. Tests call [`MockScheduler::fire`] to post
//! one tick for every live timer, and inspect [`MockScheduler::active_timers`]
//! to check that the carousel holds at most one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::carousel::CarouselEvent;
use crate::error::KitResult;
use crate::traits::{Scheduler, TimerHandle};

#[derive(Debug)]
struct MockTimer {
    id: u64,
    generation: u64,
    period: Duration,
    tx: UnboundedSender<CarouselEvent>,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u64,
    live: Vec<MockTimer>,
    scheduled_total: usize,
}

/// Scheduler whose timers only fire when told to.
///
/// Clones share state, so a test can keep one clone and hand another to the
/// carousel.
///
/// # Example
///
/// ```ignore
/// let scheduler = MockScheduler::new();
/// let mut carousel = Carousel::new(source, config, Box::new(scheduler.clone()));
/// assert_eq!(scheduler.active_timers(), 1);
/// scheduler.fire();
/// carousel.process_pending();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockScheduler {
    state: Arc<Mutex<MockState>>,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that have been scheduled and not cancelled.
    pub fn active_timers(&self) -> usize {
        self.lock().live.len()
    }

    /// Total number of timers ever scheduled.
    pub fn scheduled_total(&self) -> usize {
        self.lock().scheduled_total
    }

    /// Period of the most recently scheduled live timer.
    pub fn last_period(&self) -> Option<Duration> {
        self.lock().live.last().map(|timer| timer.period)
    }

    /// Post one tick from every live timer. Returns how many were sent.
    pub fn fire(&self) -> usize {
        let state = self.lock();
        state
            .live
            .iter()
            .filter(|timer| {
                timer
                    .tx
                    .send(CarouselEvent::AutoplayTick {
                        generation: timer.generation,
                    })
                    .is_ok()
            })
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A test that panicked mid-assertion should not cascade
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Scheduler for MockScheduler {
    fn schedule_repeating(
        &self,
        period: Duration,
        tx: UnboundedSender<CarouselEvent>,
        generation: u64,
    ) -> KitResult<Box<dyn TimerHandle>> {
        let mut state = self.lock();
        state.next_id += 1;
        state.scheduled_total += 1;
        let id = state.next_id;
        state.live.push(MockTimer {
            id,
            generation,
            period,
            tx,
        });

        Ok(Box::new(MockTimerHandle {
            id,
            state: Arc::clone(&self.state),
            active: true,
        }))
    }
}

/// Handle returned by [`MockScheduler`].
struct MockTimerHandle {
    id: u64,
    state: Arc<Mutex<MockState>>,
    active: bool,
}

impl TimerHandle for MockTimerHandle {
    fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.live.retain(|timer| timer.id != self.id);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for MockTimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_fire_sends_to_live_timers_only() {
        let scheduler = MockScheduler::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let mut first = scheduler
            .schedule_repeating(Duration::from_secs(1), tx.clone(), 1)
            .unwrap();
        let _second = scheduler
            .schedule_repeating(Duration::from_secs(1), tx, 2)
            .unwrap();
        assert_eq!(scheduler.active_timers(), 2);

        first.cancel();
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(scheduler.fire(), 1);
        assert_eq!(
            rx.try_recv().unwrap(),
            CarouselEvent::AutoplayTick { generation: 2 }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drop_cancels() {
        let scheduler = MockScheduler::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        {
            let _timer = scheduler
                .schedule_repeating(Duration::from_secs(1), tx, 1)
                .unwrap();
            assert_eq!(scheduler.active_timers(), 1);
        }
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(scheduler.scheduled_total(), 1);
    }
}
