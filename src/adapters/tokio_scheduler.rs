//! Tokio-backed scheduler for carousel autoplay.
//!
//! Each timer is a spawned task ticking a [`tokio::time::Interval`] and
//! posting into the carousel's channel. Cancelling aborts the task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::carousel::CarouselEvent;
use crate::error::{KitError, KitResult};
use crate::traits::{Scheduler, TimerHandle};

/// Shortest period handed to tokio; a zero period would panic.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Scheduler that spawns timers on the current tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(
        &self,
        period: Duration,
        tx: UnboundedSender<CarouselEvent>,
        generation: u64,
    ) -> KitResult<Box<dyn TimerHandle>> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| KitError::NoRuntime {
            operation: "autoplay timer".to_string(),
        })?;

        let period = period.max(MIN_PERIOD);
        let task = runtime.spawn(async move {
            tracing::trace!("Autoplay timer {} started ({:?})", generation, period);

            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            // A stalled UI thread should not get a burst of catch-up flips
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(CarouselEvent::AutoplayTick { generation }).is_err() {
                    tracing::debug!("Carousel channel closed, stopping timer {}", generation);
                    break;
                }
            }
        });

        Ok(Box::new(TokioTimer { task: Some(task) }))
    }
}

/// Live tokio timer task.
struct TokioTimer {
    task: Option<JoinHandle<()>>,
}

impl TimerHandle for TokioTimer {
    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
