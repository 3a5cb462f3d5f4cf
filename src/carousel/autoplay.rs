//! Autoplay state machine.
//!
//! `Stopped` <-> `Running`, where `Running` owns exactly one repeating timer.
//! Each start bumps a generation counter; the carousel discards ticks whose
//! generation is not the running one, so a tick already queued by a
//! cancelled timer can never cause an advance.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use super::events::CarouselEvent;
use crate::traits::{Scheduler, TimerHandle};

/// Observable autoplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Stopped,
    Running,
}

/// Owner of the carousel's single timer slot.
pub struct Autoplay {
    scheduler: Box<dyn Scheduler>,
    tx: UnboundedSender<CarouselEvent>,
    timer: Option<Box<dyn TimerHandle>>,
    generation: u64,
}

impl Autoplay {
    pub fn new(scheduler: Box<dyn Scheduler>, tx: UnboundedSender<CarouselEvent>) -> Self {
        Self {
            scheduler,
            tx,
            timer: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> AutoplayState {
        if self.is_running() {
            AutoplayState::Running
        } else {
            AutoplayState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the running timer, if any.
    pub fn current_generation(&self) -> Option<u64> {
        self.is_running().then_some(self.generation)
    }

    /// Start a timer with the given period unless one is already running.
    ///
    /// Returns true if a new timer was started.
    pub fn start(&mut self, interval_secs: i64) -> bool {
        if interval_secs <= 0 || self.is_running() {
            return false;
        }

        self.generation += 1;
        let period = Duration::from_secs(interval_secs.unsigned_abs());
        match self
            .scheduler
            .schedule_repeating(period, self.tx.clone(), self.generation)
        {
            Ok(timer) => {
                tracing::debug!(
                    "Autoplay started (generation {}, every {}s)",
                    self.generation,
                    interval_secs
                );
                self.timer = Some(timer);
                true
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Autoplay not started: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Autoplay failed [{}]: {}", e.error_code(), e);
                false
            }
        }
    }

    /// Cancel the running timer. Stopping a stopped autoplay is a no-op.
    ///
    /// Returns true if a timer was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(mut timer) => {
                timer.cancel();
                tracing::debug!("Autoplay stopped (generation {})", self.generation);
                true
            }
            None => false,
        }
    }

    /// Whether a tick from `generation` should be acted on.
    pub fn accepts(&self, generation: u64) -> bool {
        self.current_generation() == Some(generation)
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Autoplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoplay")
            .field("state", &self.state())
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockScheduler, TokioScheduler};
    use tokio::sync::mpsc;

    fn autoplay() -> (Autoplay, MockScheduler) {
        let scheduler = MockScheduler::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        (Autoplay::new(Box::new(scheduler.clone()), tx), scheduler)
    }

    #[test]
    fn test_start_twice_leaves_one_timer() {
        let (mut autoplay, scheduler) = autoplay();
        assert!(autoplay.start(2));
        assert!(!autoplay.start(2));
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(autoplay.state(), AutoplayState::Running);
    }

    #[test]
    fn test_stop_twice_leaves_no_timer() {
        let (mut autoplay, scheduler) = autoplay();
        autoplay.start(2);
        assert!(autoplay.stop());
        assert!(!autoplay.stop());
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
    }

    #[test]
    fn test_non_positive_interval_never_starts() {
        let (mut autoplay, scheduler) = autoplay();
        assert!(!autoplay.start(0));
        assert!(!autoplay.start(-3));
        assert_eq!(scheduler.scheduled_total(), 0);
    }

    #[test]
    fn test_restart_rejects_old_generation() {
        let (mut autoplay, _scheduler) = autoplay();
        autoplay.start(2);
        let first = autoplay.current_generation().unwrap();
        autoplay.stop();
        autoplay.start(5);
        assert!(!autoplay.accepts(first));
        assert!(autoplay.accepts(autoplay.current_generation().unwrap()));
    }

    #[test]
    fn test_period_follows_interval() {
        let (mut autoplay, scheduler) = autoplay();
        autoplay.start(3);
        assert_eq!(scheduler.last_period(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_start_without_runtime_stays_stopped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut autoplay = Autoplay::new(Box::new(TokioScheduler::new()), tx);
        assert!(!autoplay.start(2));
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.current_generation(), None);
    }

    #[test]
    fn test_drop_releases_timer() {
        let (mut autoplay, scheduler) = autoplay();
        autoplay.start(1);
        drop(autoplay);
        assert_eq!(scheduler.active_timers(), 0);
    }
}
