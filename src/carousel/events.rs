//! Messages delivered to a carousel from outside the UI thread.

/// Deferred work queued on a carousel's channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The autoplay timer fired.
    ///
    /// `generation` identifies the timer that sent it; ticks from a timer
    /// that has since been stopped are dropped.
    AutoplayTick { generation: u64 },
}
