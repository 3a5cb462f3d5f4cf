//! Horizontal paging scroll state.
//!
//! The offset is measured in pages and is fractional only while an animation
//! or a drag is in flight. Rounding the offset gives the current renderable
//! position, the same way a paged scroll view derives its page from
//! `content_offset / width`.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f32,
    to: usize,
    elapsed: Duration,
}

/// Paged scroll offset with optional animation and drag tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct PageScroller {
    offset: f32,
    animation: Option<ScrollAnimation>,
    drag_origin: Option<f32>,
    duration: Duration,
}

impl PageScroller {
    pub fn new(duration: Duration) -> Self {
        Self {
            offset: 0.0,
            animation: None,
            drag_origin: None,
            duration,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Page nearest to the current offset.
    pub fn current_page(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Move to `page` immediately, cancelling any animation.
    pub fn jump_to(&mut self, page: usize) {
        self.animation = None;
        self.offset = page as f32;
    }

    /// Start animating towards `page`.
    ///
    /// Returns false when the move completed immediately (zero duration or
    /// already there), in which case the caller treats it as settled.
    pub fn animate_to(&mut self, page: usize) -> bool {
        if self.duration.is_zero() || (self.offset - page as f32).abs() < f32::EPSILON {
            self.jump_to(page);
            return false;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: page,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Step the animation by `elapsed`. Returns the page it settled on when
    /// this step completes it.
    pub fn advance(&mut self, elapsed: Duration) -> Option<usize> {
        let anim = self.animation.as_mut()?;
        anim.elapsed += elapsed;
        if anim.elapsed >= self.duration {
            return self.finish();
        }
        let t = anim.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Ease-out so the page decelerates into place
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        self.offset = anim.from + (anim.to as f32 - anim.from) * eased;
        None
    }

    /// Complete the running animation at once. Returns the settled page.
    pub fn finish(&mut self) -> Option<usize> {
        let anim = self.animation.take()?;
        self.offset = anim.to as f32;
        Some(anim.to)
    }

    /// Start tracking a drag from the current offset.
    pub fn begin_drag(&mut self) {
        self.animation = None;
        self.drag_origin = Some(self.offset);
    }

    /// Displace the strip by `pages` relative to where the drag began,
    /// keeping the offset within `[0, max_page]`.
    pub fn drag(&mut self, pages: f32, max_page: usize) {
        let Some(origin) = self.drag_origin else {
            return;
        };
        self.offset = (origin + pages).clamp(0.0, max_page as f32);
    }

    /// Stop tracking the drag. Returns the page to settle on.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drag_origin.take()?;
        Some(self.current_page())
    }
}
