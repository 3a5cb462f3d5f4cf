//! Logical slide index <-> renderable page position mapping.
//!
//! In infinite mode with two or more slides the strip is padded with a clone
//! of the last slide in front and a clone of the first slide at the end:
//!
//! ```text
//! renderable:  0      1   2   ...   n     n+1
//! logical:     n-1    0   1   ...   n-1   0
//! ```
//!
//! Settling on either clone is undone by a snap-back to the interior page
//! showing the same slide, so the user never sees the seam.

/// Mapping between logical slide indices and renderable strip positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMap {
    count: usize,
    infinite: bool,
}

impl PageMap {
    pub fn new(count: usize, infinite: bool) -> Self {
        Self { count, infinite }
    }

    /// Number of logical slides.
    pub fn slide_count(&self) -> usize {
        self.count
    }

    /// Whether the strip carries the two edge clones.
    pub fn is_padded(&self) -> bool {
        self.infinite && self.count > 1
    }

    /// Number of pages in the scrollable strip.
    pub fn renderable_count(&self) -> usize {
        if self.is_padded() {
            self.count + 2
        } else {
            self.count
        }
    }

    /// Logical slide shown at a renderable position.
    ///
    /// Positions past the strip are a caller bug; in release builds they map
    /// to themselves like the unpadded case.
    pub fn logical_index(&self, position: usize) -> usize {
        debug_assert!(
            position < self.renderable_count().max(1),
            "renderable position {} out of range",
            position
        );
        if !self.is_padded() {
            return position;
        }
        let n = self.count;
        if position == 0 {
            n - 1
        } else if position == n + 1 {
            0
        } else {
            position - 1
        }
    }

    /// Interior renderable position of a logical slide.
    pub fn position_of(&self, logical: usize) -> usize {
        if self.is_padded() {
            logical + 1
        } else {
            logical
        }
    }

    /// Position the strip rests at after a reload.
    pub fn home_position(&self) -> usize {
        if self.is_padded() {
            1
        } else {
            0
        }
    }

    /// Interior position to jump to when settled on an edge clone.
    pub fn snap_target(&self, position: usize) -> Option<usize> {
        if !self.is_padded() {
            return None;
        }
        if position == 0 {
            Some(self.count)
        } else if position >= self.count + 1 {
            Some(1)
        } else {
            None
        }
    }

    /// Autoplay target from `position`.
    ///
    /// Padded strips run one page forward onto the trailing clone and rely on
    /// the snap-back; unpadded strips wrap straight to the first page.
    pub fn next_position(&self, position: usize) -> usize {
        if self.is_padded() {
            (position + 1).min(self.count + 1)
        } else if self.count == 0 {
            0
        } else {
            (position + 1) % self.count
        }
    }

    /// Clamp a position into the strip.
    pub fn clamp(&self, position: usize) -> usize {
        position.min(self.renderable_count().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_mapping_is_onto_with_clones_at_edges() {
        for n in 2..=12 {
            let map = PageMap::new(n, true);
            assert_eq!(map.renderable_count(), n + 2);
            assert_eq!(map.logical_index(0), n - 1);
            assert_eq!(map.logical_index(n + 1), 0);

            let interior: Vec<_> = (1..=n).map(|p| map.logical_index(p)).collect();
            assert_eq!(interior, (0..n).collect::<Vec<_>>());

            let mut seen = vec![false; n];
            for p in 0..map.renderable_count() {
                seen[map.logical_index(p)] = true;
            }
            assert!(seen.iter().all(|s| *s), "n={} not onto", n);
        }
    }

    #[test]
    fn test_single_slide_is_not_padded() {
        let map = PageMap::new(1, true);
        assert!(!map.is_padded());
        assert_eq!(map.renderable_count(), 1);
        assert_eq!(map.logical_index(0), 0);
        assert_eq!(map.home_position(), 0);
        assert_eq!(map.snap_target(0), None);
    }

    #[test]
    fn test_zero_slides() {
        let map = PageMap::new(0, true);
        assert_eq!(map.renderable_count(), 0);
        assert_eq!(map.home_position(), 0);
        assert_eq!(map.next_position(0), 0);
        assert_eq!(map.clamp(5), 0);
    }

    #[test]
    fn test_finite_mode_is_identity() {
        let map = PageMap::new(4, false);
        assert_eq!(map.renderable_count(), 4);
        for p in 0..4 {
            assert_eq!(map.logical_index(p), p);
            assert_eq!(map.position_of(p), p);
        }
        assert_eq!(map.snap_target(0), None);
    }

    #[test]
    fn test_snap_targets() {
        let map = PageMap::new(5, true);
        assert_eq!(map.snap_target(0), Some(5));
        assert_eq!(map.snap_target(6), Some(1));
        for p in 1..=5 {
            assert_eq!(map.snap_target(p), None);
        }
        // Snap never changes which slide is visible
        assert_eq!(map.logical_index(0), map.logical_index(5));
        assert_eq!(map.logical_index(6), map.logical_index(1));
    }

    #[test]
    fn test_next_position() {
        let padded = PageMap::new(3, true);
        assert_eq!(padded.next_position(1), 2);
        assert_eq!(padded.next_position(3), 4);
        assert_eq!(padded.next_position(4), 4);

        let finite = PageMap::new(3, false);
        assert_eq!(finite.next_position(0), 1);
        assert_eq!(finite.next_position(2), 0);
    }
}
