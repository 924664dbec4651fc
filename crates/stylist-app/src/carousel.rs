//! Cyclic outfit carousel

use stylist_core::Outfit;

/// Horizontal drag distance, in pixels, below which a swipe is ignored
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged right: show the previous outfit
    Previous,
    /// Dragged left: show the next outfit
    Next,
}

/// Map a horizontal drag to a navigation step
pub fn swipe_direction(dx: i32, threshold: i32) -> Option<SwipeDirection> {
    if dx > threshold {
        Some(SwipeDirection::Previous)
    } else if dx < -threshold {
        Some(SwipeDirection::Next)
    } else {
        None
    }
}

/// The recommended outfits and which one is showing
///
/// The active index is always inside `0..outfits.len()` when the list is
/// non-empty and `0` otherwise.
#[derive(Debug, Clone, Default)]
pub struct OutfitCarousel {
    outfits: Vec<Outfit>,
    index: usize,
    pending: bool,
    loaded: bool,
}

impl OutfitCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Outfit> {
        self.outfits.get(self.index)
    }

    /// True once any batch has arrived
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn next(&mut self) {
        let len = self.outfits.len();
        if len > 1 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.outfits.len();
        if len > 1 {
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn swipe(&mut self, dx: i32, threshold: i32) -> Option<SwipeDirection> {
        let direction = swipe_direction(dx, threshold)?;
        match direction {
            SwipeDirection::Previous => self.prev(),
            SwipeDirection::Next => self.next(),
        }
        Some(direction)
    }

    /// Swap in a new batch and show its first outfit
    pub fn replace(&mut self, outfits: Vec<Outfit>) {
        self.outfits = outfits;
        self.index = 0;
        self.pending = false;
        self.loaded = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mark a regeneration as in flight
    pub fn begin_generate(&mut self) {
        self.pending = true;
    }

    /// The regeneration failed; the previous batch stays
    pub fn generate_failed(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfits(n: usize) -> Vec<Outfit> {
        (0..n)
            .map(|i| Outfit::new(i.to_string(), format!("Outfit {}", i + 1)))
            .collect()
    }

    fn carousel(n: usize) -> OutfitCarousel {
        let mut c = OutfitCarousel::new();
        c.replace(outfits(n));
        c
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut c = carousel(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_navigation_is_noop_for_short_lists() {
        for n in 0..=1 {
            let mut c = carousel(n);
            c.next();
            c.prev();
            assert_eq!(c.index(), 0);
        }
    }

    #[test]
    fn test_index_stays_in_bounds_for_any_walk() {
        for n in 0..8 {
            let mut c = carousel(n);
            for step in 0..50 {
                if step % 3 == 0 {
                    c.prev();
                } else {
                    c.next();
                }
                if n > 0 {
                    assert!(c.index() < n, "n={} index={}", n, c.index());
                } else {
                    assert_eq!(c.index(), 0);
                }
            }
        }
    }

    #[test]
    fn test_replace_resets_index() {
        let mut c = carousel(5);
        c.next();
        c.next();
        c.next();
        c.begin_generate();
        c.replace(outfits(2));
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 2);
        assert!(!c.is_pending());
    }

    #[test]
    fn test_failed_generate_keeps_batch() {
        let mut c = carousel(4);
        c.next();
        c.begin_generate();
        c.generate_failed();
        assert_eq!(c.len(), 4);
        assert_eq!(c.index(), 1);
        assert!(!c.is_pending());
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(swipe_direction(51, 50), Some(SwipeDirection::Previous));
        assert_eq!(swipe_direction(-51, 50), Some(SwipeDirection::Next));
        assert_eq!(swipe_direction(50, 50), None);
        assert_eq!(swipe_direction(-50, 50), None);
        assert_eq!(swipe_direction(0, 50), None);
    }

    #[test]
    fn test_swipe_moves_carousel() {
        let mut c = carousel(3);
        assert_eq!(c.swipe(-80, 50), Some(SwipeDirection::Next));
        assert_eq!(c.index(), 1);
        assert_eq!(c.swipe(80, 50), Some(SwipeDirection::Previous));
        assert_eq!(c.index(), 0);
        assert_eq!(c.swipe(10, 50), None);
        assert_eq!(c.index(), 0);
    }
}
