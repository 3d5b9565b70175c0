//! Carousel capability interface
//!
//! Rendering and input code talks to a carousel only through this trait, so
//! a different pager can be dropped in behind the same controls.

use std::time::Instant;

pub trait CarouselBackend {
    fn scroll_prev(&mut self, now: Instant);

    fn scroll_next(&mut self, now: Instant);

    /// Animate to a page; out-of-range indices are clamped
    fn scroll_to(&mut self, index: usize, now: Instant);

    fn current_index(&self) -> usize;

    fn page_count(&self) -> usize;

    /// Resting track offset of every page, in page order
    fn page_offsets(&self) -> Vec<f64>;
}

/// One pagination dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub index: usize,
    pub active: bool,
}

/// Indicators for every page of `backend`, with the current one active
pub fn pagination<B: CarouselBackend + ?Sized>(backend: &B) -> Vec<PageIndicator> {
    let current = backend.current_index();
    (0..backend.page_count().max(1))
        .map(|index| PageIndicator {
            index,
            active: index == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPager {
        index: usize,
        pages: usize,
    }

    impl CarouselBackend for FixedPager {
        fn scroll_prev(&mut self, _now: Instant) {}
        fn scroll_next(&mut self, _now: Instant) {}
        fn scroll_to(&mut self, index: usize, _now: Instant) {
            self.index = index.min(self.pages.saturating_sub(1));
        }
        fn current_index(&self) -> usize {
            self.index
        }
        fn page_count(&self) -> usize {
            self.pages
        }
        fn page_offsets(&self) -> Vec<f64> {
            vec![0.0; self.pages]
        }
    }

    #[test]
    fn test_pagination_from_any_backend() {
        let mut pager = FixedPager { index: 0, pages: 3 };
        pager.scroll_to(9, Instant::now());
        let dots = pagination(&pager);
        assert_eq!(dots.len(), 3);
        assert!(dots[2].active);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
    }

    #[test]
    fn test_pagination_never_empty() {
        let pager = FixedPager { index: 0, pages: 0 };
        let dots = pagination(&pager);
        assert_eq!(dots, vec![PageIndicator { index: 0, active: true }]);
    }
}
