//! Pure paging and track geometry
//!
//! All functions are total: any item count, any items-per-view and any
//! requested index produce an in-range page and a finite offset.

use std::ops::Range;

use crate::config::PagingMode;

/// Number of navigable pages.
///
/// Bounded: `max(n - per_view, 0) + 1`. Looping: one page per item once
/// there are more items than fit, otherwise a single page.
pub fn page_count(item_count: usize, per_view: usize, mode: PagingMode) -> usize {
    let per_view = per_view.max(1);
    match mode {
        PagingMode::Bounded => item_count.saturating_sub(per_view) + 1,
        PagingMode::Looping => {
            if item_count > per_view {
                item_count
            } else {
                1
            }
        }
    }
}

/// Clamp a requested page into `[0, page_count - 1]`
pub fn clamp_index(target: isize, page_count: usize) -> usize {
    let last = page_count.max(1) - 1;
    if target <= 0 {
        0
    } else {
        (target as usize).min(last)
    }
}

/// Page after `index`, wrapping from the last page to the first
pub fn wrap_next(index: usize, page_count: usize) -> usize {
    let pages = page_count.max(1);
    (index % pages + 1) % pages
}

/// Page before `index`, wrapping from the first page to the last
pub fn wrap_prev(index: usize, page_count: usize) -> usize {
    let pages = page_count.max(1);
    (index % pages + pages - 1) % pages
}

/// One slide positioned relative to the viewport's left edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSpan {
    /// Index into the item list
    pub item: usize,
    /// Logical track position; differs from `item` on wrapped copies
    pub position: isize,
    /// Left edge relative to the viewport
    pub x: f64,
    pub width: f64,
}

/// Geometry of a track inside its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    container_width: f64,
    gap: f64,
    per_view: usize,
}

impl TrackLayout {
    /// Build a layout. Non-finite or negative widths and gaps become zero.
    pub fn new(container_width: f64, gap: f64, per_view: usize) -> Self {
        Self {
            container_width: non_negative(container_width),
            gap: non_negative(gap),
            per_view: per_view.max(1),
        }
    }

    #[inline]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    #[inline]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    #[inline]
    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// `(W - G * (P - 1)) / P`, floored at zero
    pub fn slide_width(&self) -> f64 {
        let p = self.per_view as f64;
        ((self.container_width - self.gap * (p - 1.0)) / p).max(0.0)
    }

    /// Distance between the left edges of neighbouring slides
    #[inline]
    pub fn step(&self) -> f64 {
        self.slide_width() + self.gap
    }

    /// Track offset that puts `index` at the left edge: `-index * step`
    pub fn offset_for(&self, index: usize) -> f64 {
        if index == 0 {
            0.0
        } else {
            -(index as f64) * self.step()
        }
    }

    /// Horizontal length of one full lap of a looping track
    pub fn period(&self, item_count: usize) -> f64 {
        item_count as f64 * self.step()
    }

    /// Logical positions whose slides intersect the viewport at `offset`
    fn visible_positions(&self, offset: f64) -> Range<isize> {
        let step = self.step();
        if step <= 0.0 || self.container_width <= 0.0 || !offset.is_finite() {
            return 0..0;
        }
        let view_start = -offset;
        let view_end = view_start + self.container_width;
        // A slide at p covers [p * step, p * step + slide_width)
        let first = ((view_start - self.slide_width()) / step).floor() as isize + 1;
        let last = (view_end / step).ceil() as isize;
        first..last.max(first)
    }

    /// Slides intersecting the viewport at `offset`.
    /// Looping tracks repeat the items in both directions.
    pub fn visible_slides(&self, offset: f64, item_count: usize, mode: PagingMode) -> Vec<SlideSpan> {
        if item_count == 0 {
            return Vec::new();
        }
        let width = self.slide_width();
        let step = self.step();

        self.visible_positions(offset)
            .filter_map(|position| {
                let item = match mode {
                    PagingMode::Bounded => {
                        if position < 0 || position as usize >= item_count {
                            return None;
                        }
                        position as usize
                    }
                    PagingMode::Looping => position.rem_euclid(item_count as isize) as usize,
                };
                Some(SlideSpan {
                    item,
                    position,
                    x: position as f64 * step + offset,
                    width,
                })
            })
            .collect()
    }
}

#[inline]
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_count_scenarios() {
        assert_eq!(page_count(7, 4, PagingMode::Bounded), 4);
        assert_eq!(page_count(3, 4, PagingMode::Bounded), 1);
        assert_eq!(page_count(0, 4, PagingMode::Bounded), 1);
        assert_eq!(page_count(7, 1, PagingMode::Bounded), 7);
        assert_eq!(page_count(7, 0, PagingMode::Bounded), 7);

        assert_eq!(page_count(4, 3, PagingMode::Looping), 4);
        assert_eq!(page_count(3, 3, PagingMode::Looping), 1);
        assert_eq!(page_count(0, 1, PagingMode::Looping), 1);
    }

    #[test]
    fn test_clamp_and_wrap() {
        assert_eq!(clamp_index(-5, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(99, 4), 3);
        assert_eq!(clamp_index(3, 0), 0);

        assert_eq!(wrap_next(3, 4), 0);
        assert_eq!(wrap_prev(0, 4), 3);
        assert_eq!(wrap_next(0, 1), 0);
        assert_eq!(wrap_prev(0, 1), 0);
    }

    #[test]
    fn test_slide_width_and_offsets() {
        // 1000 wide, 16 gap, 4 per view: (1000 - 48) / 4 = 238
        let layout = TrackLayout::new(1000.0, 16.0, 4);
        assert_eq!(layout.slide_width(), 238.0);
        assert_eq!(layout.step(), 254.0);
        assert_eq!(layout.offset_for(0), 0.0);
        assert_eq!(layout.offset_for(3), -762.0);
    }

    #[test]
    fn test_degenerate_geometry_stays_finite() {
        let layout = TrackLayout::new(f64::NAN, -4.0, 0);
        assert_eq!(layout.container_width(), 0.0);
        assert_eq!(layout.gap(), 0.0);
        assert_eq!(layout.per_view(), 1);
        assert_eq!(layout.slide_width(), 0.0);
        assert_eq!(layout.offset_for(5), 0.0);

        // Gap wider than the container
        let layout = TrackLayout::new(100.0, 80.0, 3);
        assert_eq!(layout.slide_width(), 0.0);
        assert!(layout.offset_for(2).is_finite());
    }

    #[test]
    fn test_visible_slides_bounded() {
        let layout = TrackLayout::new(1000.0, 16.0, 4);
        let slides = layout.visible_slides(0.0, 7, PagingMode::Bounded);
        let items: Vec<usize> = slides.iter().map(|s| s.item).collect();
        assert_eq!(items, vec![0, 1, 2, 3]);
        assert_eq!(slides[1].x, 254.0);

        let slides = layout.visible_slides(layout.offset_for(3), 7, PagingMode::Bounded);
        let items: Vec<usize> = slides.iter().map(|s| s.item).collect();
        assert_eq!(items, vec![3, 4, 5, 6]);
        assert_eq!(slides[0].x, 0.0);
    }

    #[test]
    fn test_visible_slides_mid_transition() {
        let layout = TrackLayout::new(1000.0, 16.0, 4);
        let slides = layout.visible_slides(-127.0, 7, PagingMode::Bounded);
        let items: Vec<usize> = slides.iter().map(|s| s.item).collect();
        // Half of slide 0 scrolled out, slide 4 partially in
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_visible_slides_looping_wraps() {
        let layout = TrackLayout::new(900.0, 0.0, 3);
        let slides = layout.visible_slides(layout.offset_for(3), 4, PagingMode::Looping);
        let items: Vec<usize> = slides.iter().map(|s| s.item).collect();
        assert_eq!(items, vec![3, 0, 1]);

        // Before the first slide
        let slides = layout.visible_slides(300.0, 4, PagingMode::Looping);
        let items: Vec<usize> = slides.iter().map(|s| s.item).collect();
        assert_eq!(items, vec![3, 0, 1]);
        assert_eq!(slides[0].position, -1);
    }

    #[test]
    fn test_visible_slides_empty_cases() {
        let layout = TrackLayout::new(0.0, 16.0, 4);
        assert!(layout.visible_slides(0.0, 7, PagingMode::Bounded).is_empty());
        let layout = TrackLayout::new(500.0, 16.0, 2);
        assert!(layout.visible_slides(0.0, 0, PagingMode::Looping).is_empty());
    }

    proptest! {
        #[test]
        fn prop_page_count_formula(n in 0usize..200, p in 1usize..12) {
            let pages = page_count(n, p, PagingMode::Bounded);
            prop_assert_eq!(pages, n.saturating_sub(p) + 1);
            prop_assert!(pages >= 1);
            if n <= p {
                prop_assert_eq!(pages, 1);
            }
        }

        #[test]
        fn prop_clamped_index_in_range(target in any::<isize>(), pages in 1usize..64) {
            let index = clamp_index(target, pages);
            prop_assert!(index < pages);
        }

        #[test]
        fn prop_next_closure(start in 0usize..64, pages in 1usize..64) {
            let start = start % pages;
            let mut index = start;
            for _ in 0..pages {
                index = wrap_next(index, pages);
                prop_assert!(index < pages);
            }
            prop_assert_eq!(index, start);
        }

        #[test]
        fn prop_prev_undoes_next(start in 0usize..64, pages in 1usize..64) {
            let start = start % pages;
            prop_assert_eq!(wrap_prev(wrap_next(start, pages), pages), start);
        }

        #[test]
        fn prop_offset_formula(
            w in 0.0f64..4000.0,
            g in 0.0f64..64.0,
            p in 1usize..8,
            i in 0usize..32,
        ) {
            let layout = TrackLayout::new(w, g, p);
            let expected_width = ((w - g * (p as f64 - 1.0)) / p as f64).max(0.0);
            prop_assert!((layout.slide_width() - expected_width).abs() < 1e-9);
            let offset = layout.offset_for(i);
            prop_assert!(offset.is_finite());
            prop_assert!((offset + i as f64 * (expected_width + g)).abs() < 1e-6);
            prop_assert_eq!(layout.offset_for(0), 0.0);
        }
    }
}
