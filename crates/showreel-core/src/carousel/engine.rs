//! Responsive autoplaying carousel
//!
//! One `CarouselEngine` is one mounted carousel. It owns the item list, the
//! measured geometry, the current page, the track offset transition and the
//! autoplay timer. Nothing is shared between instances.
//!
//! A looping track repeats its slides every lap, so there is no seam to
//! re-base. A wrapping move shifts the visible offset by whole laps before
//! the transition starts and then travels one step in the requested
//! direction.
//!
//! Every operation is total. Until a nonzero container width has been
//! measured the engine is not ready and navigation is a no-op.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::autoplay::{Autoplay, AutoplayTick};
use super::backend::{pagination, CarouselBackend, PageIndicator};
use super::layout::{clamp_index, page_count, wrap_next, wrap_prev, SlideSpan, TrackLayout};
use super::viewport::{Breakpoints, ItemsPerView, ViewportClass};
use crate::config::{CarouselConfig, EasingType, PagingMode};
use crate::motion::OffsetTween;

/// Behavior fixed when the carousel is constructed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub gap: f64,
    /// Zero disables autoplay
    pub autoplay_delay: Duration,
    pub items_per_view: ItemsPerView,
    pub breakpoints: Breakpoints,
    pub paging: PagingMode,
    /// When false, animated moves are applied immediately
    pub animate: bool,
    pub transition: Duration,
    pub easing: EasingType,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            gap: config.gap_px,
            autoplay_delay: Duration::from_millis(config.autoplay_delay_ms),
            items_per_view: config.items_per_view.into(),
            breakpoints: config.breakpoints.into(),
            paging: config.paging,
            animate: config.animation.enabled,
            transition: Duration::from_millis(config.animation.duration_ms),
            easing: config.animation.easing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselEngine<T> {
    items: Vec<T>,
    settings: CarouselSettings,
    viewport_class: ViewportClass,
    layout: TrackLayout,
    index: usize,
    ready: bool,
    hovering: bool,
    tween: OffsetTween,
    autoplay: Option<Autoplay>,
}

impl<T> CarouselEngine<T> {
    pub fn new(items: Vec<T>, settings: CarouselSettings) -> Self {
        let viewport_class = ViewportClass::Large;
        let per_view = settings.items_per_view.for_class(viewport_class);
        Self {
            items,
            viewport_class,
            layout: TrackLayout::new(0.0, settings.gap, per_view),
            settings,
            index: 0,
            ready: false,
            hovering: false,
            tween: OffsetTween::default(),
            autoplay: None,
        }
    }

    /// Measure for the first time and rest on page 0 without animating.
    /// Stays not ready while the container has no width.
    pub fn initialize(&mut self, viewport_width: f64, container_width: f64, now: Instant) {
        self.apply_measurements(viewport_width, container_width);
        if !self.ready {
            debug!(
                viewport = viewport_width,
                container = container_width,
                "Carousel not measured yet, deferring"
            );
            return;
        }
        self.index = 0;
        self.go_to(0, false, now);
    }

    /// Recompute the viewport class and geometry, then reposition on the
    /// (re-clamped) current page without animation
    pub fn on_resize(&mut self, viewport_width: f64, container_width: f64, now: Instant) {
        self.apply_measurements(viewport_width, container_width);
        self.index = clamp_index(self.index as isize, self.page_count());
        self.go_to(self.index as isize, false, now);
    }

    /// Go to a page, clamping into range. No-op until ready.
    pub fn go_to(&mut self, target: isize, animate: bool, now: Instant) {
        if !self.ready {
            return;
        }
        let index = clamp_index(target, self.page_count());
        self.move_to(index, animate, Heading::Nearest, now);
    }

    /// Advance one page, wrapping from the last page to the first
    pub fn next(&mut self, now: Instant) {
        if !self.can_navigate() {
            return;
        }
        let target = wrap_next(self.index, self.page_count());
        self.move_to(target, true, Heading::Forward, now);
    }

    /// Retreat one page, wrapping from the first page to the last
    pub fn prev(&mut self, now: Instant) {
        if !self.can_navigate() {
            return;
        }
        let target = wrap_prev(self.index, self.page_count());
        self.move_to(target, true, Heading::Backward, now);
    }

    /// Pointer over the component. Only the flag changes; the timer keeps running.
    pub fn set_hover(&mut self, active: bool) {
        if self.hovering != active {
            trace!(hovering = active, "Carousel hover changed");
        }
        self.hovering = active;
    }

    /// Per-frame driver: runs autoplay, advances the transition and
    /// returns the visual track offset
    pub fn update(&mut self, now: Instant) -> f64 {
        self.sync_autoplay(now);

        let tick = match self.autoplay.as_mut() {
            Some(timer) => timer.poll(now, self.hovering),
            None => AutoplayTick::Idle,
        };
        match tick {
            AutoplayTick::Advance => self.next(now),
            AutoplayTick::Skipped => trace!("Autoplay tick skipped while hovered"),
            AutoplayTick::Idle => {}
        }

        self.tween.update(now)
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    #[inline]
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        page_count(self.items.len(), self.layout.per_view(), self.settings.paging)
    }

    #[inline]
    pub fn per_view(&self) -> usize {
        self.layout.per_view()
    }

    #[inline]
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    /// Visual offset as of the last update
    #[inline]
    pub fn offset(&self) -> f64 {
        self.tween.current()
    }

    /// Offset the track will rest at
    pub fn target_offset(&self) -> f64 {
        self.tween.target()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }

    /// Whether the autoplay timer is currently armed
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// When the next autoplay tick is due, if armed
    pub fn next_autoplay_at(&self) -> Option<Instant> {
        self.autoplay.as_ref().map(Autoplay::next_due)
    }

    /// Prev/next controls are usable
    pub fn controls_enabled(&self) -> bool {
        self.can_navigate()
    }

    /// One indicator per page, with the current page marked
    pub fn pagination(&self) -> Vec<PageIndicator> {
        pagination(self)
    }

    /// Slides intersecting the viewport at the current offset
    pub fn visible_slides(&self) -> Vec<SlideSpan> {
        self.layout
            .visible_slides(self.tween.current(), self.items.len(), self.settings.paging)
    }

    fn apply_measurements(&mut self, viewport_width: f64, container_width: f64) {
        let class = self.settings.breakpoints.classify(viewport_width);
        if class != self.viewport_class {
            debug!(
                from = self.viewport_class.as_str(),
                to = class.as_str(),
                "Carousel viewport class changed"
            );
        }
        self.viewport_class = class;

        let per_view = self.settings.items_per_view.for_class(class);
        self.layout = TrackLayout::new(container_width, self.settings.gap, per_view);

        if !self.ready && self.layout.container_width() > 0.0 {
            debug!(
                container = self.layout.container_width(),
                per_view,
                pages = self.page_count(),
                "Carousel ready"
            );
            self.ready = true;
        }
    }

    fn move_to(&mut self, index: usize, animate: bool, heading: Heading, now: Instant) {
        let offset = self.layout.offset_for(index);

        if animate && self.settings.animate {
            if self.is_looping() {
                self.tween.update(now);
                self.align_lap(offset, heading);
            }
            self.tween
                .animate_to(offset, self.settings.transition, self.settings.easing, now);
        } else {
            self.tween.jump(offset);
        }

        if index != self.index {
            trace!(from = self.index, to = index, animate, "Carousel page change");
        }
        self.index = index;
    }

    /// Move the visible offset by whole laps of a looping track so the
    /// transition towards `target` runs in the requested direction.
    /// The rendered slides are identical one lap apart.
    fn align_lap(&mut self, target: f64, heading: Heading) {
        let period = self.layout.period(self.items.len());
        let current = self.tween.current();
        if period <= 0.0 || (current - target).abs() < f64::EPSILON {
            return;
        }
        let laps = (current - target) / period;
        let k = match heading {
            // Offsets decrease going forward: start in (target, target + period]
            Heading::Forward => laps.ceil() - 1.0,
            // Start in [target - period, target)
            Heading::Backward => laps.floor() + 1.0,
            Heading::Nearest => laps.round(),
        };
        if k != 0.0 {
            self.tween.shift(-k * period);
        }
    }

    /// Keep the timer in step with (delay, pages). It is only recreated
    /// when one of those changes.
    fn sync_autoplay(&mut self, now: Instant) {
        let delay = self.settings.autoplay_delay;
        let pages = self.page_count();
        let wanted = self.ready && pages > 1 && !delay.is_zero();

        match (&self.autoplay, wanted) {
            (Some(timer), true) if timer.matches(delay, pages) => {}
            (_, true) => {
                debug!(delay_ms = delay.as_millis() as u64, pages, "Autoplay timer armed");
                self.autoplay = Autoplay::start(delay, pages, now);
            }
            (Some(_), false) => {
                debug!(pages, "Autoplay timer released");
                self.autoplay = None;
            }
            (None, false) => {}
        }
    }

    fn can_navigate(&self) -> bool {
        self.ready && self.page_count() > 1
    }

    fn is_looping(&self) -> bool {
        self.settings.paging == PagingMode::Looping
    }
}

/// Direction of travel for a page change on a looping track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Forward,
    Backward,
    Nearest,
}

impl<T> CarouselBackend for CarouselEngine<T> {
    fn scroll_prev(&mut self, now: Instant) {
        self.prev(now);
    }

    fn scroll_next(&mut self, now: Instant) {
        self.next(now);
    }

    fn scroll_to(&mut self, index: usize, now: Instant) {
        let target = isize::try_from(index).unwrap_or(isize::MAX);
        self.go_to(target, true, now);
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn page_count(&self) -> usize {
        CarouselEngine::page_count(self)
    }

    fn page_offsets(&self) -> Vec<f64> {
        (0..CarouselEngine::page_count(self))
            .map(|i| self.layout.offset_for(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemsPerViewConfig;
    use proptest::prelude::*;

    const LARGE: f64 = 1280.0;
    const SMALL: f64 = 400.0;
    const AUTOPLAY: Duration = Duration::from_millis(3200);
    const TRANSITION: Duration = Duration::from_millis(600);

    fn settings(paging: PagingMode) -> CarouselSettings {
        CarouselSettings {
            gap: 16.0,
            autoplay_delay: AUTOPLAY,
            items_per_view: ItemsPerViewConfig {
                small: 1,
                medium: 2,
                large: 4,
            }
            .into(),
            breakpoints: Breakpoints::default(),
            paging,
            animate: true,
            transition: TRANSITION,
            easing: EasingType::Quadratic,
        }
    }

    fn engine(n: usize) -> CarouselEngine<usize> {
        CarouselEngine::new((0..n).collect(), settings(PagingMode::Bounded))
    }

    fn ready_engine(n: usize, now: Instant) -> CarouselEngine<usize> {
        let mut e = engine(n);
        e.initialize(LARGE, 1000.0, now);
        e
    }

    #[test]
    fn test_initialize_defers_until_measured() {
        let now = Instant::now();
        let mut e = engine(7);

        e.initialize(LARGE, 0.0, now);
        assert!(!e.is_ready());
        assert_eq!(e.per_view(), 4);

        e.go_to(2, false, now);
        e.next(now);
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.offset(), 0.0);

        // A later resize with real width makes it ready
        e.on_resize(LARGE, 1000.0, now);
        assert!(e.is_ready());
        e.go_to(2, false, now);
        assert_eq!(e.current_index(), 2);
        assert_eq!(e.offset(), -508.0);
    }

    #[test]
    fn test_initialize_rests_on_first_page() {
        let now = Instant::now();
        let e = ready_engine(7, now);
        assert!(e.is_ready());
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.offset(), 0.0);
        assert!(!e.is_animating());
    }

    #[test]
    fn test_go_to_clamps() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);

        e.go_to(-3, false, now);
        assert_eq!(e.current_index(), 0);
        e.go_to(40, false, now);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.offset(), -762.0);
    }

    #[test]
    fn test_go_to_animates_with_deceleration() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);

        e.go_to(1, true, now);
        assert!(e.is_animating());
        assert_eq!(e.target_offset(), -254.0);

        let half = e.update(now + TRANSITION / 2);
        assert!(half < -127.0 && half > -254.0);
        assert_eq!(e.update(now + TRANSITION), -254.0);
        assert!(!e.is_animating());
    }

    #[test]
    fn test_seven_items_four_per_view_closure() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        assert_eq!(e.page_count(), 4);

        let mut seen = Vec::new();
        for _ in 0..4 {
            e.next(now);
            seen.push(e.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.prev(now);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.target_offset(), -762.0);
    }

    #[test]
    fn test_fewer_items_than_view_is_single_page() {
        let now = Instant::now();
        let mut e = ready_engine(3, now);
        assert_eq!(e.page_count(), 1);
        assert!(!e.controls_enabled());

        e.next(now);
        e.prev(now);
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.offset(), 0.0);

        e.update(now + AUTOPLAY * 3);
        assert!(!e.is_autoplaying());
    }

    #[test]
    fn test_empty_list() {
        let now = Instant::now();
        let mut e = ready_engine(0, now);
        assert_eq!(e.page_count(), 1);
        assert_eq!(e.current_index(), 0);
        assert!(!e.controls_enabled());
        assert!(e.visible_slides().is_empty());

        e.go_to(5, true, now);
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.update(now + AUTOPLAY), 0.0);
        assert!(!e.is_autoplaying());
        assert_eq!(e.pagination().len(), 1);
    }

    #[test]
    fn test_resize_large_to_small_keeps_index() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.go_to(3, false, now);

        e.on_resize(SMALL, 400.0, now);
        assert_eq!(e.viewport_class(), ViewportClass::Small);
        assert_eq!(e.per_view(), 1);
        assert_eq!(e.page_count(), 7);
        assert_eq!(e.current_index(), 3);
        // slide width 400, step 416
        assert_eq!(e.offset(), -1248.0);
    }

    #[test]
    fn test_resize_reclamps_index() {
        let now = Instant::now();
        let mut e = engine(7);
        e.initialize(SMALL, 400.0, now);
        e.go_to(6, false, now);

        e.on_resize(LARGE, 1000.0, now);
        assert_eq!(e.page_count(), 4);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.offset(), -762.0);
    }

    #[test]
    fn test_resize_supersedes_in_flight_transition() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.go_to(2, true, now);
        e.update(now + Duration::from_millis(100));
        assert!(e.is_animating());

        let later = now + Duration::from_millis(150);
        e.on_resize(SMALL, 400.0, later);
        assert!(!e.is_animating());
        assert_eq!(e.update(now + Duration::from_secs(2)), -832.0);
    }

    #[test]
    fn test_autoplay_advances_on_schedule() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);

        e.update(now);
        assert!(e.is_autoplaying());
        e.update(now + AUTOPLAY - Duration::from_millis(1));
        assert_eq!(e.current_index(), 0);

        e.update(now + AUTOPLAY);
        assert_eq!(e.current_index(), 1);
        e.update(now + AUTOPLAY * 2);
        assert_eq!(e.current_index(), 2);
    }

    #[test]
    fn test_hover_skips_autoplay_ticks() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.update(now);

        e.set_hover(true);
        e.update(now + AUTOPLAY);
        e.update(now + AUTOPLAY * 2);
        assert_eq!(e.current_index(), 0);

        // Leaving does not trigger an immediate advance
        e.set_hover(false);
        e.update(now + AUTOPLAY * 2 + Duration::from_millis(5));
        assert_eq!(e.current_index(), 0);
        e.update(now + AUTOPLAY * 3);
        assert_eq!(e.current_index(), 1);
    }

    #[test]
    fn test_manual_navigation_keeps_autoplay_phase() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.update(now);
        let due = e.next_autoplay_at();

        e.next(now + Duration::from_millis(500));
        e.update(now + Duration::from_millis(500));
        assert_eq!(e.next_autoplay_at(), due);
    }

    #[test]
    fn test_autoplay_recreated_only_when_pages_change() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.update(now);
        let due = e.next_autoplay_at();

        // Same class, different container: pages unchanged
        let t1 = now + Duration::from_millis(700);
        e.on_resize(LARGE, 1100.0, t1);
        e.update(t1);
        assert_eq!(e.next_autoplay_at(), due);

        // Class change: 7 pages now, timer rearmed from t2
        let t2 = now + Duration::from_millis(900);
        e.on_resize(SMALL, 400.0, t2);
        e.update(t2);
        assert_eq!(e.next_autoplay_at(), Some(t2 + AUTOPLAY));

        // Growing to a single page releases the timer
        let mut wide = CarouselEngine::new(
            (0..5).collect::<Vec<_>>(),
            CarouselSettings {
                items_per_view: ItemsPerViewConfig {
                    small: 1,
                    medium: 2,
                    large: 8,
                }
                .into(),
                ..settings(PagingMode::Bounded)
            },
        );
        wide.initialize(SMALL, 400.0, now);
        wide.update(now);
        assert!(wide.is_autoplaying());
        wide.on_resize(LARGE, 1000.0, now);
        wide.update(now);
        assert!(!wide.is_autoplaying());
    }

    #[test]
    fn test_autoplay_waits_for_ready() {
        let now = Instant::now();
        let mut e = engine(7);
        e.initialize(LARGE, 0.0, now);
        e.update(now + AUTOPLAY * 2);
        assert!(!e.is_autoplaying());
        assert_eq!(e.current_index(), 0);
    }

    #[test]
    fn test_animation_disabled_applies_immediately() {
        let now = Instant::now();
        let mut e = CarouselEngine::new(
            (0..7).collect::<Vec<_>>(),
            CarouselSettings {
                animate: false,
                ..settings(PagingMode::Bounded)
            },
        );
        e.initialize(LARGE, 1000.0, now);
        e.next(now);
        assert!(!e.is_animating());
        assert_eq!(e.offset(), -254.0);
    }

    #[test]
    fn test_pagination_marks_current_page() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        e.go_to(2, false, now);
        let dots: Vec<bool> = e.pagination().iter().map(|p| p.active).collect();
        assert_eq!(dots, vec![false, false, true, false]);
    }

    #[test]
    fn test_backend_interface() {
        let now = Instant::now();
        let mut e = ready_engine(7, now);
        let backend: &mut dyn CarouselBackend = &mut e;

        backend.scroll_to(2, now);
        assert_eq!(backend.current_index(), 2);
        backend.scroll_next(now);
        backend.scroll_next(now);
        assert_eq!(backend.current_index(), 0);
        backend.scroll_prev(now);
        assert_eq!(backend.current_index(), 3);
        assert_eq!(backend.page_offsets(), vec![0.0, -254.0, -508.0, -762.0]);
    }

    #[test]
    fn test_looping_pages_and_seamless_wrap() {
        let now = Instant::now();
        let mut e = CarouselEngine::new((0..4).collect::<Vec<_>>(), settings(PagingMode::Looping));
        // Medium viewport: 2 per view
        e.initialize(800.0, 800.0, now);
        assert_eq!(e.per_view(), 2);
        assert_eq!(e.page_count(), 4);

        e.go_to(3, false, now);
        e.next(now);
        assert_eq!(e.current_index(), 0);
        assert_eq!(e.target_offset(), 0.0);

        // Travels left from one step right of page 0, with the last item
        // entering from the left instead of the whole track rewinding
        let mid = e.update(now + TRANSITION / 2);
        assert!(mid > 0.0);
        let items: Vec<usize> = e.visible_slides().iter().map(|s| s.item).collect();
        assert_eq!(items, vec![3, 0, 1]);

        assert_eq!(e.update(now + TRANSITION), 0.0);
        let items: Vec<usize> = e.visible_slides().iter().map(|s| s.item).collect();
        assert_eq!(items, vec![0, 1]);
    }

    #[test]
    fn test_looping_next_during_wrap_keeps_direction() {
        let now = Instant::now();
        let mut e = CarouselEngine::new((0..4).collect::<Vec<_>>(), settings(PagingMode::Looping));
        e.initialize(800.0, 800.0, now);
        let step = e.layout().step();

        e.go_to(3, false, now);
        e.next(now);
        let t = now + Duration::from_millis(100);
        let before = e.update(t);
        e.next(t);
        assert_eq!(e.current_index(), 1);
        let after = e.update(t + Duration::from_millis(16));
        assert!(after < before);
        assert_eq!(e.update(t + TRANSITION), -step);
    }

    #[test]
    fn test_looping_prev_from_first_runs_backwards() {
        let now = Instant::now();
        let mut e = CarouselEngine::new((0..4).collect::<Vec<_>>(), settings(PagingMode::Looping));
        e.initialize(800.0, 800.0, now);
        let step = e.layout().step();

        e.prev(now);
        assert_eq!(e.current_index(), 3);
        assert_eq!(e.target_offset(), -3.0 * step);
        // Starts one lap to the right of the target, so it moves right
        let early = e.update(now + Duration::from_millis(60));
        assert!(early < -3.0 * step);
        assert_eq!(e.update(now + TRANSITION), -3.0 * step);
    }

    #[test]
    fn test_looping_with_few_items_is_static() {
        let now = Instant::now();
        let mut e = CarouselEngine::new((0..3).collect::<Vec<_>>(), settings(PagingMode::Looping));
        e.initialize(LARGE, 1000.0, now);
        assert_eq!(e.page_count(), 1);
        e.next(now);
        assert_eq!(e.current_index(), 0);
    }

    proptest! {
        #[test]
        fn prop_any_request_lands_in_range(
            n in 0usize..40,
            target in any::<isize>(),
            width in 0.0f64..3000.0,
            looping in any::<bool>(),
        ) {
            let now = Instant::now();
            let paging = if looping { PagingMode::Looping } else { PagingMode::Bounded };
            let mut e = CarouselEngine::new((0..n).collect::<Vec<_>>(), settings(paging));
            e.initialize(width, width, now);
            e.go_to(target, false, now);
            prop_assert!(e.current_index() < e.page_count());
            prop_assert!(e.offset().is_finite());

            e.next(now);
            prop_assert!(e.current_index() < e.page_count());
            e.prev(now);
            prop_assert!(e.current_index() < e.page_count());
            prop_assert!(e.update(now + TRANSITION).is_finite());
        }

        #[test]
        fn prop_next_page_count_times_returns(n in 1usize..30, start in 0usize..30) {
            let now = Instant::now();
            let mut e = ready_engine(n, now);
            let pages = e.page_count();
            e.go_to((start % pages) as isize, false, now);
            let origin = e.current_index();
            for _ in 0..pages {
                e.next(now);
            }
            prop_assert_eq!(e.current_index(), origin);
        }
    }
}
