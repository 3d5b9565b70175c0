//! Fixed-phase autoplay timer
//!
//! The timer fires at `start + k * delay`. Hovering does not stop it; a tick
//! that lands while hovered is reported as skipped and the phase carries on,
//! so the first advance after the pointer leaves happens at the next regular
//! tick rather than immediately. After a stall longer than one interval the
//! missed ticks collapse into one and the timer re-aligns to its phase.

use std::time::{Duration, Instant};

/// Outcome of polling the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayTick {
    /// No tick was due
    Idle,
    /// A tick was due and the carousel should advance
    Advance,
    /// A tick was due but the carousel is hovered
    Skipped,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    delay: Duration,
    page_count: usize,
    next_due: Instant,
}

impl Autoplay {
    /// Start a timer, or return `None` when autoplay cannot run
    /// (zero delay or nothing to page through)
    pub fn start(delay: Duration, page_count: usize, now: Instant) -> Option<Self> {
        if delay.is_zero() || page_count <= 1 {
            return None;
        }
        Some(Self {
            delay,
            page_count,
            next_due: now + delay,
        })
    }

    /// Whether this timer was created for the given settings
    pub fn matches(&self, delay: Duration, page_count: usize) -> bool {
        self.delay == delay && self.page_count == page_count
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Check for a due tick at `now`
    pub fn poll(&mut self, now: Instant, hovering: bool) -> AutoplayTick {
        if now < self.next_due {
            return AutoplayTick::Idle;
        }

        let behind = now.duration_since(self.next_due);
        let missed = (behind.as_nanos() / self.delay.as_nanos()).min(u32::MAX as u128) as u32;
        let advance = self.delay.saturating_mul(missed.saturating_add(1));
        self.next_due = self.next_due.checked_add(advance).unwrap_or(now + self.delay);

        if hovering {
            AutoplayTick::Skipped
        } else {
            AutoplayTick::Advance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3200);

    #[test]
    fn test_not_started_without_pages() {
        let now = Instant::now();
        assert!(Autoplay::start(DELAY, 1, now).is_none());
        assert!(Autoplay::start(DELAY, 0, now).is_none());
        assert!(Autoplay::start(Duration::ZERO, 4, now).is_none());
        assert!(Autoplay::start(DELAY, 2, now).is_some());
    }

    #[test]
    fn test_ticks_on_fixed_phase() {
        let now = Instant::now();
        let mut timer = Autoplay::start(DELAY, 4, now).unwrap();

        assert_eq!(timer.poll(now + Duration::from_millis(3199), false), AutoplayTick::Idle);
        assert_eq!(timer.poll(now + DELAY, false), AutoplayTick::Advance);
        assert_eq!(timer.poll(now + DELAY, false), AutoplayTick::Idle);
        // Polling late does not shift the phase
        assert_eq!(timer.poll(now + DELAY * 2 + Duration::from_millis(40), false), AutoplayTick::Advance);
        assert_eq!(timer.next_due(), now + DELAY * 3);
    }

    #[test]
    fn test_hover_skips_without_pausing() {
        let now = Instant::now();
        let mut timer = Autoplay::start(DELAY, 4, now).unwrap();

        assert_eq!(timer.poll(now + DELAY, true), AutoplayTick::Skipped);
        // Pointer leaves right after the skipped tick: nothing fires immediately
        assert_eq!(timer.poll(now + DELAY + Duration::from_millis(10), false), AutoplayTick::Idle);
        assert_eq!(timer.poll(now + DELAY * 2, false), AutoplayTick::Advance);
    }

    #[test]
    fn test_stall_collapses_missed_ticks() {
        let now = Instant::now();
        let mut timer = Autoplay::start(DELAY, 4, now).unwrap();

        assert_eq!(timer.poll(now + DELAY * 5 + Duration::from_millis(100), false), AutoplayTick::Advance);
        assert_eq!(timer.next_due(), now + DELAY * 6);
        assert_eq!(timer.poll(now + DELAY * 5 + Duration::from_millis(200), false), AutoplayTick::Idle);
    }

    #[test]
    fn test_matches() {
        let timer = Autoplay::start(DELAY, 4, Instant::now()).unwrap();
        assert!(timer.matches(DELAY, 4));
        assert!(!timer.matches(DELAY, 7));
        assert!(!timer.matches(Duration::from_millis(4500), 4));
    }
}
