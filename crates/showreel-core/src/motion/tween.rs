//! Retargetable offset transition
//!
//! Holds the visual offset of a track. A new `animate_to` call supersedes
//! whatever transition is running: it starts from the value visible at that
//! instant, so the offset never snaps back to a stale origin.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone, Default)]
pub struct OffsetTween {
    transition: Option<ActiveTransition>,
    current: f64,
}

impl OffsetTween {
    pub fn new(offset: f64) -> Self {
        Self {
            transition: None,
            current: sanitize(offset),
        }
    }

    /// Offset as of the last `update`
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Offset the track will rest at
    pub fn target(&self) -> f64 {
        self.transition
            .as_ref()
            .map(|t| t.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Set the offset immediately, dropping any transition
    pub fn jump(&mut self, offset: f64) {
        self.transition = None;
        self.current = sanitize(offset);
    }

    /// Start a transition towards `to`, superseding any running one
    pub fn animate_to(&mut self, to: f64, duration: Duration, easing: EasingType, now: Instant) {
        let to = sanitize(to);
        let from = self.update(now);

        if duration.is_zero() || (from - to).abs() < f64::EPSILON {
            self.jump(to);
            return;
        }

        self.transition = Some(ActiveTransition {
            start: now,
            from,
            to,
            duration,
            easing,
        });
    }

    /// Advance the transition and return the current offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref t) = self.transition {
            if is_complete(t.start, t.duration, now) {
                self.current = t.to;
                self.transition = None;
            } else {
                let eased = t.easing.apply(progress(t.start, t.duration, now));
                self.current = lerp(t.from, t.to, eased);
            }
        }
        self.current
    }

    /// Translate the offset and any running transition by `delta`.
    /// Used to re-base a wrapped track without a visible jump.
    pub fn shift(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.current += delta;
        if let Some(ref mut t) = self.transition {
            t.from += delta;
            t.to += delta;
        }
    }
}

#[inline]
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
