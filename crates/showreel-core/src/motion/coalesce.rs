//! Per-frame coalescing of bursty input
//!
//! Pointer moves and terminal resizes arrive far more often than frames are
//! drawn. The coalescer keeps only the newest value and hands it out at most
//! once per frame interval; anything pushed in between replaces it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    interval: Duration,
    last_flush: Option<Instant>,
}

impl<T> FrameCoalescer<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            pending: None,
            interval,
            last_flush: None,
        }
    }

    /// Buffer a value, replacing any that has not been taken yet
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the buffered value if a frame interval has passed since the last take
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let due = match self.last_flush {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if !due {
            return None;
        }
        let value = self.pending.take()?;
        self.last_flush = Some(now);
        Some(value)
    }

    /// Drop the buffered value
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
