//! Motion primitives for slide transitions
//!
//! ## Atomic layer
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation helpers over explicit instants
//!
//! ## Molecular layer
//! - `tween` - A retargetable offset transition built from the atoms
//! - `coalesce` - Keeps only the latest value per frame interval
//!
//! Every function takes the current `Instant` as an argument instead of
//! reading the clock, so callers decide what "now" is and tests stay exact.

pub mod coalesce;
pub mod easing;
pub mod timing;
pub mod tween;

pub use coalesce::FrameCoalescer;
pub use easing::EasingTypeExt;
pub use tween::OffsetTween;
