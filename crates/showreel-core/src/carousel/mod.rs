//! Carousel engine
//!
//! - `viewport`: breakpoint classification and items-per-view
//! - `layout`: page count, clamping and track geometry
//! - `autoplay`: fixed-phase autoplay timer
//! - `engine`: one carousel instance tying the above together
//! - `backend`: capability trait the renderer drives

pub mod autoplay;
pub mod backend;
pub mod engine;
pub mod layout;
pub mod viewport;

pub use autoplay::{Autoplay, AutoplayTick};
pub use backend::{pagination, CarouselBackend, PageIndicator};
pub use engine::{CarouselEngine, CarouselSettings};
pub use layout::{page_count, SlideSpan, TrackLayout};
pub use viewport::{Breakpoints, ItemsPerView, ViewportClass};
