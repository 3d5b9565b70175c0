pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod motion;

pub use carousel::{CarouselBackend, CarouselEngine, CarouselSettings, ViewportClass};
pub use config::{AppConfig, CarouselConfig, ControlsPlacement, EasingType, PagingMode};
pub use content::{GuestSlide, Testimonial};
pub use error::{Error, Result};
