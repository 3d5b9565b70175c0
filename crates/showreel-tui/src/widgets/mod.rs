mod cards;
mod carousel;
mod contact_form;
mod header;
mod popup;
mod status_bar;

pub use cards::{GuestCardWidget, TestimonialCardWidget};
pub use carousel::{span_columns, CarouselRegions, CarouselWidget, ControlsLayout};
pub use contact_form::ContactFormWidget;
pub use header::HeaderWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Layout, Rect};

/// Rows used by the testimonial section
pub const TESTIMONIALS_HEIGHT: u16 = 10;
/// Rows used by the contact form
pub const CONTACT_HEIGHT: u16 = 12;

/// Top-level split of the screen into sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Whole screen the sections were computed for
    pub area: Rect,
    pub header: Rect,
    pub guests: Rect,
    pub testimonials: Rect,
    pub contact: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, guests, testimonials, contact, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(TESTIMONIALS_HEIGHT),
            Constraint::Length(CONTACT_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            area,
            header,
            guests,
            testimonials,
            contact,
            status,
        }
    }
}
