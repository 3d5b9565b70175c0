use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::{Position, Rect};
use showreel_core::carousel::CarouselBackend;
use showreel_core::contact::{ContactField, ContactForm, ContactSubmission, FormNotice};
use showreel_core::motion::timing::frame_interval;
use showreel_core::motion::FrameCoalescer;
use showreel_core::{AppConfig, CarouselEngine, CarouselSettings, GuestSlide, Testimonial};
use tracing::{debug, info};

use crate::event::SubmissionResult;
use crate::input::Action;
use crate::theme::Theme;
use crate::widgets::{CarouselRegions, ScreenLayout};

/// Section that receives keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Guests,
    Testimonials,
    Contact,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Guests => Focus::Testimonials,
            Focus::Testimonials => Focus::Contact,
            Focus::Contact => Focus::Guests,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Guests => Focus::Contact,
            Focus::Testimonials => Focus::Guests,
            Focus::Contact => Focus::Testimonials,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Guests => "Guests",
            Focus::Testimonials => "Testimonials",
            Focus::Contact => "Contact",
        }
    }
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing into the contact form
    Editing,
    Help,
    /// Result of a contact submission
    Alert(FormNotice),
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub guests: CarouselEngine<GuestSlide>,
    pub testimonials: CarouselEngine<Testimonial>,
    pub form: ContactForm,
    pub focus: Focus,
    pub mode: Mode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Carousel paused from the keyboard, as if the pointer rested on it
    pub held: Option<Focus>,
    /// Last terminal cell the pointer was seen over
    pub pointer: Option<(u16, u16)>,
    /// Layout units per terminal column
    pub cell_width: f64,
    pub screen: ScreenLayout,
    pub guests_regions: CarouselRegions,
    pub testimonials_regions: CarouselRegions,
    resize_events: FrameCoalescer<(u16, u16)>,
    pointer_events: FrameCoalescer<(u16, u16)>,
    measured: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let frame = frame_interval(config.ui.animation_fps);
        let guests = CarouselEngine::new(
            config.content.guests.clone(),
            CarouselSettings::from(&config.guests),
        );
        let testimonials = CarouselEngine::new(
            config.content.testimonials.clone(),
            CarouselSettings::from(&config.testimonials),
        );
        let cell_width = if config.ui.cell_width_px > 0.0 {
            config.ui.cell_width_px
        } else {
            8.0
        };

        Self {
            theme,
            guests,
            testimonials,
            form: ContactForm::new(),
            focus: Focus::Guests,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            held: None,
            pointer: None,
            cell_width,
            screen: ScreenLayout::default(),
            guests_regions: CarouselRegions::default(),
            testimonials_regions: CarouselRegions::default(),
            resize_events: FrameCoalescer::new(frame),
            pointer_events: FrameCoalescer::new(frame),
            measured: false,
            config,
        }
    }

    /// Measure the screen and hand the widths to both carousels
    pub fn apply_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.screen = ScreenLayout::new(Rect::new(0, 0, width, height));
        self.guests_regions = CarouselRegions::new(self.screen.guests, self.config.guests.controls);
        self.testimonials_regions =
            CarouselRegions::new(self.screen.testimonials, self.config.testimonials.controls);

        let viewport = width as f64 * self.cell_width;
        let guests_width = self.guests_regions.track.width as f64 * self.cell_width;
        let testimonials_width = self.testimonials_regions.track.width as f64 * self.cell_width;

        if self.measured {
            self.guests.on_resize(viewport, guests_width, now);
            self.testimonials.on_resize(viewport, testimonials_width, now);
        } else {
            self.guests.initialize(viewport, guests_width, now);
            self.testimonials.initialize(viewport, testimonials_width, now);
            self.measured = true;
        }
        debug!(width, height, class = self.guests.viewport_class().as_str(), "Screen measured");
    }

    /// Queue a resize; applied once per frame from `update`
    pub fn push_resize(&mut self, width: u16, height: u16) {
        self.resize_events.push((width, height));
    }

    /// Queue a pointer move; applied once per frame from `update`
    pub fn push_pointer(&mut self, column: u16, row: u16) {
        self.pointer_events.push((column, row));
    }

    /// Pointer left the terminal
    pub fn pointer_left(&mut self) {
        self.pointer_events.clear();
        self.pointer = None;
    }

    /// Advance coalesced input, hover state and both carousels
    pub fn update(&mut self, now: Instant) {
        if let Some((width, height)) = self.resize_events.take_due(now) {
            self.apply_resize(width, height, now);
        }
        if let Some(pointer) = self.pointer_events.take_due(now) {
            self.pointer = Some(pointer);
        }

        let guests_hover = self.is_hovered(Focus::Guests);
        let testimonials_hover = self.is_hovered(Focus::Testimonials);
        self.guests.set_hover(guests_hover);
        self.testimonials.set_hover(testimonials_hover);

        self.guests.update(now);
        self.testimonials.update(now);
    }

    fn is_hovered(&self, section: Focus) -> bool {
        if self.held == Some(section) {
            return true;
        }
        let area = match section {
            Focus::Guests => self.guests_regions.section,
            Focus::Testimonials => self.testimonials_regions.section,
            Focus::Contact => self.screen.contact,
        };
        self.pointer
            .is_some_and(|(x, y)| area.contains(Position { x, y }))
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.guests.is_animating()
            || self.testimonials.is_animating()
            || self.resize_events.has_pending()
            || self.pointer_events.has_pending()
    }

    /// Carousel that keyboard navigation drives, if any
    pub fn focused_carousel(&mut self) -> Option<&mut dyn CarouselBackend> {
        match self.focus {
            Focus::Guests => Some(&mut self.guests),
            Focus::Testimonials => Some(&mut self.testimonials),
            Focus::Contact => None,
        }
    }

    /// Apply an action. Returns a submission when the form should be sent.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> Option<ContactSubmission> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::NextSlide => {
                if let Some(carousel) = self.focused_carousel() {
                    carousel.scroll_next(now);
                }
            }
            Action::PrevSlide => {
                if let Some(carousel) = self.focused_carousel() {
                    carousel.scroll_prev(now);
                }
            }
            Action::FirstPage => {
                if let Some(carousel) = self.focused_carousel() {
                    carousel.scroll_to(0, now);
                }
            }
            Action::LastPage => {
                if let Some(carousel) = self.focused_carousel() {
                    let last = carousel.page_count().saturating_sub(1);
                    carousel.scroll_to(last, now);
                }
            }
            Action::ToggleHold => self.toggle_hold(),
            Action::Edit => {
                if self.focus == Focus::Contact {
                    self.mode = Mode::Editing;
                    self.status_message = None;
                }
            }
            Action::Submit => return self.submit(),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                if let Mode::Alert(_) = self.mode {
                    self.form.dismiss_notice();
                }
                self.mode = Mode::Normal;
            }
            Action::NextField => self.form.focus_next(),
            Action::PrevField => self.form.focus_prev(),
            Action::Confirm => {
                if self.form.focus() == ContactField::Message {
                    self.form.insert_char('\n');
                } else {
                    self.form.focus_next();
                }
            }
            Action::InputChar(c) => self.form.insert_char(c),
            Action::Backspace => self.form.backspace(),
            Action::None => {}
        }
        None
    }

    fn toggle_hold(&mut self) {
        if self.focus == Focus::Contact {
            return;
        }
        if self.held == Some(self.focus) {
            self.held = None;
            self.status_message = Some(format!("{} resumed", self.focus.label()));
        } else {
            self.held = Some(self.focus);
            self.status_message = Some(format!("{} paused", self.focus.label()));
        }
    }

    fn submit(&mut self) -> Option<ContactSubmission> {
        if self.focus != Focus::Contact || self.form.is_submitting() {
            return None;
        }
        match self.form.begin_submit() {
            Some(submission) => {
                info!(email = %submission.email, "Submitting contact form");
                self.status_message = Some("Sending...".to_string());
                Some(submission)
            }
            None => {
                self.mode = Mode::Editing;
                self.status_message = Some(format!("Please fix: {}", self.form.errors()));
                None
            }
        }
    }

    /// Record the outcome of a background submission and show it
    pub fn finish_submission(&mut self, result: SubmissionResult) {
        self.form.finish_submit(result);
        self.status_message = None;
        if let Some(notice) = self.form.notice() {
            self.mode = Mode::Alert(notice);
        }
    }

    /// Mouse click at a terminal cell
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let position = Position { x: column, y: row };

        if self.guests_regions.section.contains(position) {
            self.focus = Focus::Guests;
            self.mode = Mode::Normal;
            click_controls(&mut self.guests, &self.guests_regions, position, now);
        } else if self.testimonials_regions.section.contains(position) {
            self.focus = Focus::Testimonials;
            self.mode = Mode::Normal;
            click_controls(&mut self.testimonials, &self.testimonials_regions, position, now);
        } else if self.screen.contact.contains(position) {
            self.focus = Focus::Contact;
            self.mode = Mode::Editing;
        }
    }
}

fn click_controls(
    carousel: &mut dyn CarouselBackend,
    regions: &CarouselRegions,
    position: Position,
    now: Instant,
) {
    let layout = regions.controls_layout(carousel.page_count());
    if layout.prev.is_some_and(|r| r.contains(position)) {
        carousel.scroll_prev(now);
    } else if layout.next.is_some_and(|r| r.contains(position)) {
        carousel.scroll_next(now);
    } else if let Some(page) = layout.dots.iter().position(|r| r.contains(position)) {
        carousel.scroll_to(page, now);
    }
}
