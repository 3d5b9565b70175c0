use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use showreel_core::carousel::CarouselBackend;

use crate::app::{App, Focus, Mode};
use crate::input::Action;
use crate::keymap::{describe, Keymap};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, keymap: &Keymap) {
        let theme = &app.theme;
        let mode_str = match &app.mode {
            Mode::Normal => "NORMAL",
            Mode::Editing => "EDIT",
            Mode::Help => "HELP",
            Mode::Alert(_) => "NOTICE",
        };

        let position = match app.focus {
            Focus::Guests => page_label(&app.guests, app.held == Some(Focus::Guests)),
            Focus::Testimonials => page_label(&app.testimonials, app.held == Some(Focus::Testimonials)),
            Focus::Contact => String::new(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {}{} | {}",
                mode_str,
                app.focus.label(),
                position,
                app.guests.viewport_class().as_str()
            )
        };

        let hint = |action: &Action, label: &str| {
            keymap
                .key_for(action)
                .map(|binding| format!("{}:{} ", describe(&binding), label))
                .unwrap_or_default()
        };
        let help_hint = format!(
            " {}{}{}{}",
            hint(&Action::Quit, "quit"),
            hint(&Action::FocusNext, "section"),
            hint(&Action::NextSlide, "next"),
            hint(&Action::Help, "help"),
        );

        let padding_len = (area.width as usize).saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let mode_style = Style::default().fg(theme.text).bg(theme.surface_alt);
        let line = Line::from(vec![
            Span::styled(status_text, mode_style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.surface_alt)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.surface_alt)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn page_label(carousel: &dyn CarouselBackend, held: bool) -> String {
    let pause = if held { " (held)" } else { "" };
    format!(
        " {}/{}{}",
        carousel.current_index() + 1,
        carousel.page_count().max(1),
        pause
    )
}
