use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use showreel_core::contact::FormNotice;

use crate::input::Action;
use crate::keymap::{describe, Keymap};
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Result of a contact submission
    pub fn render_notice(frame: &mut Frame, notice: FormNotice, theme: &Theme) {
        let area = frame.area();
        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 7u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let (title, color) = if notice.is_error() {
            ("Not sent", theme.error)
        } else {
            ("Sent", theme.success)
        };
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.surface));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [message, _, hint] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        let message_paragraph = Paragraph::new(Span::styled(
            notice.message(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(message_paragraph, message);

        let hint_paragraph = Paragraph::new(Span::styled("press any key", Style::default().fg(theme.muted)))
            .alignment(Alignment::Center);
        frame.render_widget(hint_paragraph, hint);
    }

    /// Key reference built from the active keymap
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let entries: [(Action, &str); 11] = [
            (Action::NextSlide, "Next slide"),
            (Action::PrevSlide, "Previous slide"),
            (Action::FirstPage, "First page"),
            (Action::LastPage, "Last page"),
            (Action::FocusNext, "Next section"),
            (Action::FocusPrev, "Previous section"),
            (Action::ToggleHold, "Pause/resume autoplay"),
            (Action::Edit, "Edit contact form"),
            (Action::Submit, "Send message"),
            (Action::Help, "This help"),
            (Action::Quit, "Quit"),
        ];

        let mut lines: Vec<Line> = entries
            .iter()
            .filter_map(|(action, label)| {
                let binding = keymap.key_for(action)?;
                Some(Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", describe(&binding)),
                        Style::default().fg(theme.brand).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*label, Style::default().fg(theme.text)),
                ]))
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Pointer: hover pauses, click arrows or dots",
            Style::default().fg(theme.muted),
        )));

        let area = frame.area();
        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.brand))
            .style(Style::default().bg(theme.surface));
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
