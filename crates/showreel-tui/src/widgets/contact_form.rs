use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use showreel_core::contact::ContactField;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus, Mode};
use crate::input::Action;
use crate::keymap::{describe, Keymap};

const LABEL_WIDTH: usize = 9;
const MESSAGE_ROWS: u16 = 3;

pub struct ContactFormWidget;

impl ContactFormWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, keymap: &Keymap) {
        let theme = &app.theme;
        let focused = app.focus == Focus::Contact;
        let editing = focused && app.mode == Mode::Editing;
        let form = &app.form;

        let border_color = if focused { theme.brand } else { theme.border };
        let title = if form.is_submitting() {
            " Contact us (sending...) "
        } else {
            " Contact us "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name, email, phone, message_label, message, message_error, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(MESSAGE_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        for (field, row) in [
            (ContactField::Name, name),
            (ContactField::Email, email),
            (ContactField::Phone, phone),
        ] {
            let active = editing && form.focus() == field;
            let mut spans = vec![label_span(field, active, app)];
            let error = form.errors().get(field);
            let error_width = error.map(|e| e.width() + 2).unwrap_or(0);
            let value_width = (row.width as usize).saturating_sub(LABEL_WIDTH + error_width);
            spans.push(Span::styled(
                tail_to_width(&with_cursor(form.value(field), active), value_width),
                Style::default().fg(theme.text),
            ));
            if let Some(error) = error {
                spans.push(Span::styled(format!("  {}", error), Style::default().fg(theme.error)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), row);
        }

        let active = editing && form.focus() == ContactField::Message;
        frame.render_widget(
            Paragraph::new(Line::from(label_span(ContactField::Message, active, app))),
            message_label,
        );

        // Keep the end of the message in view
        let text = with_cursor(form.value(ContactField::Message), active);
        let width = message.width as usize;
        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|line| Line::from(Span::styled(tail_to_width(line, width), Style::default().fg(theme.text))))
            .collect();
        let skip = lines.len().saturating_sub(MESSAGE_ROWS as usize);
        lines.drain(..skip);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.surface)),
            message,
        );

        if let Some(error) = form.errors().get(ContactField::Message) {
            frame.render_widget(
                Paragraph::new(Span::styled(error.to_string(), Style::default().fg(theme.error))),
                message_error,
            );
        }

        let hint_text = form_hint(keymap, editing, focused);
        frame.render_widget(
            Paragraph::new(Span::styled(hint_text, Style::default().fg(theme.muted))),
            hint,
        );
    }
}

/// Key hint under the form. Tab, Enter and Esc are fixed while typing.
pub fn form_hint(keymap: &Keymap, editing: bool, focused: bool) -> String {
    let key = |action: Action, label: &str| {
        keymap
            .key_for(&action)
            .map(|binding| format!("{}: {}", describe(&binding), label))
    };

    let parts: Vec<String> = if editing {
        vec![
            Some("Tab: next field".to_string()),
            Some("Enter: newline in message".to_string()),
            key(Action::Submit, "send"),
            Some("Esc: done".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    } else if focused {
        [key(Action::Edit, "edit"), key(Action::Submit, "send")]
            .into_iter()
            .flatten()
            .collect()
    } else {
        Vec::new()
    };
    parts.join("  ")
}

fn label_span(field: ContactField, active: bool, app: &App) -> Span<'static> {
    let required = if field == ContactField::Phone { "" } else { "*" };
    let label = format!("{:<width$}", format!("{}{}", field.label(), required), width = LABEL_WIDTH);
    let style = if active {
        Style::default().fg(app.theme.brand).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted)
    };
    Span::styled(label, style)
}

fn with_cursor(value: &str, active: bool) -> String {
    if active {
        format!("{}▏", value)
    } else {
        value.to_string()
    }
}

/// Keep the rightmost part of `s` that fits in `max_width` columns
pub fn tail_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = i;
    }
    s[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::config::KeymapConfig;

    #[test]
    fn test_tail_to_width() {
        assert_eq!(tail_to_width("hello", 10), "hello");
        assert_eq!(tail_to_width("hello world", 5), "world");
        assert_eq!(tail_to_width("abc", 0), "");
        assert_eq!(tail_to_width("日本語", 4), "本語");
    }

    #[test]
    fn test_form_hint_follows_keymap() {
        let keymap = Keymap::default();
        assert_eq!(form_hint(&keymap, false, true), "Enter: edit  C-s: send");
        assert_eq!(
            form_hint(&keymap, true, true),
            "Tab: next field  Enter: newline in message  C-s: send  Esc: done"
        );
        assert_eq!(form_hint(&keymap, false, false), "");

        let rebound = Keymap::from_config(&KeymapConfig {
            submit: "<C-d>".to_string(),
            edit: "i".to_string(),
            ..KeymapConfig::default()
        });
        assert_eq!(form_hint(&rebound, false, true), "i: edit  C-d: send");
        assert!(form_hint(&rebound, true, true).contains("C-d: send"));
        assert!(!form_hint(&rebound, true, true).contains("C-s"));
    }
}
