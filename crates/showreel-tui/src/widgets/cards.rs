use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use showreel_core::{GuestSlide, Testimonial};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

pub struct GuestCardWidget;

impl GuestCardWidget {
    /// Photo placeholder with the caption under it
    pub fn render(frame: &mut Frame, area: Rect, slide: &GuestSlide, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [photo, caption, source] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let shade: Vec<Line> = (0..photo.height)
            .map(|_| Line::from(Span::styled("░".repeat(photo.width as usize), Style::default().fg(theme.surface_alt))))
            .collect();
        frame.render_widget(Paragraph::new(shade), photo);

        let caption_line = Line::from(Span::styled(
            truncate_to_width(slide.caption(), caption.width as usize),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(caption_line), caption);

        let source_line = Line::from(Span::styled(
            truncate_to_width(&slide.src, source.width as usize),
            Style::default().fg(theme.muted),
        ));
        frame.render_widget(Paragraph::new(source_line), source);
    }
}

pub struct TestimonialCardWidget;

impl TestimonialCardWidget {
    /// Quote with the author's initials, name and location
    pub fn render(frame: &mut Frame, area: Rect, testimonial: &Testimonial, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [quote, author] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

        let quote_text = Paragraph::new(Span::styled(
            format!("“{}”", testimonial.quote),
            Style::default().fg(theme.text).add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(quote_text, quote);

        let avatar = format!(" {} ", testimonial.initials());
        let width = author.width as usize;
        let name_width = width.saturating_sub(avatar.width() + 1);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    avatar.clone(),
                    Style::default().fg(theme.bg).bg(theme.brand).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&testimonial.name, name_width),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(" ".repeat(avatar.width() + 1)),
                Span::styled(
                    truncate_to_width(&testimonial.location, name_width),
                    Style::default().fg(theme.muted),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), author);
    }
}

/// Cut a string to fit `max_width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Pool", 10), "Pool");
        assert_eq!(truncate_to_width("Guest relaxing", 6), "Guest…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide characters count double
        assert_eq!(truncate_to_width("日本語です", 5), "日本…");
    }
}
