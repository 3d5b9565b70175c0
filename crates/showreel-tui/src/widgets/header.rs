use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(
                " SHOWREEL ",
                Style::default().fg(theme.bg).bg(theme.brand).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  For our valued guests", Style::default().fg(theme.brand_soft)),
        ]);
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg)), area);
    }
}
