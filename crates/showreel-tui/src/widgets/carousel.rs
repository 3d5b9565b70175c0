//! Carousel track, pagination dots and prev/next controls
//!
//! Geometry is computed separately from drawing so the app can hit-test the
//! same rectangles the widget paints.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use showreel_core::carousel::{pagination, CarouselBackend, CarouselEngine, SlideSpan};
use showreel_core::config::ControlsPlacement;

use crate::theme::Theme;

const ARROW_WIDTH: u16 = 3;

/// Screen regions of one carousel section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselRegions {
    pub section: Rect,
    pub track: Rect,
    pub controls: Rect,
    /// Side arrows, only for inline-sides placement
    pub side_prev: Option<Rect>,
    pub side_next: Option<Rect>,
    pub placement: ControlsPlacement,
}

/// Hit targets in the controls area for a given page count
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlsLayout {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    /// One cell per page; empty when the dots do not fit
    pub dots: Vec<Rect>,
}

impl CarouselRegions {
    pub fn new(section: Rect, placement: ControlsPlacement) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(section);
        let [body, controls] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        match placement {
            ControlsPlacement::InlineSides => {
                let [prev, track, next] = Layout::horizontal([
                    Constraint::Length(ARROW_WIDTH),
                    Constraint::Min(1),
                    Constraint::Length(ARROW_WIDTH),
                ])
                .areas(body);
                Self {
                    section,
                    track,
                    controls,
                    side_prev: Some(middle_row(prev)),
                    side_next: Some(middle_row(next)),
                    placement,
                }
            }
            ControlsPlacement::BelowCenter => Self {
                section,
                track: body,
                controls,
                side_prev: None,
                side_next: None,
                placement,
            },
        }
    }

    pub fn controls_layout(&self, pages: usize) -> ControlsLayout {
        let pages = pages.max(1);
        let row = self.controls;
        let available = row.width as usize;
        let dots_width = pages.saturating_mul(2) - 1;

        match self.placement {
            ControlsPlacement::InlineSides => {
                let dots = if dots_width <= available {
                    let offset = ((available - dots_width) / 2) as u16;
                    dot_cells(row.x.saturating_add(offset), row.y, pages)
                } else {
                    Vec::new()
                };
                ControlsLayout {
                    prev: self.side_prev,
                    next: self.side_next,
                    dots,
                }
            }
            ControlsPlacement::BelowCenter => {
                // " ‹ " gap dots gap " › "
                let arrow = ARROW_WIDTH as usize;
                let full = dots_width.saturating_add(2 * arrow + 2);
                let arrows_only = 2 * arrow + 1;
                if full <= available {
                    let x = row.x.saturating_add(((available - full) / 2) as u16);
                    let next_x = x.saturating_add((arrow + 2 + dots_width) as u16);
                    ControlsLayout {
                        prev: Some(Rect::new(x, row.y, ARROW_WIDTH, 1)),
                        dots: dot_cells(x.saturating_add(ARROW_WIDTH + 1), row.y, pages),
                        next: Some(Rect::new(next_x, row.y, ARROW_WIDTH, 1)),
                    }
                } else if arrows_only <= available {
                    let x = row.x.saturating_add(((available - arrows_only) / 2) as u16);
                    ControlsLayout {
                        prev: Some(Rect::new(x, row.y, ARROW_WIDTH, 1)),
                        dots: Vec::new(),
                        next: Some(Rect::new(x.saturating_add(ARROW_WIDTH + 1), row.y, ARROW_WIDTH, 1)),
                    }
                } else {
                    ControlsLayout::default()
                }
            }
        }
    }
}

fn middle_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1))
}

// Callers only ask for as many dots as fit in the row
fn dot_cells(x: u16, y: u16, pages: usize) -> Vec<Rect> {
    (0..pages)
        .map(|i| Rect::new(x.saturating_add((2 * i) as u16), y, 1, 1))
        .collect()
}

/// Map a slide's layout-unit span onto terminal columns inside `track`,
/// clipped to the track. `None` when nothing of it is on screen.
pub fn span_columns(span: &SlideSpan, track: Rect, cell_width: f64) -> Option<Rect> {
    if cell_width <= 0.0 || !cell_width.is_finite() {
        return None;
    }
    let left = (span.x / cell_width).round();
    let right = ((span.x + span.width) / cell_width).round();
    let left = left.clamp(0.0, track.width as f64) as u16;
    let right = right.clamp(0.0, track.width as f64) as u16;
    if right <= left || track.height == 0 {
        return None;
    }
    Some(Rect::new(track.x + left, track.y, right - left, track.height))
}

pub struct CarouselWidget;

impl CarouselWidget {
    /// Draw the section frame, the visible slides and the controls
    #[allow(clippy::too_many_arguments)]
    pub fn render<T, F>(
        frame: &mut Frame,
        regions: &CarouselRegions,
        engine: &CarouselEngine<T>,
        title: &str,
        focused: bool,
        cell_width: f64,
        theme: &Theme,
        mut draw_card: F,
    ) where
        F: FnMut(&mut Frame, Rect, &T),
    {
        let border_color = if focused { theme.brand } else { theme.border };
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg));
        frame.render_widget(block, regions.section);

        if engine.items().is_empty() {
            let empty = Paragraph::new("Nothing to show yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted));
            frame.render_widget(empty, regions.track);
        } else {
            for span in engine.visible_slides() {
                let Some(area) = span_columns(&span, regions.track, cell_width) else {
                    continue;
                };
                if let Some(item) = engine.items().get(span.item) {
                    draw_card(frame, area, item);
                }
            }
        }

        Self::render_controls(frame, regions, engine, engine.controls_enabled(), engine.is_hovering(), theme);
    }

    /// Arrows and pagination, drawn only through the capability interface
    pub fn render_controls(
        frame: &mut Frame,
        regions: &CarouselRegions,
        backend: &dyn CarouselBackend,
        enabled: bool,
        paused: bool,
        theme: &Theme,
    ) {
        let pages = backend.page_count();
        let layout = regions.controls_layout(pages);

        let arrow_style = if enabled {
            Style::default().fg(theme.text).bg(theme.surface_alt).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled).bg(theme.surface)
        };

        if let Some(prev) = layout.prev {
            frame.render_widget(Paragraph::new(Span::styled(" ‹ ", arrow_style)), prev);
        }
        if let Some(next) = layout.next {
            frame.render_widget(Paragraph::new(Span::styled(" › ", arrow_style)), next);
        }

        if layout.dots.is_empty() {
            let label = format!("{}/{}", backend.current_index() + 1, pages.max(1));
            let counter = Paragraph::new(Span::styled(label, Style::default().fg(theme.muted)))
                .alignment(Alignment::Center);
            frame.render_widget(counter, counter_area(regions.controls, &layout));
        } else {
            for (dot, cell) in pagination(backend).iter().zip(layout.dots.iter()) {
                let style = if dot.active {
                    Style::default().fg(theme.brand)
                } else {
                    Style::default().fg(theme.disabled)
                };
                let glyph = if dot.active { "●" } else { "○" };
                frame.render_widget(Paragraph::new(Span::styled(glyph, style)), *cell);
            }
        }

        if paused && enabled {
            let hint = Line::from(Span::styled("paused", Style::default().fg(theme.muted)))
                .alignment(Alignment::Right);
            frame.render_widget(Paragraph::new(hint), regions.controls);
        }
    }
}

/// Space between the arrows, or the whole row without them
fn counter_area(row: Rect, layout: &ControlsLayout) -> Rect {
    match (layout.prev, layout.next) {
        (Some(prev), Some(next)) if prev.y == row.y && next.x > prev.right() => {
            Rect::new(prev.right(), row.y, next.x - prev.right(), 1)
        }
        _ => row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(x: f64, width: f64) -> SlideSpan {
        SlideSpan {
            item: 0,
            position: 0,
            x,
            width,
        }
    }

    #[test]
    fn test_span_columns_maps_and_clips() {
        let track = Rect::new(2, 5, 80, 6);
        assert_eq!(span_columns(&span(0.0, 160.0), track, 8.0), Some(Rect::new(2, 5, 20, 6)));
        // Partly scrolled out to the left
        assert_eq!(span_columns(&span(-80.0, 160.0), track, 8.0), Some(Rect::new(2, 5, 10, 6)));
        // Off the right edge
        assert_eq!(span_columns(&span(640.0, 160.0), track, 8.0), None);
        assert_eq!(span_columns(&span(0.0, 160.0), track, 0.0), None);
    }

    #[test]
    fn test_regions_below_center() {
        let regions = CarouselRegions::new(Rect::new(0, 0, 40, 10), ControlsPlacement::BelowCenter);
        assert_eq!(regions.track, Rect::new(1, 1, 38, 7));
        assert_eq!(regions.controls, Rect::new(1, 8, 38, 1));

        let layout = regions.controls_layout(4);
        // 3 + 1 + 7 + 1 + 3 = 15 wide, centered in 38
        assert_eq!(layout.prev, Some(Rect::new(12, 8, 3, 1)));
        assert_eq!(layout.dots.len(), 4);
        assert_eq!(layout.dots[0], Rect::new(16, 8, 1, 1));
        assert_eq!(layout.dots[3], Rect::new(22, 8, 1, 1));
        assert_eq!(layout.next, Some(Rect::new(24, 8, 3, 1)));
    }

    #[test]
    fn test_regions_inline_sides() {
        let regions = CarouselRegions::new(Rect::new(0, 0, 40, 10), ControlsPlacement::InlineSides);
        assert_eq!(regions.track, Rect::new(4, 1, 32, 7));
        assert_eq!(regions.side_prev, Some(Rect::new(1, 4, 3, 1)));
        assert_eq!(regions.side_next, Some(Rect::new(36, 4, 3, 1)));

        let layout = regions.controls_layout(3);
        assert_eq!(layout.prev, regions.side_prev);
        assert_eq!(layout.dots.len(), 3);
    }

    #[test]
    fn test_dots_dropped_when_too_narrow() {
        let regions = CarouselRegions::new(Rect::new(0, 0, 14, 6), ControlsPlacement::BelowCenter);
        let layout = regions.controls_layout(20);
        assert!(layout.dots.is_empty());
        assert!(layout.prev.is_some());
        assert!(layout.next.is_some());
    }

    #[test]
    fn test_huge_page_counts_drop_dots() {
        let below = CarouselRegions::new(Rect::new(0, 0, 40, 10), ControlsPlacement::BelowCenter);
        for pages in [32_769, 65_536, usize::MAX] {
            let layout = below.controls_layout(pages);
            assert!(layout.dots.is_empty());
            assert_eq!(layout.prev, Some(Rect::new(16, 8, 3, 1)));
            assert_eq!(layout.next, Some(Rect::new(20, 8, 3, 1)));
        }

        let inline = CarouselRegions::new(Rect::new(0, 0, 40, 10), ControlsPlacement::InlineSides);
        let layout = inline.controls_layout(32_769);
        assert!(layout.dots.is_empty());
        assert!(layout.prev.is_some());
    }
}
