use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::parse_hex_color;

pub struct DotIndicatorWidget;

impl DotIndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if !app.indicator_visible() || area.width == 0 {
            // keep the row background consistent when the indicator is off
            let blank = Paragraph::new("").style(Style::default().bg(app.theme.bg0));
            frame.render_widget(blank, area);
            return;
        }

        let config = &app.config.indicator;
        let n = app.state.page_count();
        let current = app.state.index();

        let dot_style = Style::default()
            .fg(config
                .dot_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(app.theme.grey0))
            .bg(app.theme.bg0);
        let current_style = Style::default()
            .fg(config
                .current_dot_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(app.theme.accent))
            .bg(app.theme.bg0);

        let spacing = " ".repeat(config.dot_spacing as usize);
        let mut spans = vec![Span::styled(
            " ".repeat(Self::start_offset(area, n, config.dot_spacing) as usize),
            Style::default().bg(app.theme.bg0),
        )];
        for i in 0..n {
            if i > 0 {
                spans.push(Span::styled(spacing.clone(), Style::default().bg(app.theme.bg0)));
            }
            if i == current {
                spans.push(Span::styled(config.current_dot_size.glyph(), current_style));
            } else {
                spans.push(Span::styled(config.dot_size.glyph(), dot_style));
            }
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }

    /// Map a click inside the indicator row to a page index
    ///
    /// Only a hit on a dot glyph itself selects; clicks on the spacing
    /// between dots return `None`.
    pub fn hit_test(area: Rect, app: &App, column: u16, row: u16) -> Option<usize> {
        if !app.indicator_visible() || row != area.y {
            return None;
        }

        let n = app.state.page_count();
        let spacing = app.config.indicator.dot_spacing;
        let start = area.x + Self::start_offset(area, n, spacing);
        let step = 1 + spacing;

        if column < start {
            return None;
        }
        let rel = column - start;
        if rel % step != 0 {
            return None;
        }
        let index = (rel / step) as usize;
        (index < n).then_some(index)
    }

    /// Leading columns needed to center the dot row; dots are one column
    /// each regardless of glyph size
    fn start_offset(area: Rect, n: usize, spacing: u16) -> u16 {
        let total = n as u16 + (n as u16).saturating_sub(1) * spacing;
        area.width.saturating_sub(total) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedeck_core::{deck, AppConfig, DisplayMode};

    use crate::theme::Theme;

    fn demo_app() -> App {
        App::new(AppConfig::default(), Theme::default(), deck::builtin()).unwrap()
    }

    #[test]
    fn test_hit_test_selects_dots() {
        let app = demo_app();
        let n = app.state.page_count() as u16;
        let area = Rect::new(0, 5, 40, 1);

        // default spacing 1: dots occupy every second column from the start
        let total = n + (n - 1);
        let start = (40 - total) / 2;

        assert_eq!(DotIndicatorWidget::hit_test(area, &app, start, 5), Some(0));
        assert_eq!(
            DotIndicatorWidget::hit_test(area, &app, start + 2, 5),
            Some(1)
        );
        // spacing column between the first two dots
        assert_eq!(DotIndicatorWidget::hit_test(area, &app, start + 1, 5), None);
        // off the row entirely
        assert_eq!(DotIndicatorWidget::hit_test(area, &app, start, 6), None);
        // left of the first dot
        assert_eq!(
            DotIndicatorWidget::hit_test(area, &app, start.saturating_sub(1), 5),
            None
        );
    }

    #[test]
    fn test_hit_test_past_last_dot() {
        let app = demo_app();
        let area = Rect::new(0, 0, 40, 1);
        assert_eq!(DotIndicatorWidget::hit_test(area, &app, 39, 0), None);
    }

    #[test]
    fn test_hit_test_respects_visibility() {
        let mut app = demo_app();
        app.config.indicator.display_mode = DisplayMode::Never;
        let area = Rect::new(0, 0, 40, 1);
        for column in 0..40 {
            assert_eq!(DotIndicatorWidget::hit_test(area, &app, column, 0), None);
        }
    }
}
