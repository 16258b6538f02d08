use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use pagedeck_core::Page;

use crate::app::App;
use crate::transition::{timing::lerp_u16, SlideFrame};

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let state = &app.state;

        let title = match (&state.current().title, app.config.ui.show_title) {
            (Some(title), true) => format!(" {} ", title),
            _ => format!(" Page {}/{} ", state.index() + 1, state.page_count()),
        };

        let mut block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));

        // Edge affordances disappear at the boundaries
        if !state.is_first_page() {
            block = block.title_bottom(Line::from(" ‹ prev ").left_aligned());
        }
        if !state.is_last_page() {
            block = block.title_bottom(Line::from(" next › ").right_aligned());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match app.slide {
            Some(slide) => Self::render_slide(frame, inner, app, slide),
            None => {
                let paragraph = Paragraph::new(Self::page_lines(state.current()))
                    .style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0))
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, inner);
            }
        }
    }

    /// Render the outgoing and incoming page side by side while a slide is
    /// in flight
    ///
    /// Horizontal scrolling and wrapping do not combine, so slides render
    /// unwrapped; the resting frame goes back to wrapped text.
    fn render_slide(frame: &mut Frame, area: Rect, app: &App, slide: SlideFrame) {
        let (Some(outgoing), Some(incoming)) =
            (app.state.get(slide.from), app.state.get(slide.to))
        else {
            return;
        };

        let width = area.width;
        let offset = lerp_u16(0, width, slide.progress);
        let style = Style::default().fg(app.theme.fg0).bg(app.theme.bg0);

        if offset == 0 {
            let paragraph = Paragraph::new(Self::page_lines(outgoing)).style(style);
            frame.render_widget(paragraph, area);
            return;
        }
        if offset >= width {
            let paragraph = Paragraph::new(Self::page_lines(incoming)).style(style);
            frame.render_widget(paragraph, area);
            return;
        }

        if slide.to > slide.from {
            // Forward: both pages move left; the incoming page enters from
            // the right edge.
            let out_area = Rect::new(area.x, area.y, width - offset, area.height);
            let paragraph = Paragraph::new(Self::page_lines(outgoing))
                .style(style)
                .scroll((0, offset));
            frame.render_widget(paragraph, out_area);

            let in_area = Rect::new(area.x + width - offset, area.y, offset, area.height);
            let paragraph = Paragraph::new(Self::page_lines(incoming)).style(style);
            frame.render_widget(paragraph, in_area);
        } else {
            // Backward: both pages move right; the incoming page enters from
            // the left edge.
            let out_area = Rect::new(area.x + offset, area.y, width - offset, area.height);
            let paragraph = Paragraph::new(Self::page_lines(outgoing)).style(style);
            frame.render_widget(paragraph, out_area);

            let in_area = Rect::new(area.x, area.y, offset, area.height);
            let paragraph = Paragraph::new(Self::page_lines(incoming))
                .style(style)
                .scroll((0, width - offset));
            frame.render_widget(paragraph, in_area);
        }
    }

    fn page_lines(page: &Page) -> Vec<Line<'_>> {
        page.body.lines().map(Line::from).collect()
    }
}
