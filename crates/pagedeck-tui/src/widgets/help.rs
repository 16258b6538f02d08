use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key-binding overlay on top of the carousel
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let keymap = &app.config.keymap;

        let rows: Vec<(&str, &str)> = vec![
            (keymap.next_page.as_str(), "next page"),
            (keymap.prev_page.as_str(), "previous page"),
            ("1-9", "jump to page"),
            (keymap.first_page.as_str(), "first page"),
            (keymap.last_page.as_str(), "last page"),
            (keymap.toggle_indicator.as_str(), "toggle indicator"),
            (keymap.help.as_str(), "this overlay"),
            (keymap.quit.as_str(), "quit"),
        ];

        let popup_width = 34u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<7}", key),
                        Style::default()
                            .fg(app.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*action, Style::default().fg(app.theme.fg1)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
