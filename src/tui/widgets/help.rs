//! Help popup widget.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::style::Styles;

/// Renders the help popup centered on screen.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 60 / 100).clamp(34, 60);
    let popup_height = 14u16.min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        entry("/", "search (filters on every keystroke)"),
        entry("Enter", "confirm search, Esc cancel and clear"),
        entry("← / h", "previous page"),
        entry("→ / l", "next page"),
        entry("Home/End", "first / last page"),
        entry("1-9", "jump to page"),
        entry("↑↓ / kj", "select row on this page"),
        entry("click", "page link in the bottom bar"),
        entry("?", "toggle this help"),
        entry("q", "quit (with confirmation)"),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}

fn entry(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<9}", keys), Styles::help_key()),
        Span::styled(action.to_string(), Styles::help()),
    ])
}
