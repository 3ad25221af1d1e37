//! Main rendering logic for the TUI.

use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::state::AppState;
use super::style::Styles;
use super::widgets::{
    render_header, render_help, render_pagination, render_quit_confirm, render_roster_table,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, table, pagination bar, help line
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header with search field
        Constraint::Min(4),    // Table
        Constraint::Length(1), // Pagination links
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_roster_table(frame, chunks[1], state);
    render_pagination(frame, chunks[2], state);
    render_hints(frame, chunks[3]);

    // Popups overlay everything
    if state.show_help {
        render_help(frame, area);
    }
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}

fn render_hints(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(" /", Styles::help_key()),
        Span::styled(" search ", Styles::help()),
        Span::styled("←→", Styles::help_key()),
        Span::styled(" page ", Styles::help()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" help ", Styles::help()),
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit", Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
