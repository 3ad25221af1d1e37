//! Header bar: app name, search field, page indicator.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the one-line header with the live search field.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" rosterview ", Styles::header())];

    match state.input_mode {
        InputMode::Search => {
            spans.push(Span::raw("  search: "));
            spans.push(Span::styled(
                format!("{}_", state.search_input),
                Styles::search_input(),
            ));
        }
        InputMode::Normal => {
            if state.search_input.is_empty() {
                spans.push(Span::styled("  / to search", Styles::dim()));
            } else {
                spans.push(Span::raw("  search: "));
                spans.push(Span::styled(&state.search_input, Styles::search_input()));
            }
        }
    }

    let total_pages = state.table.total_pages();
    let page_indicator = if total_pages == 0 {
        "  page -/-".to_string()
    } else {
        format!("  page {}/{}", state.table.current_page(), total_pages)
    };
    spans.push(Span::styled(page_indicator, Styles::dim()));

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.as_str(), Styles::help_key()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
