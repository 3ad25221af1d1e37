//! Roster table widget: the current page of the filtered record set.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Clear, Row, Table};
use ratatui::Frame;

use crate::roster::UserRecord;
use crate::tui::pager::TableRow as _;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the records of the current page.
pub fn render_roster_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.clamp_selection();

    let header = Row::new(UserRecord::headers())
        .style(Styles::table_header())
        .height(1);

    let rows: Vec<Row> = state
        .table
        .page_rows()
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let style = if idx == state.selected {
                Styles::selected()
            } else {
                Styles::default()
            };
            Row::new(record.cells()).style(style).height(1)
        })
        .collect();

    let title = if state.table.query().is_empty() {
        format!(" Roster [{}] ", state.table.total_len())
    } else {
        format!(
            " Roster (filter: {}) [{}/{}] ",
            state.table.query(),
            state.table.filtered_len(),
            state.table.total_len()
        )
    };

    let widths: Vec<Constraint> = UserRecord::widths()
        .iter()
        .map(|w| Constraint::Length(*w))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    // Clear the area before rendering to avoid artifacts
    frame.render_widget(Clear, area);
    frame.render_widget(table, area);
}
