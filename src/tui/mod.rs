//! Terminal User Interface for the roster browser.
//!
//! This module provides an interactive table view over a fixed set of
//! records: a live search field that filters rows on every keystroke, and a
//! pagination bar with clickable page links.

mod app;
mod event;
mod input;
mod pager;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use pager::{PagedTable, TableRow, DEFAULT_ROWS_PER_PAGE};
pub use state::{AppState, InputMode};
