//! TUI widgets for rosterview.

mod header;
mod help;
mod pagination;
mod quit_confirm;
mod roster_table;

pub use header::render_header;
pub use help::render_help;
pub use pagination::render_pagination;
pub use quit_confirm::render_quit_confirm;
pub use roster_table::render_roster_table;
