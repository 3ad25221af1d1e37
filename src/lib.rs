//! rosterview - paged, searchable roster browser library.
//!
//! This library provides the pieces behind the `rosterview` binary:
//! - `roster` - record model and roster file loading
//! - `tui` - interactive terminal table with live filtering and pagination

pub mod roster;
pub mod tui;
