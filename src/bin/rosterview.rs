//! rosterview - Interactive paged table browser for roster records.
//!
//! Usage:
//!   rosterview                      # browse the built-in demo roster
//!   rosterview users.json           # browse records from a JSON file
//!   rosterview --page-size 12 ...   # override the page size
//!   rosterview --log-file rv.log    # write tracing output to a file

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rosterview::roster::{demo_records, load_records};
use rosterview::tui::{App, DEFAULT_ROWS_PER_PAGE};

/// Interactive paged table browser for roster records.
#[derive(Parser)]
#[command(name = "rosterview", about = "Searchable, paginated roster browser")]
struct Args {
    /// Path to a JSON roster file (array of records).
    /// Uses a built-in demo roster when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Rows shown per page.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ROWS_PER_PAGE)]
    page_size: usize,

    /// Write tracing output to this file (the TUI owns the terminal).
    /// Filtered by RUST_LOG, default level is info.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if args.page_size == 0 {
        eprintln!("Error: --page-size must be at least 1");
        std::process::exit(1);
    }

    // Logging goes to a file so it cannot garble the alternate screen.
    if let Some(ref path) = args.log_file {
        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error creating log file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    let records = match args.file {
        Some(ref path) => match load_records(path) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Error loading roster from '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => demo_records(),
    };

    let app = App::new(records, args.page_size);

    if let Err(e) = app.run(Duration::from_millis(250)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
