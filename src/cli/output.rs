//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Status lines go to stderr;
//! stdout carries only the command's result (keys, JSON records) so it
//! can be piped.

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a command result to stdout, unstyled.
pub fn value(msg: &str) {
    println!("{msg}");
}

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One row of the `index` table.
pub struct IndexRow {
    pub tick_ms: i64,
    pub at_ms: i64,
    pub index: i64,
    pub bucket_start: String,
    pub bucket_end: String,
}

/// Print the time-index breakdown (Tick, Instant, Index, Bucket).
pub fn print_index_table(row: &IndexRow) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tick (ms)", "Instant (ms)", "Index", "Bucket start", "Bucket end"]);
    table.add_row(vec![
        row.tick_ms.to_string(),
        row.at_ms.to_string(),
        row.index.to_string(),
        row.bucket_start.clone(),
        row.bucket_end.clone(),
    ]);

    println!("{table}");
}
