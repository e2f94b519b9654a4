//! `keyratchet index` — show which time bucket an instant falls in.

use chrono::{DateTime, Utc};

use crate::cli::output::{self, IndexRow};
use crate::config::Settings;
use crate::errors::{KeyRatchetError, Result};

/// Execute the `index` command.
pub fn execute(at_ms: Option<i64>, at_secs: Option<i64>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let scheme = settings.scheme()?;

    let (at_ms, index) = match (at_ms, at_secs) {
        (Some(ms), _) => (ms, scheme.index_from_milliseconds(ms)?),
        (None, Some(secs)) => {
            let index = scheme.index_from_seconds(secs)?;
            (secs * 1_000, index)
        }
        (None, None) => {
            let ms = Utc::now().timestamp_millis();
            (ms, scheme.index_from_milliseconds(ms)?)
        }
    };

    let start = scheme.bucket_start_millis(index)?;
    let end = start + scheme.tick() - 1;

    output::print_index_table(&IndexRow {
        tick_ms: scheme.tick(),
        at_ms,
        index,
        bucket_start: format_millis(start)?,
        bucket_end: format_millis(end)?,
    });

    Ok(())
}

/// Render a Unix-millisecond timestamp as RFC 3339.
fn format_millis(ms: i64) -> Result<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339())
        .ok_or_else(|| KeyRatchetError::InvalidArgument(format!("timestamp {ms} is out of range")))
}
