mod calendar;
mod error;
mod flatten;
mod format;
mod weekly;
mod yearly;

use std::{fs, path::Path};

use openstats_schema::YearEntries;

pub use error::{StatsError, StatsErrorKind};
pub use flatten::flatten;
pub use format::{base60, format_duration_secs, to_hours, HourMin};
pub use weekly::weekly_average;
pub use yearly::{yearly_totals, YearRange, FIRST_YEAR_DAYS, START_YEAR};

/// Parses the raw statistics JSON as served by the statistics endpoint:
/// an array of `{ Year, Entries }` objects.
pub fn load_stats_from_str(json: &str) -> Result<Vec<YearEntries>, StatsError> {
    serde_json::from_str(json)
        .map_err(|e| StatsError::new("E2002", format!("invalid stats json: {e}")))
}

pub fn load_stats_from_path(path: impl AsRef<Path>) -> Result<Vec<YearEntries>, StatsError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        StatsError::new("E2001", format!("failed to read stats file: {e}"))
            .with_file(path.display().to_string())
    })?;
    load_stats_from_str(&json).map_err(|e| e.with_file(path.display().to_string()))
}
