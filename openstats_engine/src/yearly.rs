use openstats_schema::{FlatRecord, Millis, Seconds, YearStat};

use crate::calendar::{days_since_new_year, start_of_year_ms, year_of_ms};
use crate::error::StatsError;

/// Year the deployment went live.
pub const START_YEAR: i32 = 2012;

/// The first year only counts from the go-live date (day 54) onwards.
pub const FIRST_YEAR_DAYS: i64 = 365 - 54;

#[derive(Debug, Clone, Copy)]
pub struct YearRange {
    pub start_year: i32,
    pub first_year_days: i64,
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange {
            start_year: START_YEAR,
            first_year_days: FIRST_YEAR_DAYS,
        }
    }
}

/// Total and per-day open hours for every year from the current year down
/// to `range.start_year`.
///
/// A record belongs to year `y` iff its timestamp falls into
/// `[startOfYear(y), startOfYear(y+1))`. The per-day average divides by
/// `range.first_year_days` for the start year, by the days elapsed since
/// Jan 1 for the current year (derived from `now_ms`), and by 365
/// otherwise. Years without records yield zero rows.
pub fn yearly_totals(
    flat: &[FlatRecord],
    range: YearRange,
    now_ms: Millis,
) -> Result<Vec<YearStat>, StatsError> {
    let current_year = year_of_ms(now_ms)?;

    let mut stats = Vec::new();
    for year in (range.start_year..=current_year).rev() {
        let days_to_use = if year == range.start_year {
            range.first_year_days
        } else if year == current_year {
            days_since_new_year(year, now_ms)?
        } else {
            365
        };
        stats.push(year_stat(flat, year, days_to_use)?);
    }

    Ok(stats)
}

fn year_stat(flat: &[FlatRecord], year: i32, days_to_use: i64) -> Result<YearStat, StatsError> {
    let year_begin = start_of_year_ms(year)?;
    let year_end = start_of_year_ms(year + 1)?;

    let mut year_sum: Seconds = 0;
    let mut last_day: Option<Millis> = None;
    for record in flat {
        if record.timestamp_ms < year_begin {
            continue;
        }
        if record.timestamp_ms >= year_end {
            break;
        }
        if last_day == Some(record.timestamp_ms) {
            continue;
        }
        last_day = Some(record.timestamp_ms);
        year_sum += record.duration_secs;
    }

    let hours_total = year_sum as f64 / 3600.0;
    Ok(YearStat {
        year,
        hours_total: hours_total.round() as i64,
        hours_per_day: round2(hours_total / days_to_use as f64),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
