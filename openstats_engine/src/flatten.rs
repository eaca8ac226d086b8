use openstats_schema::{FlatRecord, Seconds, YearEntries, MILLIS_PER_DAY};

use crate::calendar::start_of_year_ms;
use crate::error::StatsError;
use crate::format::to_hours;

/// Flattens raw per-year day slots into the chronological record sequence
/// used by the chart and both aggregations.
///
/// Every day produces at least one record. Days with several open
/// intervals produce one record per interval; all of them carry the summed
/// duration of the whole day, so consumers that walk day by day must
/// deduplicate on the timestamp. Interval contents are passed through
/// unvalidated.
pub fn flatten(raw: &[YearEntries]) -> Result<Vec<FlatRecord>, StatsError> {
    let mut records = Vec::new();

    for year_data in raw {
        let year_start = start_of_year_ms(year_data.year)?;

        for (day_index, day_slots) in year_data.entries.iter().enumerate() {
            let timestamp_ms = year_start + day_index as i64 * MILLIS_PER_DAY;

            if day_slots.is_empty() {
                records.push(FlatRecord::closed_day(timestamp_ms));
                continue;
            }

            let day_total: Seconds = day_slots.iter().map(|slot| slot[1]).sum();

            for slot in day_slots {
                let open = slot[0];
                let close = open + slot[1];
                records.push(FlatRecord {
                    timestamp_ms,
                    open_hours: to_hours(open as f64),
                    close_hours: to_hours(close as f64),
                    duration_hours: to_hours(day_total as f64),
                    duration_secs: day_total,
                });
            }
        }
    }

    Ok(records)
}
