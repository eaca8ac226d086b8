use openstats_schema::{AverageScope, FlatRecord, Millis, Weekday, WeekdayAverage};

use crate::calendar::weekday_of_ms;
use crate::error::StatsError;

/// Per-weekday average open duration over the trailing `weeks` weeks.
///
/// The most recent distinct calendar day in `flat` is treated as "today"
/// and excluded; the walk starts at the day before it and moves backwards
/// until `weeks * 7` distinct days were consumed or the input ran out.
/// Running out early is not an error: the buckets are divided by `weeks`
/// either way, matching a window that simply has no older data.
///
/// Returns the seven weekday rows Monday..Sunday followed by the synthetic
/// average over all days. Pure; calling it again with the same input
/// yields the identical result.
pub fn weekly_average(flat: &[FlatRecord], weeks: u32) -> Result<Vec<WeekdayAverage>, StatsError> {
    if weeks < 1 {
        return Err(StatsError::new("E1001", "weeks must be >= 1"));
    }

    let mut buckets = [0i64; 7];

    if let Some(start) = start_position(flat) {
        walk_backwards(flat, start, weeks, &mut buckets)?;
    }

    let mut rows = Vec::with_capacity(8);
    let mut total_sum = 0.0;
    for (index, bucket) in buckets.iter().enumerate() {
        let average = *bucket as f64 / weeks as f64;
        total_sum += average;
        rows.push(WeekdayAverage {
            scope: AverageScope::Weekday(Weekday::from_index(index)),
            average_secs: average,
        });
    }
    rows.push(WeekdayAverage {
        scope: AverageScope::AllDays,
        average_secs: total_sum / 7.0,
    });

    Ok(rows)
}

/// Index of the last record of the day preceding the most recent distinct
/// day, scanning from the end. None if the input holds less than two
/// distinct days.
fn start_position(flat: &[FlatRecord]) -> Option<usize> {
    let mut days_to_skip = 1u32;
    let mut current_day: Option<Millis> = None;

    for i in (0..flat.len()).rev() {
        if current_day != Some(flat[i].timestamp_ms) {
            current_day = Some(flat[i].timestamp_ms);
            if days_to_skip == 0 {
                return Some(i);
            }
            days_to_skip -= 1;
        }
    }
    None
}

fn walk_backwards(
    flat: &[FlatRecord],
    start: usize,
    weeks: u32,
    buckets: &mut [i64; 7],
) -> Result<(), StatsError> {
    let mut pointer = weekday_of_ms(flat[start].timestamp_ms)?.index();
    let mut last_day: Option<Millis> = None;
    let mut days_consumed = 0u32;

    for i in (0..=start).rev() {
        if days_consumed >= weeks * 7 {
            break;
        }

        let record = &flat[i];
        // Several intervals of one day share a timestamp and count once.
        if last_day == Some(record.timestamp_ms) {
            continue;
        }
        last_day = Some(record.timestamp_ms);

        let expected = Weekday::from_index(pointer);
        let actual = weekday_of_ms(record.timestamp_ms)?;
        if actual != expected {
            return Err(StatsError::new(
                "E3001",
                format!(
                    "calendar misalignment: expected {}, found {} (record {i}, timestamp_ms={})",
                    expected.name(),
                    actual.name(),
                    record.timestamp_ms
                ),
            )
            .with_record_index(i)
            .with_timestamp_ms(record.timestamp_ms)
            .with_weekdays(expected, actual));
        }

        buckets[pointer] += record.duration_secs;
        pointer = (pointer + 6) % 7;
        days_consumed += 1;
    }

    Ok(())
}
