use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use openstats_schema::{Millis, Weekday, MILLIS_PER_DAY};

use crate::error::StatsError;

/// UTC midnight of Jan 1 of the given year, in epoch milliseconds.
pub(crate) fn start_of_year_ms(year: i32) -> Result<Millis, StatsError> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| StatsError::new("E3002", format!("year out of range: {year}")))?;
    Ok(jan1.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

pub(crate) fn weekday_of_ms(timestamp_ms: Millis) -> Result<Weekday, StatsError> {
    let date = date_of_ms(timestamp_ms)?;
    Ok(Weekday::from_index(
        date.weekday().num_days_from_monday() as usize
    ))
}

pub(crate) fn year_of_ms(timestamp_ms: Millis) -> Result<i32, StatsError> {
    Ok(date_of_ms(timestamp_ms)?.year())
}

/// Whole days elapsed between Jan 1 of `year` and `now_ms`.
pub(crate) fn days_since_new_year(year: i32, now_ms: Millis) -> Result<i64, StatsError> {
    let begin = start_of_year_ms(year)?;
    Ok((now_ms - begin) / MILLIS_PER_DAY)
}

fn date_of_ms(timestamp_ms: Millis) -> Result<DateTime<Utc>, StatsError> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).ok_or_else(|| {
        StatsError::new("E3002", format!("timestamp out of range: {timestamp_ms}"))
            .with_timestamp_ms(timestamp_ms)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_year_is_utc_midnight() {
        // 2020-01-01T00:00:00Z
        assert_eq!(start_of_year_ms(2020).unwrap(), 1_577_836_800_000);
        assert_eq!(start_of_year_ms(1970).unwrap(), 0);
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2021-01-04 was a Monday.
        let monday = start_of_year_ms(2021).unwrap() + 3 * MILLIS_PER_DAY;
        assert_eq!(weekday_of_ms(monday).unwrap(), Weekday::Monday);
        // 1970-01-01 was a Thursday.
        assert_eq!(weekday_of_ms(0).unwrap(), Weekday::Thursday);
    }

    #[test]
    fn days_since_new_year_floors() {
        let base = start_of_year_ms(2021).unwrap();
        assert_eq!(days_since_new_year(2021, base).unwrap(), 0);
        assert_eq!(
            days_since_new_year(2021, base + MILLIS_PER_DAY + 1).unwrap(),
            1
        );
        assert_eq!(
            days_since_new_year(2021, base + 54 * MILLIS_PER_DAY).unwrap(),
            54
        );
    }
}
