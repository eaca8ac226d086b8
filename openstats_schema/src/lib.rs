use serde::{Deserialize, Serialize};

pub type Seconds = i64;
pub type Millis = i64;

pub const MILLIS_PER_DAY: Millis = 1000 * 60 * 60 * 24;

/// One open interval of one calendar day: `[openOffsetSeconds, durationSeconds]`,
/// both relative to UTC midnight of that day.
pub type Interval = [Seconds; 2];

/// Raw per-year statistics as delivered by the statistics endpoint.
///
/// `Entries` has one slot per day of the year (index 0 = Jan 1); each slot
/// holds the open intervals recorded for that day, possibly none. The
/// capitalized JSON field names are the wire contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearEntries {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Entries")]
    pub entries: Vec<Vec<Interval>>,
}

/// One chartable data point derived from a day slot (or its absence).
///
/// A day without intervals yields a single all-zero record. A day with K
/// intervals yields K records that differ in `open`/`close` but share the
/// summed day duration. Serialized field names match what the candlestick
/// chart consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatRecord {
    /// UTC midnight of the day, in milliseconds since the epoch.
    #[serde(rename = "date")]
    pub timestamp_ms: Millis,
    #[serde(rename = "open")]
    pub open_hours: f64,
    #[serde(rename = "close")]
    pub close_hours: f64,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    #[serde(rename = "durationInSec")]
    pub duration_secs: Seconds,
}

impl FlatRecord {
    pub fn closed_day(timestamp_ms: Millis) -> Self {
        FlatRecord {
            timestamp_ms,
            open_hours: 0.0,
            close_hours: 0.0,
            duration_hours: 0.0,
            duration_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0 = Monday .. 6 = Sunday.
    pub fn index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub fn from_index(index: usize) -> Weekday {
        Self::ALL[index % 7]
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Which rows of the weekly table a value belongs to: one weekday bucket,
/// or the synthetic average over all seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AverageScope {
    Weekday(Weekday),
    AllDays,
}

impl AverageScope {
    pub fn label(self) -> &'static str {
        match self {
            AverageScope::Weekday(day) => day.name(),
            AverageScope::AllDays => "Average over all days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub scope: AverageScope,
    #[serde(rename = "averageSeconds")]
    pub average_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearStat {
    pub year: i32,
    #[serde(rename = "hoursTotal")]
    pub hours_total: i64,
    #[serde(rename = "hoursPerDay")]
    pub hours_per_day: f64,
}
