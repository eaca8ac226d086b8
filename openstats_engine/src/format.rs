use std::fmt;

/// Seconds to hours, rounded half-up to two decimals for display parity
/// with the chart values.
pub fn to_hours(secs: f64) -> f64 {
    (secs / 3600.0 * 100.0).round() / 100.0
}

/// An hour value split into whole hours and base-60 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourMin {
    pub hours: i64,
    pub minutes: i64,
}

/// Splits a fractional hour into hours and minutes.
///
/// The minute conversion truncates, it does not round: the fractional part
/// is taken as two decimal digits and scaled by 60/100. 1.5 h is
/// 01 hours, 30 minutes; 0.99 h is 00 hours, 59 minutes.
pub fn base60(hour: f64) -> HourMin {
    let hours = hour.trunc() as i64;
    let minute_part = (hour * 100.0) % 100.0;
    let minutes = (minute_part * 60.0 / 100.0).trunc() as i64;
    HourMin { hours, minutes }
}

impl HourMin {
    pub fn as_duration(&self) -> String {
        format!("{:02} hours, {:02} minutes", self.hours, self.minutes)
    }
}

impl fmt::Display for HourMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_duration())
    }
}

/// Duration in seconds rendered as zero-padded "HH hours, MM minutes".
pub fn format_duration_secs(secs: f64) -> String {
    base60(to_hours(secs)).as_duration()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hours_rounds_half_up_to_two_decimals() {
        assert_eq!(to_hours(5400.0), 1.5);
        assert_eq!(to_hours(0.0), 0.0);
        // 30 s = 0.008333.. h, half-up to 0.01
        assert_eq!(to_hours(30.0), 0.01);
    }

    #[test]
    fn base60_truncates_minutes() {
        assert_eq!(base60(1.5), HourMin { hours: 1, minutes: 30 });
        assert_eq!(base60(0.99), HourMin { hours: 0, minutes: 59 });
        assert_eq!(base60(2.0), HourMin { hours: 2, minutes: 0 });
    }

    #[test]
    fn duration_rendering_is_zero_padded() {
        assert_eq!(base60(1.5).as_duration(), "01 hours, 30 minutes");
        assert_eq!(format_duration_secs(3600.0), "01 hours, 00 minutes");
        assert_eq!(format_duration_secs(0.0), "00 hours, 00 minutes");
    }
}
