use crate::model::{OpenValue, SpaceDevices, Timestamp};

/// Visual severity of a panel cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Success,
    Warning,
    Danger,
}

impl Style {
    pub fn class_name(self) -> &'static str {
        match self {
            Style::Plain => "",
            Style::Success => "success",
            Style::Warning => "warning",
            Style::Danger => "danger",
        }
    }
}

/// Status label and severity for an area's opening state.
pub fn open_status(value: OpenValue) -> (&'static str, Style) {
    match value {
        OpenValue::None => ("CLOSED!", Style::Danger),
        OpenValue::Open => ("OPEN!", Style::Success),
        OpenValue::OpenPlus => ("OPEN+!", Style::Success),
        OpenValue::Keyholder => ("CLOSED (keyholder only!)", Style::Danger),
        OpenValue::Member => ("CLOSED (member only!)", Style::Danger),
        OpenValue::Closing => ("CLOSING SOON!", Style::Warning),
    }
}

/// People seen on the network but not listed by name.
pub fn anonymous_people(devices: &SpaceDevices) -> u32 {
    devices
        .people_count
        .saturating_sub(devices.people.len() as u32)
}

/// Compact age rendering, e.g. "1d2h3m4s". Units are truncated, larger
/// units are omitted while zero.
pub fn elapsed_time(now: Timestamp, then: Timestamp) -> String {
    let mut result = String::new();
    let mut diff = (now - then).max(0);

    if diff / 86_400 >= 1 {
        result.push_str(&format!("{}d", diff / 86_400));
    }
    diff %= 86_400;
    if diff / 3600 >= 1 {
        result.push_str(&format!("{}h", diff / 3600));
    }
    diff %= 3600;
    if diff / 60 >= 1 {
        result.push_str(&format!("{}m", diff / 60));
    }
    diff %= 60;
    result.push_str(&format!("{}s", diff));

    result
}
