use openstats_engine::format_duration_secs;
use openstats_schema::{WeekdayAverage, YearStat};
use status_panel::model::StatusState;
use status_panel::panel::{anonymous_people, elapsed_time, open_status};

/// Weekly table: one row per weekday plus the overall average, durations
/// rendered as "HH hours, MM minutes".
pub fn weekly_table(rows: &[WeekdayAverage]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{:<21} | {}\n",
            row.scope.label(),
            format_duration_secs(row.average_secs)
        ));
    }
    out
}

/// Yearly table: year, rounded total hours, per-day hours with two
/// decimals, most recent year first.
pub fn yearly_table(stats: &[YearStat]) -> String {
    let mut out = String::from("Year | Hours | Hours/day\n");
    for stat in stats {
        out.push_str(&format!(
            "{} | {:5} | {:.2}\n",
            stat.year, stat.hours_total, stat.hours_per_day
        ));
    }
    out
}

/// Status panel after an event replay.
pub fn status_panel(state: &StatusState, now: i64) -> String {
    let mut out = String::new();

    let broker = if state.mqtt.space_broker_online {
        "online"
    } else {
        "OFFLINE!"
    };
    out.push_str(&format!("Space broker: {broker}\n"));

    let areas = [
        ("Space", &state.space, state.keyholder.as_str()),
        ("Radstelle", &state.radstelle, ""),
        ("3D Lab", &state.lab3d, ""),
        ("Machining", &state.machining, state.keyholder_machining.as_str()),
        (
            "Woodworking",
            &state.woodworking,
            state.keyholder_woodworking.as_str(),
        ),
    ];
    for (name, area, keyholder) in areas {
        let (label, _style) = open_status(area.value);
        let age = if area.timestamp > 0 {
            format!(" ({} ago)", elapsed_time(now, area.timestamp))
        } else {
            String::new()
        };
        out.push_str(&format!("{name:<12} {label}{age}\n"));
        if !keyholder.is_empty() {
            out.push_str(&format!("{:<12} keyholder: {keyholder}\n", ""));
        }
    }

    let named: Vec<&str> = state
        .devices
        .people
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    out.push_str(&format!(
        "People: {} named [{}], {} anonymous, {} unknown devices\n",
        named.len(),
        named.join(", "),
        anonymous_people(&state.devices),
        state.devices.unknown_devices_count
    ));

    out.push_str(&format!(
        "Power: front {:.1} W, back {:.1} W, machining {:.1} W\n",
        state.power.front.value, state.power.back.value, state.power.machining.value
    ));

    out
}
