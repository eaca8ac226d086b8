use std::{env, fs, process::Command};

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

/// Raw stats for one year: `days` consecutive open days with a single
/// one-hour interval each.
fn one_hour_days(year: i32, days: usize) -> String {
    let day = "[[0,3600]]";
    let entries: Vec<&str> = std::iter::repeat(day).take(days).collect();
    format!(
        r#"[{{"Year":{},"Entries":[{}]}}]"#,
        year,
        entries.join(",")
    )
}

#[test]
fn weekly_output_format_is_stable() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let tmp = env::temp_dir().join(format!(
        "openstats_cli_weekly_format_{}.json",
        std::process::id()
    ));
    fs::write(&tmp, one_hour_days(2021, 15)).unwrap();

    let output = Command::new(exe)
        .args(["weekly", tmp.to_str().unwrap(), "--weeks", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    // One hour every day of the trailing week, today excluded.
    assert!(stdout.contains("Monday"));
    assert!(stdout.contains("Sunday"));
    assert!(stdout.contains("01 hours, 00 minutes"));
    assert!(stdout.contains("Average over all days"));
}

#[test]
fn weekly_zero_weeks_is_e1001() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let tmp = env::temp_dir().join(format!(
        "openstats_cli_weekly_zero_{}.json",
        std::process::id()
    ));
    fs::write(&tmp, one_hour_days(2021, 15)).unwrap();

    let output = Command::new(exe)
        .args(["weekly", tmp.to_str().unwrap(), "--weeks", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: weekly aggregation failed: "));
    assert!(stderr.contains("Caused by:"));
    assert!(stderr.contains("E1001: weeks must be >= 1"));
}

#[test]
fn weekly_missing_input_file_is_e2001() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let missing = env::temp_dir().join(format!(
        "openstats_cli_missing_input_{}.json",
        std::process::id()
    ));
    let _ = fs::remove_file(&missing);

    let output = Command::new(exe)
        .args(["weekly", missing.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: loading stats failed: "));
    // The trailing I/O error text is OS-dependent, only the prefix is fixed.
    assert!(stderr.contains("E2001: failed to read stats file"));
}

#[test]
fn flatten_success_writes_output_json() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let dir = env::temp_dir().join(format!(
        "openstats_cli_flatten_success_{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("stats.json");
    let output_path = dir.join("stats.flat.json");
    fs::write(&input, one_hour_days(2021, 3)).unwrap();

    let output = Command::new(exe)
        .args(["flatten", input.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output_path.exists());

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.contains("\"date\""));
    assert!(json.contains("\"durationInSec\": 3600"));
}

#[test]
fn yearly_table_includes_input_years() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let tmp = env::temp_dir().join(format!(
        "openstats_cli_yearly_{}.json",
        std::process::id()
    ));
    fs::write(&tmp, one_hour_days(2021, 3)).unwrap();

    let output = Command::new(exe)
        .args(["yearly", tmp.to_str().unwrap(), "--start-year", "2021"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("Year | Hours | Hours/day"));
    assert!(stdout.contains("2021"));
}

#[test]
fn status_replays_event_log() {
    let exe = env!("CARGO_BIN_EXE_openstats_cli");

    let tmp = env::temp_dir().join(format!(
        "openstats_cli_status_{}.json",
        std::process::id()
    ));
    fs::write(
        &tmp,
        r#"[
            {"event":"mqtt","data":{"connected":true,"spaceBrokerOnline":true}},
            {"event":"spaceOpen","data":{"state":"open+","timestamp":100}},
            {"event":"keyholder","data":"ada"},
            {"event":"machining","data":{"state":"keyholder","timestamp":110}}
        ]"#,
    )
    .unwrap();

    let output = Command::new(exe)
        .args(["status", tmp.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("Space broker: online"));
    assert!(stdout.contains("OPEN+!"));
    assert!(stdout.contains("keyholder: ada"));
    assert!(stdout.contains("CLOSED (keyholder only!)"));
    assert!(stdout.contains("Power:"));
}
