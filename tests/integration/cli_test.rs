//! Integration tests for the spotcheck CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture_path;

/// Command with config isolated to a scratch directory.
fn spotcheck(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spotcheck").expect("binary should build");
    cmd.env("SPOTCHECK_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn feed() -> String {
    fixture_path("evening_feed.json").display().to_string()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn report_for_explicit_hour() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["report", "--hour", "23", "--input", &feed()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "From 7:00 PM to 11:00 PM - Credit Mention\n(WEATHER) SUNRISE UMBRELLAS",
        ))
        .stdout(predicate::str::contains("7:56 PM   TAJ EMPLOYMENT AGENCY"));
}

#[test]
fn report_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let input = std::fs::read_to_string(fixture_path("evening_feed.json")).unwrap();

    spotcheck(&dir)
        .args(["report", "--hour", "23"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("(NEWS) MUSTAFA CENTRE"));
}

#[test]
fn report_uses_at_instant_for_hour() {
    let dir = TempDir::new().unwrap();

    // 15:30 UTC is 23:30 station time, which has no window
    spotcheck(&dir)
        .args(["report", "--at", "2025-12-17T15:30:00Z", "--input", &feed()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No reporting window for hour 23"));

    // 11:10 UTC is 19:10 station time
    spotcheck(&dir)
        .args(["report", "--at", "2025-12-17T11:10:00Z", "--input", &feed()])
        .assert()
        .success()
        .stdout(predicate::str::contains("From 4:00 PM to 7:00 PM - Ad"));
}

#[test]
fn report_from_encoded_lines() {
    let dir = TempDir::new().unwrap();
    let lines = "7:46pm : (Credit Mention - TRAFFIC WATCH) SRI AMBIKAS\n\
                 not a line\n\
                 7:56pm : Ad - TAJ EMPLOYMENT AGENCY \n\
                 8:10pm : Ad - TAJ EMPLOYMENT AGENCY\n\
                 8:20pm : Special - CONCERT\n";

    spotcheck(&dir)
        .args(["report", "--hour", "23", "--encoded"])
        .write_stdin(lines)
        .assert()
        .success()
        .stdout(predicate::str::contains("7:46 PM   (TRAFFIC WATCH) SRI AMBIKAS"))
        .stdout(predicate::str::contains("7:56 PM   TAJ EMPLOYMENT AGENCY"))
        .stdout(predicate::str::contains("8:10 PM").not())
        .stdout(predicate::str::contains("CONCERT").not());
}

#[test]
fn report_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports").join("evening.txt");

    spotcheck(&dir)
        .args(["report", "--hour", "23", "--input", &feed(), "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("TAJ EMPLOYMENT AGENCY"));
}

#[test]
fn report_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let run = || {
        spotcheck(&dir)
            .args(["report", "--hour", "23", "--input", &feed()])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["report", "--hour", "23", "--input", "/nonexistent/feed.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn invalid_json_fails() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["classify"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read records"));
}

#[test]
fn classify_explains_each_record() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["classify", "--input", &feed()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "7:46pm : (Credit Mention - TRAFFIC WATCH) SRI AMBIKAS - OOTY GOLD PONNI RICE\n    -> Credit Mention: (TRAFFIC WATCH) SRI AMBIKAS - OOTY GOLD PONNI RICE",
        ))
        .stdout(predicate::str::contains("- : STATION ID\n    -> skipped (below lead-in (4s))"))
        .stdout(predicate::str::contains("-> skipped (special)"));
}

#[test]
fn classify_filters_by_category() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["classify", "--input", &feed(), "--category", "AD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-> Ad: TAJ EMPLOYMENT AGENCY"))
        .stdout(predicate::str::contains("Credit Mention").not())
        .stdout(predicate::str::contains("skipped").not());
}

#[test]
fn normalize_prints_snapshot() {
    let dir = TempDir::new().unwrap();

    let output = spotcheck(&dir)
        .args(["normalize", "--input", &feed()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &value["1765972000870"];
    assert_eq!(entry["StartTime"], "2025-12-17 19:46:40");
    assert_eq!(entry["Duration"], "0:12");
    assert_eq!(
        entry["Title"],
        "$SPON - (CM/TRAFFIC WATCH) SRI AMBIKAS - OOTY GOLD PONNI RICE"
    );
}

#[test]
fn normalize_compact_prints_one_data_line() {
    let dir = TempDir::new().unwrap();

    let output = spotcheck(&dir)
        .args(["normalize", "--compact", "--input", &feed()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let json = stdout.trim_end().strip_prefix("data=").unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["1765972000870"]["Duration"], "0:12");
}

#[test]
fn windows_lists_default_table() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .arg("windows")
        .assert()
        .success()
        .stdout(predicate::str::contains("23    7:00 PM - 11:00 PM"))
        .stdout(predicate::str::contains("10    6:00 AM - 10:00 AM"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();

    spotcheck(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(dir.path().join("config.toml").exists());

    spotcheck(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    spotcheck(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("utc_offset_hours = 8"))
        .stdout(predicate::str::contains("[[windows]]"));
}

#[test]
fn config_file_overrides_windows() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[windows]]\nhour = 21\nstart = \"8:00 PM\"\nend = \"9:00 PM\"\n",
    )
    .unwrap();

    spotcheck(&dir)
        .args(["report", "--hour", "21", "--input", &feed()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "From 8:00 PM to 9:00 PM - Credit Mention\n(INFO) ROAD SAFETY WEEK",
        ));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[station]\nutc_offset_hours = 99\n").unwrap();

    spotcheck(&dir)
        .args(["report", "--hour", "23", "--input", &feed()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}
