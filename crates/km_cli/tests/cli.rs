//! CLI end-to-end tests: real binary, real files, real exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn km() -> Command {
    Command::cargo_bin("km").expect("binary")
}

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

#[test]
fn snapshot_run_writes_winner_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "polls.json",
        r#"{"CDU/CSU": 30.0, "AfD": 20.8, "SPD": 15.0, "GRÜNE": 10.0}"#,
    );
    let out = dir.path().join("data.json");

    km().arg("--snapshot")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("Koalit."));
    assert!(text.contains("+ AfD"));
    assert!(text.contains("50.8%"));
}

#[test]
fn below_hurdle_input_exits_zero_with_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "polls.json", r#"{"DIE LINKE": 4.0, "Sonstige": 3.0}"#);
    let out = dir.path().join("data.json");

    km().arg("--snapshot")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("keine"));
    assert!(text.contains("Mehrh."));
}

#[test]
fn custom_icon_is_stamped_on_frames() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "polls.json", r#"{"CDU/CSU": 52.0}"#);
    let out = dir.path().join("data.json");

    km().arg("--snapshot")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--icon")
        .arg("777")
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(value["frames"]
        .as_array()
        .unwrap()
        .iter()
        .all(|f| f["icon"] == "777"));
}

#[test]
fn survey_prints_coalitions_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "polls.json",
        r#"{"CDU/CSU": 30.0, "AfD": 20.8, "SPD": 15.0}"#,
    );

    km().arg("--snapshot")
        .arg(&input)
        .arg("--survey")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""parties":["CDU/CSU","AfD"]"#))
        .stdout(predicate::str::contains(r#""selected":true"#));
}

#[test]
fn raw_mode_averages_then_evaluates() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "raw.json",
        r#"{
            "dates": ["20.08.2026", "24.08.2026"],
            "parties": { "CDU/CSU": [52.0, 52.0], "FDP": [4.0, null] }
        }"#,
    );
    let out = dir.path().join("data.json");

    km().arg("--raw")
        .arg(&input)
        .arg("--as-of")
        .arg("2026-08-28")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("CDU/CSU"));
    assert!(text.contains("52.0%"));
}

#[test]
fn missing_input_flag_is_a_usage_error() {
    km().assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--snapshot"));
}

#[test]
fn invalid_share_exits_with_validation_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "polls.json", r#"{"CDU/CSU": 130.0}"#);

    km().arg("--snapshot")
        .arg(&input)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("share out of range"));
}

#[test]
fn missing_file_exits_with_io_code() {
    km().arg("--snapshot")
        .arg("/nonexistent/polls.json")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn url_like_path_is_rejected() {
    km().arg("--snapshot")
        .arg("https://example.org/polls.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("networked paths"));
}
