use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_dump(path: &Path) {
    // one high-confidence box in cell (0, 0) of a 700x600 image
    let dump = serde_json::json!({
        "image_width": 700,
        "image_height": 600,
        "class_names": ["F01", "S01"],
        "output": {
            "boxes": [
                { "x1": 30.0, "y1": 20.0, "x2": 70.0, "y2": 60.0,
                  "class_index": 0, "confidence": 0.91 }
            ]
        }
    });
    fs::write(path, dump.to_string()).expect("write dump");
}

#[test]
fn converts_dump_to_calendar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dump.json");
    let output = dir.path().join("dienstplan.ics");
    write_dump(&input);

    Command::cargo_bin("shiftgrid")
        .expect("binary")
        .arg(&input)
        .args(["--month", "03.2024"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let calendar = fs::read_to_string(&output).expect("read calendar");
    assert!(calendar.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n"));
    assert!(calendar.contains("DTSTART;TZID=Europe/Berlin:20240301T064500"));
    assert!(calendar.ends_with("END:VCALENDAR\n"));
}

#[test]
fn derives_month_from_image_filename() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dump.json");
    let output = dir.path().join("out.ics");
    write_dump(&input);

    Command::cargo_bin("shiftgrid")
        .expect("binary")
        .arg(&input)
        .args(["--image", "dienstplan_11.2025.jpg"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let calendar = fs::read_to_string(&output).expect("read calendar");
    assert!(calendar.contains("DTSTART;TZID=Europe/Berlin:20251101T064500"));
}

#[test]
fn writes_roster_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dump.json");
    let output = dir.path().join("out.ics");
    let report = dir.path().join("report.json");
    write_dump(&input);

    Command::cargo_bin("shiftgrid")
        .expect("binary")
        .arg(&input)
        .args(["--month", "03.2024"])
        .arg("--output")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let entries: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report")).expect("json");
    assert_eq!(entries[0]["day_index"], 0);
    assert_eq!(entries[0]["shift_code"], "F01");
}

#[test]
fn rejects_missing_month() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dump.json");
    write_dump(&input);

    Command::cargo_bin("shiftgrid")
        .expect("binary")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no month given"));
}

#[test]
fn rejects_malformed_month() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("dump.json");
    write_dump(&input);

    Command::cargo_bin("shiftgrid")
        .expect("binary")
        .arg(&input)
        .args(["--month", "2024-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected MM.YYYY"));
}
