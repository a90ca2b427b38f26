use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{TestEnv, init_as_admin};

fn seeded(name: &str) -> TestEnv {
    let env = init_as_admin(name);
    env.cmd()
        .args(["employee", "add", "Anna", "pw1"])
        .assert()
        .success();
    env.cmd()
        .args([
            "entry",
            "add",
            "2025-09-01",
            "--in",
            "09:00",
            "--out",
            "17:00",
            "--break",
            "30",
            "--project",
            "1",
            "--employee",
            "anna",
        ])
        .assert()
        .success();
    env
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let env = seeded("export_xlsx");
    let out = env.out_file("report.xlsx");

    env.cmd()
        .args(["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_csv_writes_one_file_per_sheet() {
    let env = seeded("export_csv");
    let out = env.out_file("report.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    for key in ["employees", "time_entries", "projects", "absences", "credentials"] {
        let path = env.out_file(&format!("report_{key}.csv"));
        assert!(Path::new(&path).exists(), "missing {path}");
    }

    let entries = fs::read_to_string(env.out_file("report_time_entries.csv")).unwrap();
    assert!(entries.contains("01.09.2025"));
    assert!(entries.contains("Anna"));
    assert!(entries.contains("7.50"));
    assert!(entries.contains("Site North"));
}

#[test]
fn test_export_json_includes_credentials() {
    let env = seeded("export_json");
    let out = env.out_file("report.json");

    env.cmd()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["credentials"][0]["Password"], "pw1");
    assert_eq!(doc["projects"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_export_requires_absolute_path() {
    let env = seeded("export_relative");
    env.cmd()
        .args(["export", "--format", "json", "--file", "relative.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_is_admin_only() {
    let env = seeded("export_admin_only");
    env.login("anna", "pw1");
    let out = env.out_file("report.json");

    env.cmd()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}
