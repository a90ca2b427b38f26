use predicates::str::contains;

mod common;
use common::{init_as_employee, printed_id};

#[test]
fn test_vacation_is_deducted_on_approval() {
    let env = init_as_employee("vacation_flow", "Anna", "pw", "full-time");

    let out = env.stdout_of(&[
        "absence",
        "request",
        "vacation",
        "2025-07-01",
        "2025-07-03",
        "--days",
        "3",
    ]);
    assert!(out.contains("Pending"));
    let id = printed_id(&out);

    // nothing deducted while pending
    env.cmd()
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("30 of 30 days left"));

    env.login("test", "test");
    env.cmd()
        .args(["absence", "list", "--pending"])
        .assert()
        .success()
        .stdout(contains(id.as_str()));
    env.cmd()
        .args(["absence", "approve", &id])
        .assert()
        .success();

    env.login("anna", "pw");
    env.cmd()
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("27 of 30 days left"));
}

#[test]
fn test_vacation_beyond_balance_is_refused() {
    let env = init_as_employee("vacation_too_long", "Ben", "pw", "minor");

    env.cmd()
        .args([
            "absence",
            "request",
            "vacation",
            "2025-07-01",
            "2025-07-10",
            "--days",
            "6",
        ])
        .assert()
        .failure()
        .stderr(contains("Insufficient balance"));
}

#[test]
fn test_time_off_in_lieu_consumes_and_releases_overtime() {
    let env = init_as_employee("toil_flow", "Cara", "pw", "part-time");

    env.cmd()
        .args(["entry", "add", "2025-06-02", "--in", "08:00", "--out", "14:00"])
        .assert()
        .success();

    let out = env.stdout_of(&[
        "absence",
        "request",
        "toil",
        "2025-06-10",
        "2025-06-10",
        "--days",
        "1",
        "--hours",
        "6",
    ]);
    let id = printed_id(&out);

    env.login("test", "test");
    env.cmd()
        .args(["absence", "approve", &id])
        .assert()
        .success();
    env.cmd()
        .args(["employee", "show", "cara"])
        .assert()
        .success()
        .stdout(contains("-4.00h"));

    // recomputing from entries keeps the consumed hours
    env.cmd()
        .args(["employee", "recalc", "cara"])
        .assert()
        .success();
    env.cmd()
        .args(["employee", "show", "cara"])
        .assert()
        .success()
        .stdout(contains("-4.00h"));

    env.cmd().args(["absence", "del", &id]).assert().success();
    env.cmd()
        .args(["employee", "show", "cara"])
        .assert()
        .success()
        .stdout(contains("+2.00h"));
}

#[test]
fn test_sick_leave_is_approved_immediately() {
    let env = init_as_employee("sick_leave", "Dora", "pw", "full-time");

    env.cmd()
        .args([
            "absence",
            "request",
            "sick",
            "2025-03-03",
            "2025-03-04",
            "--days",
            "2",
            "--notes",
            "flu",
        ])
        .assert()
        .success()
        .stdout(contains("Approved"));
}

#[test]
fn test_end_before_start_is_invalid() {
    let env = init_as_employee("absence_dates", "Emil", "pw", "full-time");

    env.cmd()
        .args([
            "absence",
            "request",
            "care",
            "2025-03-05",
            "2025-03-04",
            "--days",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("before start date"));
}

#[test]
fn test_toil_without_hours_is_rejected() {
    let env = init_as_employee("toil_no_hours", "Finn", "pw", "full-time");

    env.cmd()
        .args([
            "absence",
            "request",
            "toil",
            "2025-03-05",
            "2025-03-05",
            "--days",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("needs --hours"));
}
