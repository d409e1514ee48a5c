use predicates::str::contains;

mod common;
use common::{rpt, setup_test_db};

fn add_subphase(db_path: &str, label: &str, start: &str, hour: &str) {
    rpt()
        .args([
            "--db",
            db_path,
            "add",
            "SITE-9",
            "--group",
            "1",
            "--label",
            label,
            "--start",
            start,
            "--hour",
            hour,
            "--duration",
            "4",
        ])
        .assert()
        .success();
}

// Ensure the group upsert keeps exactly one placeholder per (project, group)
// and updates it in place.
#[test]
fn test_group_upsert_is_a_single_placeholder() {
    let db_path = setup_test_db("group_upsert");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpt()
        .args([
            "--db", &db_path, "group", "SITE-9", "--group", "1", "--label", "Shell", "--budget",
            "100",
        ])
        .assert()
        .success()
        .stdout(contains("Created phase 1"));

    // Second call: update in place, not a second sentinel row
    rpt()
        .args(["--db", &db_path, "group", "SITE-9", "--group", "1", "--budget", "160"])
        .assert()
        .success()
        .stdout(contains("Updated phase 1"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (count, label, budget, sub): (i64, String, i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(label), MAX(budget_hours), MAX(sub_number)
             FROM phases
             WHERE project = 'SITE-9' AND group_number = 1 AND duration_hours = 0",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("query placeholder");

    assert_eq!(count, 1);
    assert_eq!(label, "Shell"); // label untouched by the budget-only update
    assert_eq!(budget, 160);
    assert_eq!(sub, 0);
}

// Insert sub-phases out of chronological order, close the project, and check
// the numbers follow (start_date, start_hour).
#[test]
fn test_close_restores_chronological_numbering() {
    let db_path = setup_test_db("close_renumber");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "group", "SITE-9", "--group", "1", "--label", "Shell"])
        .assert()
        .success();

    // Insertion order: latest first
    add_subphase(&db_path, "roof", "2026-03-12", "8"); // gets number 1
    add_subphase(&db_path, "walls", "2026-03-05", "13"); // gets number 2
    add_subphase(&db_path, "slab", "2026-03-05", "8"); // gets number 3

    rpt()
        .args(["--db", &db_path, "close", "SITE-9"])
        .assert()
        .success()
        .stdout(contains("numbering restored"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT label, sub_number FROM phases
             WHERE project = 'SITE-9' AND duration_hours > 0
             ORDER BY sub_number ASC",
        )
        .expect("prepare");
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("slab".to_string(), 1),
            ("walls".to_string(), 2),
            ("roof".to_string(), 3),
        ]
    );
}

// Running close twice without edits is a no-op the second time.
#[test]
fn test_close_is_idempotent() {
    let db_path = setup_test_db("close_idempotent");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_subphase(&db_path, "roof", "2026-03-12", "8");
    add_subphase(&db_path, "slab", "2026-03-05", "8");

    rpt()
        .args(["--db", &db_path, "close", "SITE-9"])
        .assert()
        .success()
        .stdout(contains("2 update(s) applied"));

    rpt()
        .args(["--db", &db_path, "close", "SITE-9"])
        .assert()
        .success()
        .stdout(contains("0 update(s) applied"));
}

// Deleting a group removes every member, placeholder included, and leaves
// the project's other groups alone.
#[test]
fn test_delete_group_removes_placeholder_and_members() {
    let db_path = setup_test_db("group_delete");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "group", "SITE-9", "--group", "1", "--label", "Shell"])
        .assert()
        .success();

    add_subphase(&db_path, "slab", "2026-03-05", "8");
    add_subphase(&db_path, "walls", "2026-03-06", "8");

    // A second group that must survive
    rpt()
        .args([
            "--db", &db_path, "add", "SITE-9", "--group", "2", "--label", "finishes", "--start",
            "2026-04-01", "--duration", "8",
        ])
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "del", "SITE-9", "--group", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("3 record(s) removed"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    let left_in_group: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM phases WHERE project = 'SITE-9' AND group_number = 1",
            [],
            |row| row.get(0),
        )
        .expect("count group 1");
    assert_eq!(left_in_group, 0);

    let survivors: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM phases WHERE project = 'SITE-9' AND group_number = 2",
            [],
            |row| row.get(0),
        )
        .expect("count group 2");
    assert_eq!(survivors, 1);
}

// Deleting an unknown group is an error, not a silent no-op.
#[test]
fn test_delete_unknown_group_fails() {
    let db_path = setup_test_db("group_delete_unknown");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "del", "SITE-9", "--group", "4"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No phase 4"));
}

// The placeholder cannot be edited through `add --edit`.
#[test]
fn test_placeholder_edit_through_add_is_rejected() {
    let db_path = setup_test_db("placeholder_edit");

    rpt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpt()
        .args(["--db", &db_path, "group", "SITE-9", "--group", "1", "--label", "Shell"])
        .assert()
        .success();

    // The placeholder is the only row → id 1
    rpt()
        .args([
            "--db", &db_path, "add", "SITE-9", "--edit", "--id", "1", "--label", "sneaky",
        ])
        .assert()
        .failure()
        .stderr(contains("group"));
}
