#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpt() -> Command {
    cargo_bin_cmd!("rphasetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rphasetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_phases(db_path: &str) {
    // init DB (creates tables)
    rpt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // phase 1 metadata: name + budget
    rpt()
        .args([
            "--db",
            db_path,
            "group",
            "SITE-1",
            "--group",
            "1",
            "--label",
            "Groundworks",
            "--budget",
            "40",
        ])
        .assert()
        .success();

    // two sub-phases in phase 1
    rpt()
        .args([
            "--db",
            db_path,
            "add",
            "SITE-1",
            "--group",
            "1",
            "--label",
            "excavation",
            "--start",
            "2026-03-02",
            "--hour",
            "8",
            "--duration",
            "8",
        ])
        .assert()
        .success();

    rpt()
        .args([
            "--db",
            db_path,
            "add",
            "SITE-1",
            "--group",
            "1",
            "--label",
            "drainage",
            "--start",
            "2026-03-03",
            "--hour",
            "8",
            "--duration",
            "12",
        ])
        .assert()
        .success();
}
