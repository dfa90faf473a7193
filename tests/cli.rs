use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("parlcrawl").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn record(short_id: &str, title: &str, days_ago: i64, done: &str) -> String {
    let updated = Local::now().naive_local() - Duration::days(days_ago);
    format!(
        r#"{{"shortId":"{short_id}","title":"{title}","updated":"{}Z","state":{{"doneKey":"{done}"}},"drafts":[{{"consultation":{{"resolutions":[{{"text":"Accepted","date":"2024-01-05T00:00:00Z"}}]}}}}]}}"#,
        updated.format("%Y-%m-%dT%H:%M:%S")
    )
}

#[test]
fn dry_run_loads_and_compares() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("list.txt"), "21.2355\n21.2355\nabc\n22.0001\n").unwrap();
    std::fs::write(dir.path().join("other.txt"), "20220001\n23.0100\n").unwrap();

    cmd(&dir)
        .args(["list.txt", "--compare", "other.txt", "--dry"])
        .assert()
        .success()
        .stdout(contains("2 affairs loaded (1 invalid, 1 duplicate)"))
        .stdout(contains("20220001 is contained in the comparison list."))
        .stdout(contains("1 affair(s) found in comparison list."))
        .stdout(contains("Dry run"));
}

#[test]
fn missing_list_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).args(["missing.txt", "--dry"]).assert().failure();
}

#[test]
fn cache_and_network_modes_are_exclusive() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("list.txt"), "21.2355\n").unwrap();

    cmd(&dir)
        .args(["list.txt", "--from-cache", "--create-cache"])
        .assert()
        .failure();
}

#[test]
fn from_cache_reports_updated_and_done() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    std::fs::create_dir(&cache).unwrap();
    std::fs::write(dir.path().join("list.txt"), "21.2355\n22.0001\n22.0002\n").unwrap();
    std::fs::write(cache.join("20212355.txt"), record("21.2355", "Recent motion", 3, "0")).unwrap();
    std::fs::write(cache.join("20220001.txt"), record("22.0001", "Old postulate", 30, "1")).unwrap();

    cmd(&dir)
        .args(["list.txt", "--from-cache", "--print-state"])
        .assert()
        .success()
        .stdout(contains("21.2355: Recent motion"))
        .stdout(contains("Accepted (2024-01-05)"))
        .stdout(contains("22.0001: Old postulate"))
        .stdout(contains("1 affair(s) updated within the last 7 days."))
        .stderr(contains("20220002"));
}

#[test]
fn ignore_done_hides_done_affairs() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("store");
    std::fs::create_dir(&cache).unwrap();
    std::fs::write(dir.path().join("list.txt"), "22.0001\n").unwrap();
    std::fs::write(cache.join("20220001.txt"), record("22.0001", "Old postulate", 30, "1")).unwrap();

    cmd(&dir)
        .args(["list.txt", "--from-cache", "--ignore-done", "--cache-dir", "store", "-t", "10"])
        .assert()
        .success()
        .stdout(contains("Old postulate").not())
        .stdout(contains("within the last 10 days"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    std::fs::create_dir(&cache).unwrap();
    std::fs::write(dir.path().join("list.txt"), "21.2355\n").unwrap();
    std::fs::write(cache.join("20212355.txt"), record("21.2355", "Recent motion", 0, "0")).unwrap();

    cmd(&dir)
        .args(["list.txt", "--from-cache", "--json", "-q"])
        .assert()
        .success()
        .stdout(contains("\"short_id\": \"21.2355\""))
        .stdout(contains("\"status_text\": \"Accepted (2024-01-05)\""));
}

#[test]
fn json_output_respects_ignore_done() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    std::fs::create_dir(&cache).unwrap();
    std::fs::write(dir.path().join("list.txt"), "22.0001\n").unwrap();
    std::fs::write(cache.join("20220001.txt"), record("22.0001", "Old postulate", 30, "1")).unwrap();

    cmd(&dir)
        .args(["list.txt", "--from-cache", "--json", "--ignore-done", "-q"])
        .assert()
        .success()
        .stdout(contains("\"done\": []"))
        .stdout(contains("Old postulate").not());
}
