use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RESULT: &str = r#"{
  "data": {
    "cols": [
      { "name": "ID", "display_name": "ID", "base_type": "type/Integer", "semantic_type": "type/PK" },
      { "name": "NAME", "display_name": "Name", "base_type": "type/Text" },
      { "name": "TOTAL", "display_name": "Total", "base_type": "type/Float" }
    ],
    "rows": [
      [1, "beta", 20.5],
      [2, "alpha", null],
      [3, "gamma", 7]
    ]
  }
}"#;

fn write_result(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("result.json");
    fs::write(&path, content).unwrap();
    path
}

fn tabview(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tabview").unwrap();
    cmd.arg("--log-file")
        .arg(dir.join("tabview.log"))
        .env_remove("TABVIEW_SETTINGS")
        .arg("--settings")
        .arg(dir.join("missing-settings.toml"));
    cmd
}

#[test]
fn test_print_first_page() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--print", "--no-color", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows 1-2 of 3"))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("gamma").not());
}

#[test]
fn test_print_sorted_second_page() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--sort", "Name", "--desc"])
        .args(["--print", "--no-color", "--page-size", "2", "--page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows 3-3 of 3"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("Name ↓"));
}

#[test]
fn test_print_all_rows_by_default() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--print", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows 1-3 of 3"));
}

#[test]
fn test_print_empty_result() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, r#"{"data": {"cols": [{"name": "ID"}], "rows": []}}"#);

    tabview(dir.path())
        .arg(&file)
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Query returned no results."));
}

#[test]
fn test_print_record_by_pk() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--print", "--no-color", "--detail", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Record #2"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("2 of 3"));
}

#[test]
fn test_filtered_out_record_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--print", "--detail", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record 9999 couldn't be found"));
}

#[test]
fn test_print_without_log_file_writes_no_log() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);
    let data_home = dir.path().join("data");

    Command::cargo_bin("tabview")
        .unwrap()
        .env("XDG_DATA_HOME", &data_home)
        .env_remove("TABVIEW_SETTINGS")
        .arg(&file)
        .arg("--settings")
        .arg(dir.path().join("missing-settings.toml"))
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows 1-3 of 3"));
    assert!(!data_home.join("tabview").exists());
}

#[test]
fn test_page_past_end_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--print", "--page-size", "2", "--page", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the last page"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    tabview(dir.path())
        .arg(dir.path().join("nope.json"))
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, "{ not json");

    tabview(dir.path())
        .arg(&file)
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn test_unknown_sort_column_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);

    tabview(dir.path())
        .arg(&file)
        .args(["--sort", "NOPE", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column 'NOPE'"));
}

#[test]
fn test_bad_settings_operator_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, RESULT);
    let settings = dir.path().join("settings.toml");
    fs::write(
        &settings,
        "[[highlight]]\ncolumn = \"TOTAL\"\noperator = \"~\"\nvalue = 1\ncolor = \"red\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("tabview").unwrap();
    cmd.arg("--log-file")
        .arg(dir.path().join("tabview.log"))
        .arg(&file)
        .arg("--settings")
        .arg(&settings)
        .arg("--print")
        .assert()
        .failure();
}
