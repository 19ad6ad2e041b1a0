//! CLI integration tests
//!
//! Drive the `snippets` binary against a scratch database and check its
//! output, exit status and the resulting database state.

use snippets_core_types::schema::FIELD_REQUEST_ID;
use snippets_store::SnippetStore;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("store.db")
}

fn run_cli(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snippets"))
        .arg("--db")
        .arg(db)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SNIPPETS_LOG_FORMAT")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        stderr(output)
    );
}

#[test]
fn test_put_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let put = run_cli(&db, &["put", "greeting", "hello world"]);
    assert_success(&put);
    assert_eq!(stdout(&put), "Stored greeting (new): hello world\n");

    let get = run_cli(&db, &["get", "greeting"]);
    assert_success(&get);
    assert_eq!(stdout(&get), "hello world\n");
}

#[test]
fn test_put_overwrites_existing() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    assert_success(&run_cli(&db, &["put", "greeting", "hello world"]));
    let put = run_cli(&db, &["put", "greeting", "goodbye"]);
    assert_success(&put);
    assert_eq!(stdout(&put), "Stored greeting (updated): goodbye\n");

    let store = SnippetStore::open(&db).unwrap();
    assert_eq!(store.retrieve("greeting").unwrap(), Some("goodbye".to_string()));
    assert_eq!(store.list_names().unwrap(), vec!["greeting"]);
}

#[test]
fn test_get_missing_is_not_a_failure() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let get = run_cli(&db, &["get", "absent-key"]);
    assert_success(&get);
    assert!(stdout(&get).is_empty());
    assert!(stderr(&get).contains("No snippet named 'absent-key'"));
}

#[test]
fn test_catalog_lists_names() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let empty = run_cli(&db, &["catalog"]);
    assert_success(&empty);
    assert!(stderr(&empty).contains("No snippets stored"));

    for name in ["b", "a", "c"] {
        assert_success(&run_cli(&db, &["put", name, "body"]));
    }

    let catalog = run_cli(&db, &["catalog"]);
    assert_success(&catalog);
    assert_eq!(stdout(&catalog), "a\nb\nc\n");
}

#[test]
fn test_search_prints_matches() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    assert_success(&run_cli(&db, &["put", "greeting", "hello world"]));
    assert_success(&run_cli(&db, &["put", "farewell", "goodbye"]));

    let search = run_cli(&db, &["search", "hell"]);
    assert_success(&search);
    assert_eq!(stdout(&search), "greeting: hello world\n");

    let none = run_cli(&db, &["search", "HELL"]);
    assert_success(&none);
    assert!(stdout(&none).is_empty());
    assert!(stderr(&none).contains("No snippets match 'HELL'"));
}

#[test]
fn test_blank_name_fails_with_exit_code_one() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let put = run_cli(&db, &["put", " ", "content"]);
    assert_eq!(put.status.code(), Some(1));
    assert!(stderr(&put).contains("ERR_INVALID_INPUT"));

    let store = SnippetStore::open(&db).unwrap();
    assert!(store.list_names().unwrap().is_empty());
}

#[test]
fn test_store_failure_reports_one_error_line() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    assert_success(&run_cli(&db, &["put", "greeting", "hello world"]));
    SnippetStore::open(&db)
        .unwrap()
        .connection()
        .execute_batch("DROP TABLE snippets;")
        .unwrap();

    let get = run_cli(&db, &["get", "greeting"]);
    assert_eq!(get.status.code(), Some(1));
    assert!(stdout(&get).is_empty());

    let err = stderr(&get);
    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines.len(), 1, "stderr: {}", err);
    assert!(lines[0].starts_with("Error: [ERR_PERSISTENCE] in operation 'retrieve': "));
    assert!(lines[0].ends_with("(name: greeting)"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let put = run_cli(&db, &["put", "only-a-name"]);
    assert!(!put.status.success());
    assert_eq!(put.status.code(), Some(2));

    // Nothing was opened or created
    assert!(!db.exists());
}

#[test]
fn test_unknown_command_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = run_cli(&db, &["delete", "greeting"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_db_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_snippets"))
        .args(["put", "env-name", "from env"])
        .env("SNIPPETS_DB", &db)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");
    assert_success(&output);

    let store = SnippetStore::open(&db).unwrap();
    assert_eq!(store.retrieve("env-name").unwrap(), Some("from env".to_string()));
}

#[test]
fn test_json_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_snippets"))
        .args(["--log-format", "json", "put", "greeting", "hello"])
        .arg("--db")
        .arg(&db)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");
    assert_success(&output);

    assert_eq!(stdout(&output), "Stored greeting (new): hello\n");
    let logs = stderr(&output);
    assert!(logs.contains("\"op\":\"store\""), "logs: {}", logs);
    assert!(logs.contains(FIELD_REQUEST_ID), "logs: {}", logs);
}
