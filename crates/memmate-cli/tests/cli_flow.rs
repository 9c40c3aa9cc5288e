use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_memmate"))
}

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("store.json")
}

/// Run the binary with an isolated environment so a developer's real config
/// never leaks into the test.
fn run(dir: &TempDir, store: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env_remove("MEMMATE_STORE")
        .arg("--store")
        .arg(store)
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed: {}",
        context,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Add a verse in quiet mode and return its id.
fn add_verse(dir: &TempDir, store: &Path, reference: &str, text: &str) -> String {
    let output = run(
        dir,
        store,
        &["--quiet", "add", reference, "--text", text],
    );
    assert_success(&output, "add");
    let id = stdout(&output).trim().to_string();
    assert!(!id.is_empty(), "quiet add should print the verse id");
    id
}

#[test]
fn test_add_practice_test_stats_flow() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "John 3:16", "For God so loved the world...");

    let output = run(&dir, &store, &["list"]);
    assert_success(&output, "list");
    assert!(stdout(&output).contains("John 3:16"));

    let output = run(&dir, &store, &["practice", &id]);
    assert_success(&output, "practice");
    assert!(stdout(&output).contains("1 sessions total"));

    let output = run(&dir, &store, &["comfort", &id, "4"]);
    assert_success(&output, "comfort");

    let output = run(&dir, &store, &["test", &id, "--passed", "--score", "0.9"]);
    assert_success(&output, "test");

    let output = run(&dir, &store, &["history", "--json"]);
    assert_success(&output, "history");
    let history: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = history.as_array().expect("history should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["passed"], serde_json::json!(true));
    assert_eq!(entries[0]["score"], serde_json::json!(0.9));

    let output = run(&dir, &store, &["stats", "--json"]);
    assert_success(&output, "stats");
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(stats["total_verses"], serde_json::json!(1));
    assert_eq!(stats["total_practiced"], serde_json::json!(1));
    assert_eq!(stats["total_tested"], serde_json::json!(1));
    assert_eq!(stats["total_correct"], serde_json::json!(1));
    assert_eq!(stats["average_comfort_level"], serde_json::json!(4.0));

    let output = run(&dir, &store, &["stats", &id, "--json"]);
    assert_success(&output, "verse stats");
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(stats["reference"], serde_json::json!("John 3:16"));
    assert_eq!(stats["consecutive_correct"], serde_json::json!(1));

    // The document on disk is the plain JSON contract.
    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store).unwrap()).unwrap();
    assert!(document["verses"].is_object());
    assert!(document["progress"].is_object());
    assert!(document["test_results"].is_array());
}

#[test]
fn test_archive_and_remove_flow() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "Psalm 23:1", "The Lord is my shepherd");

    let output = run(&dir, &store, &["archive", &id]);
    assert_success(&output, "archive");

    let output = run(&dir, &store, &["list", "--json"]);
    assert_success(&output, "list");
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let output = run(&dir, &store, &["list", "--archived", "--json"]);
    assert_success(&output, "list archived");
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["archived"], serde_json::json!(true));

    let output = run(&dir, &store, &["remove", &id, "--yes"]);
    assert_success(&output, "remove");

    let output = run(&dir, &store, &["list", "--archived", "--json"]);
    assert_success(&output, "list after remove");
    let listed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[test]
fn test_update_with_explicit_empty_value() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "Romans 3:23", "For all have sinned");

    let output = run(&dir, &store, &["update", &id, "--text", ""]);
    assert_success(&output, "update");

    let output = run(&dir, &store, &["show", &id, "--json"]);
    assert_success(&output, "show");
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown["verse"]["text"], serde_json::json!(""));
    assert_eq!(shown["verse"]["reference"], serde_json::json!("Romans 3:23"));
}

#[test]
fn test_id_prefix_resolution() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "John 3:16", "...");
    let prefix = &id[..8];

    let output = run(&dir, &store, &["practice", prefix]);
    assert_success(&output, "practice by prefix");

    let output = run(&dir, &store, &["practice", "zzzzzzzz"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No verse id matches"));
}

#[test]
fn test_invalid_score_and_comfort_are_rejected() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "John 3:16", "...");

    let output = run(&dir, &store, &["test", &id, "--passed", "--score", "1.5"]);
    assert!(!output.status.success());

    let output = run(&dir, &store, &["comfort", &id, "6"]);
    assert!(!output.status.success());

    // Neither rejection left any activity behind.
    let output = run(&dir, &store, &["history", "--json"]);
    assert_success(&output, "history");
    let history: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[test]
fn test_reset_purges_history() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let id = add_verse(&dir, &store, "John 3:16", "...");
    let output = run(&dir, &store, &["test", &id, "--failed"]);
    assert_success(&output, "test");

    let output = run(&dir, &store, &["reset", &id, "--yes"]);
    assert_success(&output, "reset");

    let output = run(&dir, &store, &["history", &id, "--json"]);
    assert_success(&output, "history");
    let history: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[test]
fn test_init_creates_store_and_config() {
    let dir = tempdir().unwrap();
    let store = store_path(&dir);

    let output = run(&dir, &store, &["init", "--translation", "ESV"]);
    assert_success(&output, "init");

    assert!(store.exists(), "init should materialize the store file");
    let config_path = dir
        .path()
        .join("config")
        .join("memmate")
        .join("config.toml");
    assert!(config_path.exists(), "init should write the config");

    let config = std::fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("default_translation = \"ESV\""));

    // The configured label now applies to verses added without one.
    let id = add_verse(&dir, &store, "Psalm 23:1", "...");
    let output = run(&dir, &store, &["show", &id, "--json"]);
    assert_success(&output, "show");
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown["verse"]["translation"], serde_json::json!("ESV"));
}
