//! End-to-end tests for the `tasksync` binary.
//!
//! stdout is not a terminal under test, so commands default to JSON.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn tasksync(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasksync").unwrap();
    cmd.current_dir(dir.path())
        .env("TASKSYNC_CONFIG", dir.path().join("no-config.json"))
        .env_remove("TASKSYNC_MERGE_STRATEGY")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_parse_lists_only_task_lines() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "# Title\n- [ ] Buy milk 📅 2024-01-01 #errand\nplain text\n");

    let json = stdout_json(tasksync(&dir).args(["parse", "notes.md"]));

    assert_eq!(json["count"], 1);
    let task = &json["tasks"][0];
    assert_eq!(task["id"], "notes.md:2");
    assert_eq!(task["content"], "Buy milk");
    assert_eq!(task["due"], "2024-01-01");
    assert_eq!(task["tags"][0], "errand");
}

#[test]
fn test_parse_tag_filter() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "- [ ] A #work\n- [ ] B #home\n- [x] C #work\n");

    let json = stdout_json(tasksync(&dir).args(["parse", "notes.md", "--tag", "work"]));
    assert_eq!(json["count"], 2);

    let json = stdout_json(tasksync(&dir).args([
        "parse", "notes.md", "--tag", "work", "--status", "done",
    ]));
    assert_eq!(json["count"], 1);
    assert_eq!(json["tasks"][0]["content"], "C");
}

#[test]
fn test_parse_uses_configured_markers() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", r#"{"markers": {"due": "due:"}}"#);
    write(&dir, "notes.md", "- [ ] Pay rent due: 2024-02-01\n");

    let json = stdout_json(
        tasksync(&dir)
            .arg("--config")
            .arg(&config)
            .args(["parse", "notes.md"]),
    );

    assert_eq!(json["tasks"][0]["content"], "Pay rent");
    assert_eq!(json["tasks"][0]["due"], "2024-02-01");
}

#[test]
fn test_parse_csv() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "- [ ] Call, then write ⏫\n");

    let output = tasksync(&dir)
        .args(["--format", "csv", "parse", "notes.md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(
        text,
        "line,status,priority,due,content,tags\n1,todo,1,,\"Call, then write\",\n"
    );
}

#[test]
fn test_update_rewrites_one_line() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.md", "# Title\n- [ ] Old task\nfooter\n");
    write(&dir, "task.json", r#"{"id": "notes.md:2", "content": "New task", "completed": true, "tags": ["done"]}"#);

    let json = stdout_json(tasksync(&dir).args([
        "update", "notes.md", "--line", "2", "--task", "task.json",
    ]));

    assert_eq!(json["after"], "- [x] New task #done");
    assert_eq!(read(&notes), "# Title\n- [x] New task #done\nfooter\n");
}

#[test]
fn test_update_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.md", "- [ ] Old task\n");
    write(&dir, "task.json", r#"{"id": "notes.md:1", "content": "New task"}"#);

    let json = stdout_json(tasksync(&dir).args([
        "--dry-run", "update", "notes.md", "--line", "1", "--task", "task.json",
    ]));

    assert_eq!(json["dryRun"], true);
    assert_eq!(read(&notes), "- [ ] Old task\n");
}

#[test]
fn test_update_non_task_line_fails() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.md", "# Title\n- [ ] Task\n");
    write(&dir, "task.json", r#"{"id": "x", "content": "New"}"#);

    let output = tasksync(&dir)
        .args(["update", "notes.md", "--line", "1", "--task", "task.json"])
        .assert()
        .code(4)
        .get_output()
        .stderr
        .clone();
    let err: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(err["error"]["code"], "NOT_A_TASK");
    assert_eq!(read(&notes), "# Title\n- [ ] Task\n");
}

#[test]
fn test_format_task_json() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "tasks.json",
        r#"[{"id": "a", "content": "Ship it", "priority": 2, "due": "2024-03-01"},
            {"id": "b", "content": "Waiting", "status": "forwarded"}]"#,
    );

    let json = stdout_json(tasksync(&dir).args(["format", "tasks.json"]));

    assert_eq!(json["lines"][0], "- [ ] Ship it 🔼 📅 2024-03-01");
    assert_eq!(json["lines"][1], "- [>] Waiting");
}

#[test]
fn test_export_todoist_and_things() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "- [ ] Plan trip ⏫ 📅 2024-05-01 #travel\n");

    let todoist = stdout_json(tasksync(&dir).args(["export", "notes.md", "--target", "todoist"]));
    assert_eq!(todoist[0]["content"], "Plan trip");
    assert_eq!(todoist[0]["priority"], 4);
    assert_eq!(todoist[0]["due"]["date"], "2024-05-01");
    assert_eq!(todoist[0]["labels"][0], "travel");

    let things = stdout_json(tasksync(&dir).args(["export", "notes.md", "--target", "things"]));
    assert_eq!(things[0]["title"], "Plan trip");
    assert_eq!(things[0]["tags"], serde_json::json!(["travel", "high-priority"]));
}

#[test]
fn test_import_things_with_location() {
    let dir = TempDir::new().unwrap();
    write(&dir, "things.json", r#"{"id": "T1", "title": "Water plants", "tags": ["x", "high-priority"]}"#);

    let json = stdout_json(tasksync(&dir).args([
        "import", "things.json", "--source", "things", "--path", "Inbox.md", "--line", "4",
    ]));

    assert_eq!(json["tasks"][0]["id"], "Inbox.md:4");
    assert_eq!(json["tasks"][0]["priority"], 1);
    assert_eq!(json["tasks"][0]["tags"], serde_json::json!(["x"]));
    assert_eq!(json["lines"][0], "- [ ] Water plants 🔺 #x");
}

#[test]
fn test_import_location_with_many_tasks_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "todoist.json", r#"[{"id": "1", "content": "A"}, {"id": "2", "content": "B"}]"#);

    tasksync(&dir)
        .args(["import", "todoist.json", "--source", "todoist", "--path", "a.md", "--line", "1"])
        .assert()
        .code(4);
}

#[test]
fn test_map_writes_jsonl() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.md", "- [ ] A\n- [ ] B\n");
    let out = dir.path().join("map.jsonl");

    tasksync(&dir)
        .args(["map", "notes.md", "--output", "map.jsonl"])
        .assert()
        .success();

    let content = read(&out);
    let records: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["taskId"], "notes.md:1");
    assert_eq!(records[1]["file"]["line"], 2);
    assert_eq!(records[0]["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn test_merge_unions_tags() {
    let dir = TempDir::new().unwrap();
    write(&dir, "local.json", r#"{"id": "a.md:1", "content": "Task", "tags": ["a", "b"]}"#);
    write(&dir, "remote.json", r#"{"tags": ["b", "c"], "due": "2024-01-02"}"#);

    let json = stdout_json(tasksync(&dir).args([
        "merge", "--local", "local.json", "--remote", "remote.json",
    ]));

    assert_eq!(json["tags"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(json["due"], "2024-01-02");
}

#[test]
fn test_merge_strategy_from_env() {
    let dir = TempDir::new().unwrap();
    write(&dir, "local.json", r#"{"id": "a.md:1", "content": "Local", "tags": ["a"]}"#);
    write(&dir, "remote.json", r#"{"content": "Remote"}"#);

    let json = stdout_json(
        tasksync(&dir)
            .env("TASKSYNC_MERGE_STRATEGY", "local_wins")
            .args(["merge", "--local", "local.json", "--remote", "remote.json"]),
    );

    assert_eq!(json["content"], "Local");
}

#[test]
fn test_bad_merge_strategy_env_is_invalid_argument() {
    let dir = TempDir::new().unwrap();

    tasksync(&dir)
        .env("TASKSYNC_MERGE_STRATEGY", "coin_flip")
        .args(["recur", "every", "day"])
        .assert()
        .code(4);
}

#[test]
fn test_malformed_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", "{oops");

    tasksync(&dir)
        .arg("--config")
        .arg(&config)
        .args(["recur", "every", "day"])
        .assert()
        .code(7);
}

#[test]
fn test_recur() {
    let dir = TempDir::new().unwrap();

    let json = stdout_json(tasksync(&dir).args([
        "recur", "every", "2", "weeks", "on", "monday", "and", "thursday",
    ]));

    assert_eq!(json["unit"], "weekly");
    assert_eq!(json["interval"], 2);
    assert_eq!(json["weekdays"], serde_json::json!(["monday", "thursday"]));
    assert_eq!(json["raw"], "every 2 weeks on monday and thursday");
}

#[test]
fn test_version_json() {
    let dir = TempDir::new().unwrap();

    let json = stdout_json(tasksync(&dir).arg("version"));

    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
