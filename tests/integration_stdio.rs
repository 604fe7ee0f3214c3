use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};

fn command_line(action: &str, user: &str) -> String {
    let msg = json!({
        "version": 1,
        "origin": {"name": "node01", "module": "wazuh-execd"},
        "command": action,
        "parameters": {
            "extra_args": [],
            "alert": {"data": {"dstuser": user}},
            "program": "disable-account"
        }
    });
    format!("{}\n", msg)
}

fn responder(audit_log: &Path) -> Command {
    let bin_path = env!("CARGO_BIN_EXE_disable-account");
    let mut cmd = Command::new(bin_path);
    cmd.arg("--audit-log")
        .arg(audit_log)
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .env("LOG_LEVEL", "warn");
    cmd
}

fn audit_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(unix)]
fn first_existing(candidates: &[&str]) -> PathBuf {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .expect("no candidate binary found")
}

#[test]
fn test_binary_help() {
    let bin_path = env!("CARGO_BIN_EXE_disable-account");
    Command::new(bin_path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("disable-account"));
}

#[test]
fn test_garbage_input_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder(&log)
        .write_stdin("\u{1}not json at all\n")
        .assert()
        .code(255);

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("disable-account: Cannot parse input to json"));
}

#[test]
fn test_empty_stdin_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder(&log).write_stdin("").assert().code(255);

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Cannot read input from stdin"));
}

#[test]
fn test_missing_dstuser_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let input = format!(
        "{}\n",
        json!({"version": 1, "command": "delete", "parameters": {"alert": {}}})
    );

    responder(&log)
        .write_stdin(input)
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty());

    assert!(audit_lines(&log)[0].ends_with("Cannot read 'dstuser' from data"));
}

#[test]
fn test_root_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder(&log)
        .write_stdin(command_line("delete", "root"))
        .assert()
        .code(255);

    assert!(audit_lines(&log)[0].ends_with("Invalid username"));
}

fn responder_from_env(audit_log: &Path, log_format: &str) -> Command {
    let bin_path = env!("CARGO_BIN_EXE_disable-account");
    let mut cmd = Command::new(bin_path);
    cmd.env_remove("RUST_LOG")
        .env("AR_LOCKOUT_AUDIT_LOG", audit_log)
        .env("LOG_FORMAT", log_format)
        .env("LOG_LEVEL", "warn");
    cmd
}

#[test]
fn test_log_format_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder_from_env(&log, "JSON")
        .write_stdin(command_line("delete", "root"))
        .assert()
        .code(255)
        .stderr(predicate::str::contains("must be").not());

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("disable-account: Invalid username"));
}

#[test]
fn test_unknown_log_format_keeps_audit_log_path() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder_from_env(&log, "yaml")
        .write_stdin(command_line("delete", "root"))
        .assert()
        .code(255)
        .stderr(predicate::str::contains("LOG_FORMAT must be 'json' or 'text', got 'yaml'"));

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("disable-account: Invalid username"));
}

#[test]
fn test_program_name_tags_audit_record() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder(&log)
        .arg("--program-name")
        .arg("lockout-test")
        .write_stdin(command_line("restart", "alice"))
        .assert()
        .code(255);

    assert!(audit_lines(&log)[0].ends_with("lockout-test: Invalid value of 'command'"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_disable_runs_utility_and_ignores_its_failure() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let failing = first_existing(&["/bin/false", "/usr/bin/false"]);

    responder(&log)
        .env("AR_LOCKOUT_PASSWD_PATH", &failing)
        .write_stdin(command_line("delete", "alice"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(audit_lines(&log)[0].ends_with("disable-account: Ended"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_executable_utility_is_invalid() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let passwd = dir.path().join("passwd");
    std::fs::write(&passwd, b"").unwrap();
    std::fs::set_permissions(&passwd, std::fs::Permissions::from_mode(0o644)).unwrap();

    responder(&log)
        .env("AR_LOCKOUT_PASSWD_PATH", &passwd)
        .write_stdin(command_line("delete", "alice"))
        .assert()
        .code(255);

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&format!("Error executing '{}': ", passwd.display())));
    assert!(!lines[0].contains("os error"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_enable_sends_check_keys_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let ok = first_existing(&["/bin/true", "/usr/bin/true"]);
    let input = format!(
        "{}{}\n",
        command_line("add", "alice"),
        json!({"version": 1, "origin": {"name": "node01", "module": "wazuh-execd"}, "command": "continue", "parameters": {}})
    );

    let output = responder(&log)
        .env("AR_LOCKOUT_PASSWD_PATH", &ok)
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let sent: serde_json::Value =
        serde_json::from_str(String::from_utf8(output).unwrap().trim()).unwrap();
    assert_eq!(sent["command"], "check_keys");
    assert_eq!(sent["origin"]["name"], "disable-account");
    assert_eq!(sent["parameters"]["keys"], json!(["alice"]));
    assert!(audit_lines(&log)[0].ends_with("Ended"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_enable_abort_is_success() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let input = format!(
        "{}{}\n",
        command_line("add", "alice"),
        json!({"version": 1, "command": "abort"})
    );

    responder(&log)
        .env("AR_LOCKOUT_PASSWD_PATH", "/nonexistent/passwd")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("check_keys"));

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("Aborted"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_enable_without_reply_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");

    responder(&log)
        .write_stdin(command_line("add", "alice"))
        .assert()
        .code(255)
        .stdout(predicate::str::contains("check_keys"));

    assert!(audit_lines(&log)[0].contains("Cannot read input from stdin"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_utility_is_success() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("active-responses.log");
    let missing = dir.path().join("passwd");

    responder(&log)
        .env("AR_LOCKOUT_PASSWD_PATH", &missing)
        .write_stdin(command_line("delete", "alice"))
        .assert()
        .success();

    let lines = audit_lines(&log);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(&format!(
        "The passwd file '{}' is not accessible: ",
        missing.display()
    )));
    assert!(lines[0].ends_with("(2)"));
}
