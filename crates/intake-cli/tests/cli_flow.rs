//! End-to-end runs of the intake binary: scripted stdin sessions against a
//! scratch working directory. EOF on stdin is the external shutdown, so each
//! script ends by closing the pipe and the binary must exit 0.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_intake"))
}

fn scratch_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "intake_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn run_session(dir: &Path, script: &str) -> Output {
    let mut child = Command::new(bin())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn intake");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(script.as_bytes())
        .expect("write script");
    // The stdin handle drops here, so the binary sees EOF after the script.
    child.wait_with_output().expect("wait for intake")
}

#[test]
fn test_confirmed_session_is_persisted() {
    let dir = scratch_dir("confirm");
    let output = run_session(
        &dir,
        "Ada\nLovelace\n07/21/1993\n2\nWilliam\nKing\n02/21/1985\ny\n",
    );
    assert!(output.status.success());

    let stored =
        std::fs::read_to_string(dir.join("records/records.jsonl")).expect("records file");
    assert_eq!(stored.lines().count(), 1);
    assert!(stored.contains("\"first_name\":\"Ada\""));
    assert!(stored.contains("\"surname\":\"King\""));
    assert!(stored.contains("\"person_id\":0"));
}

#[test]
fn test_confirmed_restart_discards_the_session() {
    let dir = scratch_dir("restart");
    let output = run_session(&dir, "Ada\nLovelace\nr\ny\n");
    assert!(output.status.success());

    assert!(!dir.join("records/records.jsonl").exists());
}

#[test]
fn test_rejected_input_reprompts_the_same_field() {
    let dir = scratch_dir("reject");
    let output = run_session(&dir, "Ada1\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name must only contain letters."));
    assert!(!dir.join("records/records.jsonl").exists());
}

#[test]
fn test_config_file_overrides_name_bounds() {
    let dir = scratch_dir("config");
    std::fs::create_dir_all(dir.join("data")).expect("create data dir");
    std::fs::write(dir.join("data/config.txt"), "Name_MaxLength = 5\n").expect("write config");

    let output = run_session(&dir, "Maximilian\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no more than 5 characters"));
}
