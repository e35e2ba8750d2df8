//! End-to-end tests of the `machine` binary.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt as _;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_DOCKER_MACHINE: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_DM_LOG"
case "$1" in
  ls)
    printf 'dev,%%2A,true,false,virtualbox,Running,tcp%%3A%%2F%%2F192.168.99.100%%3A2376,,,v17.05.0-ce,1534000\n'
    printf 'staging,-,false,false,amazonec2,Stopped,,,,Unknown,0\n'
    ;;
  status)
    if [ "$2" = "dev" ]; then echo Running; else echo "Host does not exist: \"$2\"" >&2; exit 1; fi
    ;;
  start)
    echo "Machine \"$2\" is already running." >&2
    exit 1
    ;;
  stop)
    echo "Stopping \"$2\"..."
    ;;
  inspect)
    echo "{\"Name\":\"$2\",\"DriverName\":\"virtualbox\",\"Driver\":{\"IPAddress\":\"192.168.99.100\"}}"
    ;;
  env)
    echo 'export DOCKER_HOST="tcp://192.168.99.100:2376"'
    echo '# Run this command to configure your shell:'
    ;;
  ssh)
    shift 2
    echo "ran: $*"
    ;;
  create)
    echo "Docker is up and running!"
    ;;
  *)
    echo "unknown command $1" >&2
    exit 2
    ;;
esac
"#;

/// A temp dir holding the fake `docker-machine` and its call log.
struct FakeTool {
    dir: TempDir,
}

impl FakeTool {
    fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let script = dir.path().join("docker-machine");
        std::fs::write(&script, FAKE_DOCKER_MACHINE).expect("write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        Self { dir }
    }

    fn log(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("calls.log")).unwrap_or_default()
    }

    /// `machine` with the fake tool first on `PATH` and `dev` as the default.
    fn machine(&self) -> Command {
        let mut cmd = machine_with_path(self.dir.path());
        cmd.env("FAKE_DM_LOG", self.dir.path().join("calls.log"));
        cmd.env("DOCKER_MACHINE_NAME", "dev");
        cmd
    }
}

fn machine_with_path(dir: &Path) -> Command {
    let path = std::env::var("PATH").unwrap_or_default();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("machine"));
    cmd.env("NO_COLOR", "1")
        .env("PATH", format!("{}:{path}", dir.display()))
        .env_remove("DOCKER_MACHINE_NAME")
        .env_remove("DOCKER_TOOLBOX_INSTALL_PATH")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// --- Help ---

#[test]
fn test_no_args_shows_help() {
    let tool = FakeTool::new();
    tool.machine()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Drive docker-machine hosts"));
}

// --- ls ---

#[test]
fn test_ls_renders_table() {
    let tool = FakeTool::new();
    tool.machine()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("tcp://192.168.99.100:2376"))
        .stdout(predicate::str::contains("staging"));
}

#[test]
fn test_ls_json_decodes_fields() {
    let tool = FakeTool::new();
    let output = tool
        .machine()
        .args(["--json", "ls", "-t", "5"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let machines = stdout_json(&output);
    assert_eq!(machines[0]["name"], "dev");
    assert_eq!(machines[0]["active"], "*");
    assert_eq!(machines[0]["activeHost"], true);
    assert_eq!(machines[0]["state"], "running");
    assert_eq!(machines[1]["name"], "staging");
    assert_eq!(machines[1]["dockerVersion"], serde_json::Value::Null);
    assert!(tool.log().lines().next().expect("ls logged").ends_with("-t 5"));
}

#[test]
fn test_ls_inspect_merges_details() {
    let tool = FakeTool::new();
    let output = tool
        .machine()
        .args(["--json", "ls", "--inspect"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let machines = stdout_json(&output);
    assert_eq!(machines[0]["driver"]["ipAddress"], "192.168.99.100");
    assert_eq!(machines[1]["name"], "staging");
    assert!(tool.log().contains("inspect staging"));
}

// --- status / start / stop ---

#[test]
fn test_status_uses_default_machine_name() {
    let tool = FakeTool::new();
    tool.machine()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev  running"));
}

#[test]
fn test_status_unknown_machine_fails() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["status", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Host does not exist"));
}

#[test]
fn test_status_failure_in_json_mode_prints_error_object() {
    let tool = FakeTool::new();
    let output = tool
        .machine()
        .args(["--json", "status", "nope"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let error = stdout_json(&output);
    assert_eq!(error["error"], true);
    assert_eq!(error["code"], "process_error");
}

#[test]
fn test_start_when_already_running_succeeds() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["start", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine dev started."));
}

#[test]
fn test_stop_json() {
    let tool = FakeTool::new();
    let output = tool
        .machine()
        .args(["--json", "stop"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["name"], "dev");
    assert_eq!(result["result"], "stopped");
}

// --- env / ssh / inspect / create ---

#[test]
fn test_env_parse_prints_variables() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["env", "--parse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCKER_HOST=tcp://192.168.99.100:2376"));
    assert!(tool.log().contains("env --shell bash dev"));
}

#[test]
fn test_ssh_runs_command_after_separator() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["ssh", "dev", "--", "uname", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ran: uname -a\n"));
}

#[test]
fn test_ssh_start_starts_machine_first() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["ssh", "--start", "--", "uptime"])
        .assert()
        .success();
    let log = tool.log();
    let calls: Vec<_> = log.lines().collect();
    assert_eq!(calls, ["start dev", "ssh dev uptime"]);
}

#[test]
fn test_inspect_prints_camel_case_json() {
    let tool = FakeTool::new();
    let output = tool.machine().arg("inspect").output().expect("runs");
    assert!(output.status.success());
    let details = stdout_json(&output);
    assert_eq!(details["name"], "dev");
    assert_eq!(details["driverName"], "virtualbox");
}

#[test]
fn test_create_passes_options() {
    let tool = FakeTool::new();
    tool.machine()
        .args(["create", "--driver", "virtualbox", "-o", "virtualbox-memory=2048", "box"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Docker is up and running!"));
    assert!(tool
        .log()
        .contains("create --driver virtualbox --virtualbox-memory 2048 box"));
}

// --- Missing tool ---

#[test]
fn test_missing_docker_machine_reports_spawn_failure() {
    let empty = TempDir::new().expect("tempdir");
    let mut cmd = machine_with_path(empty.path());
    cmd.env("PATH", empty.path())
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("docker-machine"));
}
