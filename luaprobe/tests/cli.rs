use assert_cmd::Command;
use predicates::prelude::*;

fn luaprobe() -> Command {
    let mut cmd = Command::cargo_bin("luaprobe").expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_run_prints_greeting() {
    luaprobe()
        .assert()
        .code(0)
        .stdout("Hello from Lua!\n")
        .stderr("");
}

#[test]
fn malformed_chunk_reports_error_and_exits_zero() {
    luaprobe()
        .arg("--eval")
        .arg("print('Hello from Lua!)")
        .assert()
        .code(0)
        .stdout("")
        .stderr(
            predicate::str::starts_with("Error: [string \"print('Hello from Lua!)\"]:1: ")
                .and(predicate::str::contains("unfinished string"))
                .and(predicate::function(|s: &str| s.lines().count() == 1)),
        );
}

#[test]
fn runtime_error_is_one_line_and_exits_zero() {
    luaprobe()
        .arg("--eval")
        .arg("error('boom')")
        .assert()
        .code(0)
        .stdout("")
        .stderr("Error: [string \"error('boom')\"]:1: boom\n");
}

#[test]
fn repeated_runs_are_identical() {
    let first = luaprobe().assert().code(0).get_output().clone();
    let second = luaprobe().assert().code(0).get_output().clone();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}
