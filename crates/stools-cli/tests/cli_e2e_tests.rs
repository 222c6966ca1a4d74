//! CLI end-to-end tests that invoke the compiled `stools` binary.
//!
//! Each test points the binary at a scratch install root with `--root`, except
//! where the default (the executable's own directory) is under test.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// Get a Command for the stools binary
fn stools_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stools"))
}

/// A Command bound to `root` via `--root`.
fn stools_in(root: &assert_fs::TempDir) -> Command {
    let mut cmd = stools_cmd();
    cmd.arg("--root").arg(root.path());
    cmd
}

/// Create `<src>/<name>/tool` with the given script.
fn tool_source(src: &assert_fs::TempDir, name: &str, script: &str) -> String {
    src.child(format!("{name}/tool")).write_str(script).unwrap();
    src.child(name).path().to_string_lossy().into_owned()
}

// ============================================================================
// Usage and listing
// ============================================================================

#[test]
fn test_no_args_shows_usage_and_fails() {
    let root = assert_fs::TempDir::new().unwrap();

    stools_in(&root)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("rm <toolname>"))
        .stdout(predicate::str::contains("add <toolpath> <description>"))
        .stdout(predicate::str::contains("Available tools:").not());
}

#[test]
fn test_listing_follows_registry_order() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("conf.yaml")
        .write_str("b: bee tool\na: ant tool\nc: cat tool\n")
        .unwrap();

    let output = stools_in(&root).assert().code(1).get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let listing: Vec<&str> = stdout
        .split("Available tools:\n")
        .nth(1)
        .expect("listing section")
        .lines()
        .map(str::trim)
        .collect();
    assert_eq!(
        listing,
        vec![
            "b                    \tbee tool",
            "a                    \tant tool",
            "c                    \tcat tool",
        ]
    );
}

#[test]
fn test_reserved_words_alone_show_usage() {
    let root = assert_fs::TempDir::new().unwrap();

    for args in [vec!["rm"], vec!["add"], vec!["add", "x"]] {
        stools_in(&root)
            .args(&args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_unknown_tool_shows_usage() {
    let root = assert_fs::TempDir::new().unwrap();

    stools_in(&root)
        .args(["nope", "a", "b", "c"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("version: "));
}

#[test]
fn test_corrupt_registry_is_reported() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("conf.yaml").write_str("tools: [broken\n").unwrap();

    stools_in(&root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("YAML"));
}

#[test]
fn test_version_flag() {
    stools_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stools"));
}

// ============================================================================
// add / rm
// ============================================================================

#[test]
fn test_add_registers_tool() {
    let src = assert_fs::TempDir::new().unwrap();
    let root = assert_fs::TempDir::new().unwrap();
    let toolpath = tool_source(&src, "hello", "#!/bin/sh\necho hello\n");

    stools_in(&root)
        .args(["add", &toolpath, "Says hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    root.child("conf.yaml").assert("hello: Says hello\n");
    root.child("module/hello/tool").assert("#!/bin/sh\necho hello\n");
}

#[test]
fn test_add_without_tool_file_fails() {
    let src = assert_fs::TempDir::new().unwrap();
    let root = assert_fs::TempDir::new().unwrap();
    src.child("empty/readme.txt").write_str("nothing to run").unwrap();
    let toolpath = src.child("empty").path().to_string_lossy().into_owned();

    stools_in(&root)
        .args(["add", &toolpath, "Broken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tool file not exists"));

    root.child("conf.yaml").assert(predicate::path::missing());
    root.child("module").assert(predicate::path::missing());
}

#[test]
fn test_rm_removes_tool_silently() {
    let src = assert_fs::TempDir::new().unwrap();
    let root = assert_fs::TempDir::new().unwrap();
    let toolpath = tool_source(&src, "hello", "#!/bin/sh\n");
    stools_in(&root).args(["add", &toolpath, "d"]).assert().success();

    stools_in(&root)
        .args(["rm", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    root.child("module/hello").assert(predicate::path::missing());
    let registry = std::fs::read_to_string(root.child("conf.yaml").path()).unwrap();
    assert!(!registry.contains("hello"), "registry still lists hello: {registry}");
}

#[test]
fn test_rm_unknown_tool_is_noop() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("conf.yaml").write_str("keep: me\n").unwrap();

    stools_in(&root).args(["rm", "ghost"]).assert().success();

    root.child("conf.yaml").assert("keep: me\n");
}

// ============================================================================
// Running tools
// ============================================================================

#[cfg(unix)]
mod unix {
    use super::*;

    const ECHO_ARGS: &str = "#!/bin/sh\nfor a in \"$@\"; do echo \"[$a]\"; done\n";

    #[test]
    fn test_run_echoes_absolute_command_line_first() {
        let src = assert_fs::TempDir::new().unwrap();
        let root = assert_fs::TempDir::new().unwrap();
        let toolpath = tool_source(&src, "echoargs", ECHO_ARGS);
        stools_in(&root).args(["add", &toolpath, "d"]).assert().success();

        let output = stools_in(&root)
            .args(["echoargs", "hello world", "plain"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(output).unwrap();

        let first = stdout.lines().next().unwrap();
        assert!(first.starts_with('/'), "not absolute: {first}");
        assert!(
            first.ends_with("module/echoargs/tool \"hello world\" plain"),
            "unexpected echo: {first}"
        );
        assert!(stdout.ends_with("[hello]\n[world]\n[plain]\n"), "got: {stdout}");
    }

    #[test]
    fn test_exact_args_keeps_whitespace_argument() {
        let src = assert_fs::TempDir::new().unwrap();
        let root = assert_fs::TempDir::new().unwrap();
        let toolpath = tool_source(&src, "echoargs", ECHO_ARGS);
        stools_in(&root).args(["add", &toolpath, "d"]).assert().success();

        stools_in(&root)
            .args(["--exact-args", "echoargs", "hello world"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("[hello world]\n"));
    }

    #[test]
    fn test_tool_flags_reach_the_tool() {
        let src = assert_fs::TempDir::new().unwrap();
        let root = assert_fs::TempDir::new().unwrap();
        let toolpath = tool_source(&src, "echoargs", ECHO_ARGS);
        stools_in(&root).args(["add", &toolpath, "d"]).assert().success();

        stools_in(&root)
            .args(["echoargs", "--help", "-v"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("[--help]\n[-v]\n"));
    }

    #[test]
    fn test_failing_tool_exits_one_with_stderr() {
        let src = assert_fs::TempDir::new().unwrap();
        let root = assert_fs::TempDir::new().unwrap();
        let toolpath = tool_source(
            &src,
            "broken",
            "#!/bin/sh\necho partial\necho 'disk on fire' >&2\nexit 3\n",
        );
        stools_in(&root).args(["add", &toolpath, "d"]).assert().success();

        stools_in(&root)
            .arg("broken")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("partial"))
            .stderr(predicate::str::contains("disk on fire"));
    }

    #[test]
    fn test_default_root_is_executable_directory() {
        let install = assert_fs::TempDir::new().unwrap();
        let binary = install.child("stools");
        std::fs::copy(env!("CARGO_BIN_EXE_stools"), binary.path()).unwrap();

        let src = assert_fs::TempDir::new().unwrap();
        let toolpath = tool_source(&src, "echoargs", ECHO_ARGS);

        Command::new(binary.path())
            .args(["add", &toolpath, "Echo arguments"])
            .assert()
            .success();
        install.child("conf.yaml").assert("echoargs: Echo arguments\n");

        Command::new(binary.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("echoargs"))
            .stdout(predicate::str::contains("Echo arguments"));

        Command::new(binary.path())
            .args(["echoargs", "x"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("[x]\n"));
    }
}
