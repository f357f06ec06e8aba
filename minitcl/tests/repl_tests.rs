//! Binary-level tests: drive the `minitcl` executable the way a user would
//! (piped stdin, `-c`, script files) and check its stdout and exit status.
//!
//! Stdin is not a TTY here, so the REPL runs in batch mode without prompts;
//! `-q -n` suppress the banner and skip any user rc file.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn binary() -> std::path::PathBuf {
    // CARGO_BIN_EXE_minitcl is set by the cargo test infrastructure.
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_minitcl"))
}

/// Pipe `script` into the binary's stdin and collect the result.
fn run_stdin(script: &str) -> Output {
    let mut child = Command::new(binary())
        .args(["-q", "-n"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn minitcl");
    child
        .stdin
        .as_mut()
        .expect("stdin not open")
        .write_all(script.as_bytes())
        .expect("write to stdin");
    child.wait_with_output().expect("wait failed")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ── stdin batch mode ──────────────────────────────────────────────────────────

#[test]
fn puts_reaches_stdout() {
    let out = run_stdin("puts hello\n");
    assert_eq!(stdout_of(&out), "hello\n");
    assert!(out.status.success());
}

#[test]
fn state_persists_across_lines() {
    let out = run_stdin("set x 5\nputs $x\n");
    assert_eq!(stdout_of(&out), "5\n");
}

#[test]
fn open_braces_join_following_lines() {
    let script = "set i 0\n\
                  while {$i < 3} {\n\
                  set i [expr $i + 1]\n\
                  puts tick\n\
                  }\n\
                  puts done\n";
    let out = run_stdin(script);
    assert_eq!(stdout_of(&out), "tick\ntick\ntick\ndone\n");
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let out = run_stdin("nosuch\nputs after\n");
    assert_eq!(
        stdout_of(&out),
        "Error: Could not find procedure 'nosuch'\nafter\n"
    );
    assert!(out.status.success());
}

#[test]
fn definitions_survive_an_error() {
    let out = run_stdin("proc hi {} {return hello}\nnosuch\nputs [hi]\n");
    assert_eq!(
        stdout_of(&out),
        "Error: Could not find procedure 'nosuch'\nhello\n"
    );
}

// ── -c command mode ───────────────────────────────────────────────────────────

#[test]
fn dash_c_evaluates_and_exits() {
    let out = Command::new(binary())
        .args(["-q", "-n", "-c", "puts [expr 6 * 7]"])
        .output()
        .expect("failed to run minitcl");
    assert_eq!(stdout_of(&out), "42\n");
    assert!(out.status.success());
}

#[test]
fn dash_c_error_exits_nonzero() {
    let out = Command::new(binary())
        .args(["-q", "-n", "-c", "error boom"])
        .output()
        .expect("failed to run minitcl");
    assert_eq!(stdout_of(&out), "Error: boom\n");
    assert!(!out.status.success());
}

// ── Script file mode ──────────────────────────────────────────────────────────

#[test]
fn script_file_runs_in_batch() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(
        b"# count to five\n\
          set i 0\n\
          while {$i < 5} {set i [expr $i + 1]}\n\
          puts $i\n",
    )
    .expect("write script");

    let out = Command::new(binary())
        .args(["-q", "-n"])
        .arg(file.path())
        .output()
        .expect("failed to run minitcl");
    assert_eq!(stdout_of(&out), "5\n");
    assert!(out.status.success());
}

#[test]
fn failing_script_exits_nonzero() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"puts before\nerror halt\nputs after\n")
        .expect("write script");

    let out = Command::new(binary())
        .args(["-q", "-n"])
        .arg(file.path())
        .output()
        .expect("failed to run minitcl");
    assert_eq!(stdout_of(&out), "before\nError: halt\n");
    assert!(!out.status.success());
}

#[test]
fn missing_script_is_an_error() {
    let out = Command::new(binary())
        .args(["-q", "-n", "/no/such/script.tcl"])
        .output()
        .expect("failed to run minitcl");
    assert!(!out.status.success());
}

// ── Bad usage ─────────────────────────────────────────────────────────────────

#[test]
fn unknown_flag_prints_usage() {
    let out = Command::new(binary())
        .arg("-z")
        .output()
        .expect("failed to run minitcl");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}
