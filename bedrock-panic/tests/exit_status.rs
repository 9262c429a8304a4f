//! End-to-end reporter test: a child process panics three call levels deep
//! and the parent asserts on its exit status and report.
//!
//! The child is this same test executable, re-invoked with an environment
//! marker and filtered down to [`test_child_entry_point`]. That keeps the
//! panicking call chain in a real, separately-running process, which is the
//! only way to observe `process::exit`.

use std::process::Command;

const CHILD_ENV: &str = "BEDROCK_PANIC_EXIT_CHILD";

#[inline(never)]
fn level_three() {
    bedrock_panic::panic_with_code("boom", 2);
}

#[inline(never)]
fn level_two() {
    level_three();
}

#[inline(never)]
fn level_one() {
    level_two();
}

#[test]
fn test_child_entry_point() {
    // No-op in the parent run; the panicking child when re-invoked.
    if std::env::var_os(CHILD_ENV).is_some() {
        level_one();
    }
}

#[test]
fn test_reporter_exit_status_and_frame_lines() {
    let exe = std::env::current_exe().expect("test executable path");
    let output = Command::new(exe)
        .args(["--exact", "test_child_entry_point", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to spawn child test process");

    assert_eq!(output.status.code(), Some(2), "child must exit with the requested code");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("panic: boom"),
        "missing panic header in child stderr:\n{stderr}"
    );

    // Frame entries: "N: <symbol> +0x<offset>" followed by an ip/sp line.
    let frame_line = regex::Regex::new(r"(?m)^(\d+): \S.* \+0x[0-9a-f]+$").unwrap();
    let pointer_line = regex::Regex::new(r"(?m)^    ip = 0x[0-9a-f]+, sp = 0x[0-9a-f]+$").unwrap();

    let sequence: Vec<usize> = frame_line
        .captures_iter(&stderr)
        .map(|caps| caps[1].parse().unwrap())
        .collect();

    assert!(
        sequence.len() >= 3,
        "expected at least 3 frame entries for a 3-level call chain, got {}:\n{stderr}",
        sequence.len()
    );
    for (index, number) in sequence.iter().enumerate() {
        assert_eq!(*number, index + 1, "sequence numbers must increase from 1");
    }
    assert_eq!(pointer_line.find_iter(&stderr).count(), sequence.len());

    // The innermost frame is the reporter's caller, not the reporter.
    assert!(
        stderr.contains("level_three"),
        "innermost caller missing from trace:\n{stderr}"
    );
    assert!(!stderr.contains("bedrock_panic::panic_with_code"));
}
