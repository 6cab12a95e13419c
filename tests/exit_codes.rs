//! Exit code integration tests for the `nosync` binary.
//!
//! The numeric exit codes are part of the tool's contract with wrapping
//! scripts:
//!
//! | Code | Name    | Description                                      |
//! |------|---------|--------------------------------------------------|
//! |  0   | Ok      | Every path was processed successfully            |
//! |  1   | Failure | At least one path could not be processed         |
//! |  2   | Usage   | Unknown flag, missing operands, or a mechanism   |
//! |      |         | missing from this build                          |

use nosync_core::exit_code::ExitCode;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// Runs the nosync binary with the given arguments and returns the output.
fn run_nosync(args: &[&str]) -> Output {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_nosync"));
    let mut command = Command::new(binary);
    command.args(args);
    command.output().expect("failed to run nosync")
}

/// Asserts that the exit code matches the expected value.
fn assert_exit_code(output: &Output, expected: ExitCode, context: &str) {
    let actual = output.status.code().unwrap_or(-1);
    let expected_i32 = expected.as_i32();

    if actual != expected_i32 {
        eprintln!("=== Exit Code Mismatch ===");
        eprintln!("Context: {context}");
        eprintln!("Expected: {expected_i32} ({})", expected.description());
        eprintln!("Actual:   {actual}");
        eprintln!("=== stdout ===");
        eprintln!("{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("=== stderr ===");
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        panic!("Exit code mismatch for {context}: expected {expected_i32}, got {actual}");
    }
}

// ============================================================================
// Exit Code 0: Success
// ============================================================================

/// Tests that successful operations return exit code 0.
mod exit_code_0_success {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn help_returns_success() {
        let output = run_nosync(&["--help"]);
        assert_exit_code(&output, ExitCode::Ok, "--help");
    }

    #[test]
    fn version_returns_success() {
        let output = run_nosync(&["--version"]);
        assert_exit_code(&output, ExitCode::Ok, "--version");
    }

    #[test]
    fn marking_an_existing_file_returns_success() {
        let tmp = tempdir().expect("create temp dir");
        let target = tmp.path().join("notes");
        fs::write(&target, b"content").expect("write target");

        let output = run_nosync(&[target.to_str().expect("utf-8 path")]);
        assert_exit_code(&output, ExitCode::Ok, "mark existing file");
    }

    #[test]
    fn marking_twice_returns_success() {
        let tmp = tempdir().expect("create temp dir");
        let target = tmp.path().join("notes");
        fs::write(&target, b"content").expect("write target");
        let path = target.to_str().expect("utf-8 path");

        let first = run_nosync(&[path]);
        assert_exit_code(&first, ExitCode::Ok, "first mark");

        let second = run_nosync(&[path]);
        assert_exit_code(&second, ExitCode::Ok, "repeated mark");
    }

    #[test]
    fn dry_run_on_an_existing_file_returns_success() {
        let tmp = tempdir().expect("create temp dir");
        let target = tmp.path().join("notes");
        fs::write(&target, b"content").expect("write target");

        let output = run_nosync(&["-n", target.to_str().expect("utf-8 path")]);
        assert_exit_code(&output, ExitCode::Ok, "dry run on existing file");
    }
}

// ============================================================================
// Exit Code 1: General Failure
// ============================================================================

/// Tests that per-path failures return exit code 1.
mod exit_code_1_failure {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_path_returns_failure() {
        let tmp = tempdir().expect("create temp dir");
        let missing = tmp.path().join("missing");

        let output = run_nosync(&[missing.to_str().expect("utf-8 path")]);
        assert_exit_code(&output, ExitCode::Failure, "mark missing path");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("does not exist"), "stderr was: {stderr}");
        assert!(stderr.contains("missing"), "stderr was: {stderr}");
    }

    #[test]
    fn mixed_batch_returns_failure_but_processes_valid_paths() {
        let tmp = tempdir().expect("create temp dir");
        let missing = tmp.path().join("missing");
        let good = tmp.path().join("good");
        fs::write(&good, b"content").expect("write target");

        let output = run_nosync(&[
            missing.to_str().expect("utf-8 path"),
            good.to_str().expect("utf-8 path"),
        ]);
        assert_exit_code(&output, ExitCode::Failure, "mixed batch");
        assert!(
            tmp.path().join("good.nosync").exists(),
            "the valid path must still be marked"
        );
    }

    #[test]
    fn undo_of_an_unknown_path_returns_failure() {
        let tmp = tempdir().expect("create temp dir");
        let missing = tmp.path().join("never-existed");

        let output = run_nosync(&["-u", missing.to_str().expect("utf-8 path")]);
        assert_exit_code(&output, ExitCode::Failure, "undo unknown path");
    }

    #[test]
    fn marker_name_collision_returns_failure() {
        let tmp = tempdir().expect("create temp dir");
        let target = tmp.path().join("notes");
        fs::write(&target, b"original").expect("write target");
        fs::write(tmp.path().join("notes.nosync"), b"occupied").expect("write collision");

        let output = run_nosync(&["--no-symlink", target.to_str().expect("utf-8 path")]);
        assert_exit_code(&output, ExitCode::Failure, "marker name collision");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("already exists"), "stderr was: {stderr}");
    }
}

// ============================================================================
// Exit Code 2: Usage Error
// ============================================================================

/// Tests that argument problems return exit code 2.
mod exit_code_2_usage {
    use super::*;

    #[test]
    fn unknown_flag_returns_usage_error() {
        let output = run_nosync(&["--definitely-not-a-valid-option"]);
        assert_exit_code(&output, ExitCode::Usage, "unknown flag");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("nosync error:"), "stderr was: {stderr}");
    }

    #[test]
    fn missing_operands_return_usage_error() {
        let output = run_nosync(&[]);
        assert_exit_code(&output, ExitCode::Usage, "no operands");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("missing path operands"),
            "stderr was: {stderr}"
        );
    }

    #[test]
    fn flags_without_operands_return_usage_error() {
        let output = run_nosync(&["-n", "-v"]);
        assert_exit_code(&output, ExitCode::Usage, "flags without operands");
    }

    #[cfg(not(all(unix, feature = "xattr")))]
    #[test]
    fn xattr_flag_returns_usage_error_when_not_built_in() {
        let output = run_nosync(&["--xattr", "anything"]);
        assert_exit_code(&output, ExitCode::Usage, "--xattr without support");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("not supported in this build"),
            "stderr was: {stderr}"
        );
    }
}

// ============================================================================
// Exit Code Enum Verification
// ============================================================================

/// Tests that the ExitCode enum matches the documented contract.
mod exit_code_enum_values {
    use nosync_core::exit_code::{ExitCode, exit_code_description};

    #[test]
    fn exit_codes_match_the_documented_contract() {
        assert_eq!(ExitCode::Ok.as_i32(), 0);
        assert_eq!(ExitCode::Failure.as_i32(), 1);
        assert_eq!(ExitCode::Usage.as_i32(), 2);
    }

    #[test]
    fn as_i32_and_from_i32_roundtrip() {
        for code in [ExitCode::Ok, ExitCode::Failure, ExitCode::Usage] {
            assert_eq!(ExitCode::from_i32(code.as_i32()), Some(code));
        }
    }

    #[test]
    fn from_i32_returns_none_for_unknown() {
        for value in [-1, 3, 23, 255] {
            assert!(ExitCode::from_i32(value).is_none());
        }
    }

    #[test]
    fn all_codes_have_descriptions() {
        for code in [ExitCode::Ok, ExitCode::Failure, ExitCode::Usage] {
            assert!(!code.description().is_empty());
            assert_eq!(exit_code_description(code.as_i32()), code.description());
        }
    }
}
