//! CLI Integration Tests
//!
//! Run the built `txmerkle` binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run txmerkle and return (stdout, success)
fn run_txmerkle(args: &[&str], stdin: Option<&str>) -> (String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_txmerkle"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to execute txmerkle");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.success(),
    )
}

const ROOT_12: &str = "6deb126872810c37757961577a780186e3999860be14dc3e06b69d6a19442f11";
const ROOT_123: &str = "c4742393c2649ed6fa89e31dc54c3e8b4e99d33ed3040845ea86ab94793a9fab";

#[test]
fn test_cli_prints_tree() {
    let (stdout, success) = run_txmerkle(&["Transaction1", "Transaction2"], None);

    assert!(success);
    assert!(stdout.contains("Merkle Tree (2 leaves, depth 2):"));
    assert!(stdout.contains(&format!("\n{}\n", ROOT_12)));
    assert!(stdout.contains(&format!("  {}\n", hex::encode("Transaction1"))));
    assert!(stdout.contains(&format!("  {}\n", hex::encode("Transaction2"))));
}

#[test]
fn test_cli_quiet() {
    let (stdout, success) = run_txmerkle(&["-q", "Transaction1", "Transaction2", "Transaction3"], None);

    assert!(success);
    assert_eq!(stdout, format!("root: {}\ndepth: 3\n", ROOT_123));
}

#[test]
fn test_cli_source_defaults_count_towards_depth() {
    let (stdout, success) = run_txmerkle(&["-q", "--with-source-defaults", "Transaction3"], None);

    assert!(success);
    assert_eq!(stdout, format!("root: {}\ndepth: 3\n", ROOT_123));
}

#[test]
fn test_cli_default_leaves() {
    let (stdout, success) = run_txmerkle(
        &["-q", "--default-leaf", "Transaction1", "--default-leaf", "Transaction2", "Transaction3"],
        None,
    );
    assert!(success);
    assert_eq!(stdout, format!("root: {}\ndepth: 3\n", ROOT_123));

    // explicit default leaves follow the source pair
    let (stdout, success) = run_txmerkle(
        &["-q", "--with-source-defaults", "--default-leaf", "Transaction3"],
        None,
    );
    assert!(success);
    assert_eq!(stdout, format!("root: {}\ndepth: 3\n", ROOT_123));
}

#[test]
fn test_cli_reads_stdin() {
    let (stdout, success) = run_txmerkle(
        &["-q", "--stdin", "Transaction1"],
        Some("Transaction2\nTransaction3\n"),
    );

    assert!(success);
    assert_eq!(stdout, format!("root: {}\ndepth: 3\n", ROOT_123));
}

#[test]
fn test_cli_find() {
    let (stdout, success) = run_txmerkle(
        &["-q", "--find", "Transaction2", "Transaction1", "Transaction2"],
        None,
    );
    assert!(success);
    assert!(stdout.contains("Transaction Transaction2 found in the merkle tree."));
    assert!(stdout.contains("Data: Transaction2"));

    let (stdout, success) = run_txmerkle(
        &["-q", "--find", "Transaction9", "Transaction1", "Transaction2"],
        None,
    );
    assert!(success);
    assert!(stdout.contains("Transaction Transaction9 does not exist in the merkle tree."));
}

#[test]
fn test_cli_find_hex() {
    let (stdout, success) = run_txmerkle(
        &["-q", "--find-hex", ROOT_12, "Transaction1", "Transaction2"],
        None,
    );
    assert!(success);
    assert!(stdout.contains("found in the merkle tree."));

    let (_, success) = run_txmerkle(&["--find-hex", "zz", "Transaction1"], None);
    assert!(!success, "invalid hex should fail");
}

#[test]
fn test_cli_empty_input_is_a_message() {
    let (stdout, success) = run_txmerkle(&[], None);

    assert!(success);
    assert!(stdout.contains("Nothing to build: cannot build a merkle tree from zero leaves"));
}
