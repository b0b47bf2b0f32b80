/*!
 * Integration tests for the treedump binary
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn treedump(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treedump"))
        .current_dir(cwd)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_writes_all_txt_in_working_directory() {
    let project = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    fs::write(project.path().join("a.txt"), "hello").unwrap();
    fs::create_dir(project.path().join("b")).unwrap();
    fs::write(project.path().join("b").join("c.txt"), "world").unwrap();

    let root = project.path().to_string_lossy().into_owned();
    let output = treedump(cwd.path(), &["--quiet", &root]);
    assert!(output.status.success(), "{:?}", output);

    let document = fs::read_to_string(cwd.path().join("all.txt")).unwrap();
    let expected = format!(
        "content of file: {root}/a.txt\n\n```\nhello\n```\ncontent of file: {root}/b/c.txt\n\n```\nworld\n```\n"
    );
    assert_eq!(document, expected);
}

#[test]
fn test_default_root_skips_own_output() {
    let cwd = tempdir().unwrap();
    fs::write(cwd.path().join("main.rs"), "fn main() {}").unwrap();

    for _ in 0..2 {
        let output = treedump(cwd.path(), &["--quiet"]);
        assert!(output.status.success(), "{:?}", output);
    }

    let document = fs::read_to_string(cwd.path().join("all.txt")).unwrap();
    assert_eq!(
        document,
        "content of file: ./main.rs\n\n```\nfn main() {}\n```\n"
    );
}

#[test]
fn test_invalid_root_fails_without_output() {
    let cwd = tempdir().unwrap();

    let output = treedump(cwd.path(), &["--quiet", "no-such-dir"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid root directory"));
    assert!(!cwd.path().join("all.txt").exists());
}

#[test]
fn test_read_error_policies() {
    let project = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    fs::write(project.path().join("bad.bin"), [0xffu8, 0x00, 0xfe]).unwrap();
    fs::write(project.path().join("good.txt"), "ok").unwrap();
    let root = project.path().to_string_lossy().into_owned();

    let skip = treedump(cwd.path(), &["--quiet", &root, "skip.txt"]);
    assert!(skip.status.success(), "{:?}", skip);
    let document = fs::read_to_string(cwd.path().join("skip.txt")).unwrap();
    assert!(document.contains("good.txt"));
    assert!(!document.contains("bad.bin"));

    let abort = treedump(
        cwd.path(),
        &["--quiet", "--on-read-error", "abort", &root, "abort.txt"],
    );
    assert!(!abort.status.success());
    assert!(String::from_utf8_lossy(&abort.stderr).contains("bad.bin"));
    // bad.bin sorts first, so nothing was written before the abort
    assert_eq!(fs::read(cwd.path().join("abort.txt")).unwrap().len(), 0);
}

#[test]
fn test_report_is_printed() {
    let project = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    fs::write(project.path().join("lib.rs"), "pub fn f() {}\n").unwrap();
    let root = project.path().to_string_lossy().into_owned();

    let output = treedump(cwd.path(), &[&root]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DUMP COMPLETE"));
    assert!(stdout.contains("lib.rs"));
}
