use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use jsoncompact::compression::compress_all_to;
use jsoncompact::parser::directory::find_json_files;
use jsoncompact::{CompactConfig, CompactError};

fn run(dir: &TempDir) -> String {
    let mut out = Vec::new();
    compress_all_to(dir.path(), &CompactConfig::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_find_json_files_recursive() {
    let td = TempDir::new().unwrap();
    let sub = td.path().join("sub/deeper");
    fs::create_dir_all(&sub).unwrap();

    fs::write(td.path().join("a.json"), "{\"name\": \"A\"}\n").unwrap();
    fs::write(sub.join("b.json"), "{\"name\": \"B\"}\n").unwrap();
    fs::write(td.path().join("notes.txt"), "{\"name\": \"C\"}\n").unwrap();
    fs::write(td.path().join("upper.JSON"), "{}").unwrap();

    let files = find_json_files(td.path(), &CompactConfig::default()).unwrap();
    assert_eq!(files, vec![td.path().join("a.json"), sub.join("b.json")]);
}

#[test]
fn test_non_json_files_never_modified() {
    let td = TempDir::new().unwrap();
    let notes = td.path().join("notes.txt");
    fs::write(&notes, "{ \"looks\": \"like json\" }\n").unwrap();
    fs::write(td.path().join("a.json"), "{ \"x\": 1 }").unwrap();

    let stdout = run(&td);

    assert_eq!(fs::read_to_string(&notes).unwrap(), "{ \"looks\": \"like json\" }\n");
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn test_report_lines_in_order() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("a.json"), "{ \"x\": 1 }").unwrap();
    fs::write(td.path().join("b.json"), "{invalid}").unwrap();

    let stdout = run(&td);

    let a = td.path().join("a.json");
    let b = td.path().join("b.json");
    let expected = format!(
        "Successfully compressed: {a}\n{a} is valid.\nError decoding JSON in {b}: key must be a string at line 1, column 2\n",
        a = a.display(),
        b = b.display(),
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_malformed_file_does_not_stop_walk() {
    let td = TempDir::new().unwrap();
    let nested = td.path().join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(td.path().join("a_bad.json"), "{invalid}").unwrap();
    fs::write(nested.join("good.json"), "[ 1, 2, 3 ]").unwrap();

    let stdout = run(&td);

    assert_eq!(fs::read_to_string(td.path().join("a_bad.json")).unwrap(), "{invalid}");
    assert_eq!(fs::read_to_string(nested.join("good.json")).unwrap(), "[1,2,3]");
    assert!(stdout.contains("Error decoding JSON in"));
    assert!(stdout.contains("good.json is valid."));
}

#[test]
fn test_empty_directory_prints_nothing() {
    let td = TempDir::new().unwrap();
    assert_eq!(run(&td), "");
}

#[test]
fn test_missing_root_fails() {
    let td = TempDir::new().unwrap();
    let mut out = Vec::new();
    let missing: PathBuf = td.path().join("missing");
    let err = compress_all_to(&missing, &CompactConfig::default(), &mut out).unwrap_err();
    assert!(matches!(err, CompactError::Walk { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_invalid_config_rejected() {
    let td = TempDir::new().unwrap();
    let config = CompactConfig {
        suffix: String::new(),
        ..CompactConfig::default()
    };
    let mut out = Vec::new();
    let err = compress_all_to(td.path(), &config, &mut out).unwrap_err();
    assert!(matches!(err, CompactError::Configuration { .. }));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_not_reported() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("ok.json"), "{ \"ok\": true }").unwrap();
    std::os::unix::fs::symlink(td.path().join("missing.json"), td.path().join("x.json")).unwrap();

    let stdout = run(&td);

    let ok = td.path().join("ok.json");
    assert_eq!(
        stdout,
        format!("Successfully compressed: {ok}\n{ok} is valid.\n", ok = ok.display())
    );
}
