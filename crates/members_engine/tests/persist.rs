use std::fs;

use members_engine::{ensure_output_dir, save_html, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir_with_parents() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("a").join("b");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(fs::read_dir(&new_dir).unwrap().count(), 0);
}

#[test]
fn save_html_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("main.html");

    save_html("<table>first, longer content</table>", &target).unwrap();
    let written = save_html("<table>é</table>", &target).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "<table>é</table>");
}

#[test]
fn save_html_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("missing").join("main.html");

    let err = save_html("x", &target).unwrap_err();
    match err {
        PersistError::Io { path, .. } => assert_eq!(path, target),
        other => panic!("unexpected error: {other:?}"),
    }
}
