//! End-to-end checks for the backend skeleton generator.

use ocdev::scaffold::{Scaffold, STRUCTURE};
use std::fs;
use tempfile::TempDir;

fn count_tree(base: &std::path::Path) -> (usize, usize) {
    let mut folders = 0;
    let mut files = 0;
    for entry in fs::read_dir(base).unwrap() {
        let entry = entry.unwrap();
        assert!(entry.path().is_dir(), "unexpected top-level file");
        folders += 1;
        for file in fs::read_dir(entry.path()).unwrap() {
            assert!(file.unwrap().path().is_file());
            files += 1;
        }
    }
    (folders, files)
}

#[test]
fn test_single_run_creates_seven_folders_and_twenty_one_files() {
    let temp = TempDir::new().unwrap();
    Scaffold::new(temp.path()).create().unwrap();

    assert_eq!(count_tree(temp.path()), (7, 21));
}

#[test]
fn test_every_placeholder_is_one_comment_line() {
    let temp = TempDir::new().unwrap();
    Scaffold::new(temp.path()).create().unwrap();

    for (folder, file_names) in STRUCTURE {
        for name in *file_names {
            let contents = fs::read_to_string(temp.path().join(folder).join(name)).unwrap();
            let stem = name.split('.').next().unwrap();
            assert_eq!(contents, format!("// {stem} module\n"));
            assert_eq!(contents.lines().count(), 1);
        }
    }
}

#[test]
fn test_second_run_leaves_contents_unchanged() {
    let temp = TempDir::new().unwrap();
    let scaffold = Scaffold::new(temp.path());
    scaffold.create().unwrap();

    let edited = temp.path().join("services").join("cacheService.js");
    fs::write(&edited, "module.exports = new Map();\n").unwrap();

    scaffold.create().unwrap();

    assert_eq!(
        fs::read_to_string(&edited).unwrap(),
        "module.exports = new Map();\n"
    );
    assert_eq!(count_tree(temp.path()), (7, 21));
}
