//! Search scenarios over a small fixture tree.

use finder::{directory_hash, find, find_directories, find_files, in_dirs, Finder};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn setup_test_dir() -> TempDir {
    let dir = tempdir().unwrap();
    for file in [
        "test1.txt",
        "test2.go",
        "subdir/test3.md",
        "subdir/test4.go",
        "subdir/nested/test5.txt",
    ] {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
    dir
}

#[test]
fn test_find_files() {
    let dir = setup_test_dir();
    let files = Finder::new().in_dirs([dir.path()]).find_files(["*.go"]).get();

    assert_eq!(files.len(), 2);
    assert!(files.contains_key(&dir.path().join("test2.go")));
    assert!(files.contains_key(&dir.path().join("subdir/test4.go")));
    assert!(files.values().all(|entry| !entry.is_dir));
}

#[test]
fn test_find_directories() {
    let dir = setup_test_dir();
    let dirs = Finder::new()
        .in_dirs([dir.path()])
        .find_directories(["*"])
        .get();

    assert!(dirs.len() >= 2);
    assert!(dirs.contains_key(&dir.path().join("subdir")));
    assert!(dirs.contains_key(&dir.path().join("subdir/nested")));
    assert!(dirs.values().all(|entry| entry.is_dir));
}

#[test]
fn test_exclude_files() {
    let dir = setup_test_dir();
    let files = Finder::new()
        .in_dirs([dir.path()])
        .find_files(["*.txt"])
        .exclude(["test1.txt"])
        .get();

    assert_eq!(files.len(), 1);
    let entry = &files[&dir.path().join("subdir/nested/test5.txt")];
    assert_eq!(entry.name, "test5");
    assert_eq!(entry.extension, ".txt");
}

#[test]
fn test_exclude_beats_include() {
    let dir = setup_test_dir();
    let all = Finder::new()
        .in_dirs([dir.path()])
        .find(["*"])
        .exclude(["*.go", "nested"])
        .get();

    for path in all.keys() {
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(!name.ends_with(".go"));
        assert_ne!(name, "nested");
    }
    // Excluding a directory doesn't hide what's inside it.
    assert!(all.contains_key(&dir.path().join("subdir/nested/test5.txt")));
}

#[test]
fn test_find_all() {
    let dir = setup_test_dir();
    let all = Finder::new().in_dirs([dir.path()]).find(["*"]).get();

    // Five files, two subdirectories and the root itself.
    assert_eq!(all.len(), 8);
    assert!(all.contains_key(dir.path()));
}

#[test]
fn test_empty_result() {
    let dir = setup_test_dir();
    let files = Finder::new()
        .in_dirs([dir.path()])
        .find_files(["*.cpp"])
        .get();
    assert!(files.is_empty());
}

#[test]
fn test_global_find_functions() {
    let dir = setup_test_dir();

    assert!(find(["*"]).in_dirs([dir.path()]).get().len() >= 5);
    assert_eq!(find_files(["*.txt"]).in_dirs([dir.path()]).get().len(), 2);
    assert!(find_directories(["*"]).in_dirs([dir.path()]).get().len() >= 2);
    assert_eq!(in_dirs([dir.path()]).find_files(["*.go"]).get().len(), 2);
}

#[test]
fn test_search_with_invalid_dir() {
    let files = in_dirs(["/this/path/does/not/exist"]).find(["*"]).get();
    assert!(files.is_empty());
}

#[test]
fn test_get_is_idempotent() {
    let dir = setup_test_dir();
    let finder = find(["*"]).in_dirs([dir.path()]);
    assert_eq!(finder.get(), finder.get());
}

#[test]
fn test_get_rewalks_each_time() {
    let dir = setup_test_dir();
    let finder = find_files(["*.go"]).in_dirs([dir.path()]);
    assert_eq!(finder.get().len(), 2);

    fs::write(dir.path().join("late.go"), "").unwrap();
    assert_eq!(finder.get().len(), 3);
}

#[test]
fn test_match_on_full_path() {
    let dir = setup_test_dir();
    let found = find(["*"]).in_dirs([dir.path()]).matching(&[r"subdir/test\d\.\w+"]);

    assert_eq!(found.len(), 2);
    assert!(found.contains_key(&dir.path().join("subdir/test3.md")));
    assert!(found.contains_key(&dir.path().join("subdir/test4.go")));
}

#[test]
fn test_directory_hash_is_deterministic() {
    let dir = setup_test_dir();
    let first = directory_hash(dir.path()).unwrap();
    assert_eq!(first.len(), 32);
    assert_eq!(first, directory_hash(dir.path()).unwrap());

    // Same contents in a different place hash the same.
    let copy = setup_test_dir();
    assert_eq!(first, directory_hash(copy.path()).unwrap());

    fs::write(copy.path().join("subdir/test3.md"), "# changed").unwrap();
    assert_ne!(first, directory_hash(copy.path()).unwrap());
}

#[test]
fn test_root_name_is_matched_like_any_directory() {
    let dir = setup_test_dir();
    let root = dir.path().join("subdir");
    let found = find_directories(["subdir"]).in_dirs([root.as_path()]).get();

    assert_eq!(found.len(), 1);
    assert!(found.contains_key(Path::new(&root)));
}
