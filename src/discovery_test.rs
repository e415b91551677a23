// src/discovery_test.rs

use super::*;
use std::fs;
use tempfile::TempDir;

fn tree() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    let root = d.path();
    fs::create_dir_all(root.join("pkg/sub")).unwrap();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::create_dir_all(root.join("vendor/x")).unwrap();
    fs::write(root.join("main.go"), "package main\n").unwrap();
    fs::write(root.join("README.md"), "# hi\n").unwrap();
    fs::write(root.join("pkg/b.go"), "package pkg\n").unwrap();
    fs::write(root.join("pkg/a.go"), "package pkg\n").unwrap();
    fs::write(root.join("pkg/a_test.go"), "package pkg\n").unwrap();
    fs::write(root.join("pkg/sub/c.go"), "package sub\n").unwrap();
    fs::write(root.join(".git/objects/x.go"), "package x\n").unwrap();
    fs::write(root.join("vendor/x/v.go"), "package x\n").unwrap();
    d
}

fn names(found: &Discovery, root: &Path) -> Vec<String> {
    found
        .files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_finds_go_files_in_sorted_order() {
    let d = tree();
    let found = discover(d.path(), &Config::new());
    assert_eq!(
        names(&found, d.path()),
        vec![
            "main.go",
            "pkg/a.go",
            "pkg/a_test.go",
            "pkg/b.go",
            "pkg/sub/c.go",
            "vendor/x/v.go",
        ]
    );
    assert!(found.errors.is_empty());
}

#[test]
fn test_prune_and_exclude() {
    let d = tree();
    let mut config = Config::new();
    config.prune_dirs.push("vendor".to_string());
    config.add_excludes(&["_test\\.go$".to_string()]).unwrap();

    let found = discover(d.path(), &config);
    assert_eq!(
        names(&found, d.path()),
        vec!["main.go", "pkg/a.go", "pkg/b.go", "pkg/sub/c.go"]
    );
}

#[test]
fn test_missing_root_reports_walk_error() {
    let d = tempfile::tempdir().unwrap();
    let found = discover(&d.path().join("absent"), &Config::new());
    assert!(found.files.is_empty());
    assert_eq!(found.errors.len(), 1);
    assert!(matches!(found.errors[0], ScanError::Walk { .. }));
}

#[test]
fn test_target_resolution() {
    let d = tree();
    assert_eq!(
        Target::resolve(d.path()),
        Target::Directory(d.path().to_path_buf())
    );
    let file = d.path().join("main.go");
    assert_eq!(Target::resolve(&file), Target::File(file.clone()));
    let gone = d.path().join("gone.go");
    assert_eq!(Target::resolve(&gone), Target::Missing(gone.clone()));
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_listed() {
    let outside = tempfile::tempdir().unwrap();
    let real = outside.path().join("real.go");
    fs::write(&real, "package real\n").unwrap();

    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("a.go"), "package a\n").unwrap();
    std::os::unix::fs::symlink(&real, d.path().join("link.go")).unwrap();
    std::os::unix::fs::symlink(outside.path(), d.path().join("linked_dir")).unwrap();

    let found = discover(d.path(), &Config::new());
    assert_eq!(names(&found, d.path()), vec!["a.go", "link.go"]);
    assert!(found.errors.is_empty());
}
