// submod: Git Submodule Registration Manager
//
// SPDX-FileCopyrightText: 2026 submod contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Manifest;
use crate::error::{ManifestError, SubmodError};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write_manifest(top: &Path, contents: &str) {
    std::fs::write(top.join(".gitmodules"), contents).expect("failed to write manifest");
}

const TWO_ENTRIES: &str = "[submodule \"libA\"]\n\
                           \tpath = vendor/a\n\
                           \turl = https://x/a\n\
                           [submodule \"libB\"]\n\
                           \tpath = vendor/b\n\
                           \turl = https://x/b\n\
                           \tbranch = stable\n";

#[test]
fn test_load_missing_manifest() {
    let temp = temp_dir();
    let err = Manifest::load(temp.path()).expect_err("missing manifest should fail");
    match err {
        SubmodError::Manifest(manifest_err) => match *manifest_err {
            ManifestError::NotFound { path } => assert!(path.ends_with(".gitmodules")),
            other => panic!("unexpected manifest error: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_parses_entries_in_file_order() {
    let temp = temp_dir();
    write_manifest(temp.path(), TWO_ENTRIES);

    let manifest = Manifest::load(temp.path()).expect("load should succeed");
    let entries = manifest.entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "libA");
    assert_eq!(entries[0].url, "https://x/a");
    assert_eq!(entries[0].path, "vendor/a");
    assert_eq!(entries[0].branch, None);
    assert_eq!(entries[1].name, "libB");
    assert_eq!(entries[1].branch.as_deref(), Some("stable"));
}

#[test]
fn test_load_rejects_malformed_manifest() {
    let temp = temp_dir();
    write_manifest(temp.path(), "[submodule \"libA\"\nurl = https://x/a\n");

    let err = Manifest::load(temp.path()).expect_err("malformed manifest should fail");
    match err {
        SubmodError::Manifest(manifest_err) => {
            assert!(matches!(*manifest_err, ManifestError::Parse { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unnamed_section_carries_no_entry() {
    let temp = temp_dir();
    write_manifest(temp.path(), "[submodule]\n\turl = https://x/a\n");

    let manifest = Manifest::load(temp.path()).expect("load should succeed");
    assert!(manifest.is_empty());
}

#[test]
fn test_find_by_url_last_match_wins() {
    let temp = temp_dir();
    write_manifest(
        temp.path(),
        "[submodule \"old\"]\n\tpath = vendor/old\n\turl = https://x/dup\n\
         [submodule \"new\"]\n\tpath = vendor/new\n\turl = https://x/dup\n",
    );

    let manifest = Manifest::load(temp.path()).expect("load should succeed");
    let entry = manifest
        .find_by_url("https://x/dup")
        .expect("url should resolve");
    assert_eq!(entry.name, "new");
    assert_eq!(entry.path, "vendor/new");

    assert!(manifest.find_by_url("https://x/zzz").is_none());
}

#[test]
fn test_remove_keeps_other_sections_byte_identical() {
    let temp = temp_dir();
    let contents = format!("# vendored dependencies\n{TWO_ENTRIES}");
    write_manifest(temp.path(), &contents);

    let mut manifest = Manifest::load(temp.path()).expect("load should succeed");
    let removed = manifest.remove("libA").expect("remove should succeed");
    assert!(removed);
    manifest.save().expect("save should succeed");

    let rewritten =
        std::fs::read_to_string(temp.path().join(".gitmodules")).expect("manifest readable");
    assert!(rewritten.contains("# vendored dependencies"));
    assert!(rewritten.contains("[submodule \"libB\"]"));
    assert!(rewritten.contains("\tbranch = stable\n"));
    assert!(!rewritten.contains("libA"));

    let reloaded = Manifest::load(temp.path()).expect("reload should succeed");
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].name, "libB");
}

#[test]
fn test_remove_unknown_name_is_noop() {
    let temp = temp_dir();
    write_manifest(temp.path(), TWO_ENTRIES);

    let mut manifest = Manifest::load(temp.path()).expect("load should succeed");
    let removed = manifest.remove("libZ").expect("remove should succeed");
    assert!(!removed);
    assert_eq!(manifest.entries().len(), 2);
}

#[test]
fn test_remove_all_entries_empties_manifest() {
    let temp = temp_dir();
    write_manifest(temp.path(), TWO_ENTRIES);

    let mut manifest = Manifest::load(temp.path()).expect("load should succeed");
    assert!(manifest.remove("libA").expect("remove libA"));
    // The second removal re-parses the text rewritten by the first.
    assert!(manifest.remove("libB").expect("remove libB"));
    assert!(manifest.is_empty());

    manifest.save().expect("save should succeed");
    let reloaded = Manifest::load(temp.path()).expect("reload should succeed");
    assert!(reloaded.is_empty());
}

#[test]
fn test_delete_removes_file() {
    let temp = temp_dir();
    write_manifest(temp.path(), TWO_ENTRIES);

    let manifest = Manifest::load(temp.path()).expect("load should succeed");
    manifest.delete().expect("delete should succeed");
    assert!(!temp.path().join(".gitmodules").exists());
}
