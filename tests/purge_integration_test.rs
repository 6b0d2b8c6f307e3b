//! End-to-end purge runs against real temporary directories.

use cachepurge::eviction::EvictionPlanner;
use cachepurge::inventory::collect_snapshot;
use cachepurge::{run_purge, DryRunFileSystem, PurgeConfig, RealFileSystem};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![0u8; size]).unwrap();
}

fn total_file_bytes(root: &Path) -> u64 {
    walk(root)
        .iter()
        .filter(|p| p.is_file())
        .map(|p| fs::metadata(p).unwrap().len())
        .sum()
}

fn walk(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap().into_path())
        .collect()
}

#[test]
fn test_purge_brings_cache_under_budget() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for i in 0..10 {
        write_file(&root.join(format!("host{}/file{}.bin", i % 3, i)), 1000);
    }

    let stats = run_purge(&PurgeConfig::new(root, 4500), &RealFileSystem::new()).unwrap();

    assert_eq!(stats.files_deleted, 6);
    assert_eq!(stats.bytes_freed, 6000);
    assert_eq!(total_file_bytes(root), 4000);
    assert!(root.exists());
}

#[test]
fn test_second_run_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for i in 0..5 {
        write_file(&root.join(format!("f{}", i)), 300);
    }
    fs::create_dir(root.join("empty")).unwrap();
    let config = PurgeConfig::new(root, 1000);

    let first = run_purge(&config, &RealFileSystem::new()).unwrap();
    assert_eq!(first.files_deleted, 2);
    assert_eq!(first.directories_removed, 1);

    let before = walk(root).len();
    let second = run_purge(&config, &RealFileSystem::new()).unwrap();
    assert_eq!(second.files_deleted, 0);
    assert_eq!(second.directories_removed, 0);
    assert_eq!(second.failures(), 0);
    assert_eq!(walk(root).len(), before);
}

#[test]
fn test_empty_directories_swept_but_populated_ones_kept() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("a/empty_leaf")).unwrap();
    fs::create_dir(root.join("empty_top")).unwrap();
    write_file(&root.join("busy/data.bin"), 50);

    // Budget large enough that nothing is evicted
    let stats = run_purge(&PurgeConfig::new(root, 1 << 20), &RealFileSystem::new()).unwrap();

    assert_eq!(stats.files_deleted, 0);
    assert_eq!(stats.directories_removed, 2);
    assert!(!root.join("a/empty_leaf").exists());
    assert!(!root.join("empty_top").exists());
    // "a" had a child at snapshot time
    assert!(root.join("a").exists());
    assert!(root.join("busy/data.bin").exists());
}

#[test]
fn test_directory_whose_child_is_evicted_is_left_in_place() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("dir/only.bin"), 500);

    let stats = run_purge(&PurgeConfig::new(root, 0), &RealFileSystem::new()).unwrap();

    assert_eq!(stats.files_deleted, 1);
    assert_eq!(stats.directories_removed, 0);
    assert!(root.join("dir").is_dir());
}

#[test]
fn test_file_vanishing_after_snapshot_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("one"), 100);
    write_file(&root.join("two"), 100);

    let snapshot = collect_snapshot(root).unwrap();
    // Another process removes a file between inventory and eviction
    fs::remove_file(root.join("one")).unwrap();

    let (_, report) = EvictionPlanner::new(0).evict(snapshot, &RealFileSystem::new());

    assert_eq!(report.vanished.len(), 1);
    assert_eq!(report.deleted.len(), 1);
    assert!(report.failed.is_empty());
    assert!(!root.join("two").exists());
}

#[test]
fn test_empty_cache_root_survives() {
    let temp = TempDir::new().unwrap();

    let stats = run_purge(&PurgeConfig::new(temp.path(), 0), &RealFileSystem::new()).unwrap();

    assert_eq!(stats.entries_scanned, 1);
    assert_eq!(stats.directories_removed, 0);
    assert!(temp.path().is_dir());
}

#[test]
fn test_dry_run_leaves_cache_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("a"), 100);
    write_file(&root.join("b"), 100);
    fs::create_dir(root.join("empty")).unwrap();

    let fs_impl = DryRunFileSystem::new();
    let stats = run_purge(&PurgeConfig::new(root, 100).with_dry_run(true), &fs_impl).unwrap();

    assert_eq!(stats.files_deleted, 1);
    assert_eq!(stats.directories_removed, 1);
    assert_eq!(fs_impl.removals().len(), 2);
    assert!(root.join("a").exists());
    assert!(root.join("b").exists());
    assert!(root.join("empty").exists());
}
