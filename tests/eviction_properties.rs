//! Property-based tests for the eviction planner
//!
//! These tests verify invariants that should hold for all snapshots:
//! - Planning always terminates and meets the budget when files allow it
//! - No file is chosen once the running total already fits
//! - Victims are taken strictly oldest first
//! - Directories are never victims and never leave the snapshot

use cachepurge::eviction::plan_eviction;
use cachepurge::{Entry, Snapshot};
use proptest::prelude::*;
use std::time::Duration;

/// Generate a snapshot of up to 40 files and directories with unique paths
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::vec((any::<bool>(), 0u64..500, 0u64..2_000), 0..40).prop_map(|specs| {
        let entries = specs
            .into_iter()
            .enumerate()
            .map(|(i, (is_dir, age, size))| {
                let path = format!("/cache/e{}", i);
                let age = Duration::from_secs(age);
                if is_dir {
                    Entry::directory(path, age, size % 2 == 0, 1).with_size(size)
                } else {
                    Entry::file(path, age, size, 1)
                }
            })
            .collect();
        Snapshot::new("/cache", entries)
    })
}

proptest! {
    /// Property: the projected total fits, or every file was evicted
    #[test]
    fn prop_budget_converges(snapshot in snapshot_strategy(), max_size in 0u64..20_000) {
        let files = snapshot.file_count();
        let plan = plan_eviction(snapshot, max_size);

        prop_assert!(plan.projected_size <= max_size || plan.victims.len() == files);
        prop_assert_eq!(plan.projected_size, plan.survivors.total_size());
    }

    /// Property: replaying the victims, the total exceeded the budget before each deletion
    #[test]
    fn prop_never_deletes_within_budget(snapshot in snapshot_strategy(), max_size in 0u64..20_000) {
        let mut running = snapshot.total_size();
        let plan = plan_eviction(snapshot, max_size);

        for victim in &plan.victims {
            prop_assert!(running > max_size);
            running -= victim.size;
        }
        prop_assert_eq!(running, plan.projected_size);
    }

    /// Property: every victim is at least as old as every surviving file
    #[test]
    fn prop_oldest_first(snapshot in snapshot_strategy(), max_size in 0u64..20_000) {
        let plan = plan_eviction(snapshot, max_size);

        let youngest_victim = plan.victims.iter().map(|e| e.age).min();
        let oldest_survivor = plan
            .survivors
            .entries()
            .iter()
            .filter(|e| !e.is_directory())
            .map(|e| e.age)
            .max();

        if let (Some(victim), Some(survivor)) = (youngest_victim, oldest_survivor) {
            prop_assert!(victim >= survivor);
        }
        prop_assert!(plan.victims.windows(2).all(|w| w[0].age >= w[1].age));
    }

    /// Property: directories are inert
    #[test]
    fn prop_directories_survive(snapshot in snapshot_strategy(), max_size in 0u64..20_000) {
        let dirs = snapshot.entries().iter().filter(|e| e.is_directory()).count();
        let total = snapshot.len();
        let plan = plan_eviction(snapshot, max_size);

        prop_assert!(plan.victims.iter().all(|e| !e.is_directory()));
        prop_assert_eq!(
            plan.survivors.entries().iter().filter(|e| e.is_directory()).count(),
            dirs
        );
        prop_assert_eq!(plan.victims.len() + plan.survivors.len(), total);
    }
}
