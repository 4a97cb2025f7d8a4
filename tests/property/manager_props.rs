//! Property-based tests for the task list manager.
//!
//! Uses proptest to verify:
//! 1. Accepted create-commits grow the list by exactly one, with unique ids.
//! 2. Blank drafts never change the list, whatever else is going on.
//! 3. A toggle pair is the identity on the completed flag.
//! 4. Delete removes the id, is idempotent, and preserves the order of the
//!    remaining tasks.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use taskdeck::tasks::{TaskId, TaskListManager};

// --- Strategies ---

/// Strategy for draft text that survives trimming (ends in a non-space).
fn arb_valid_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,24}[a-zA-Z0-9]"
}

/// Strategy for draft text that is blank after trimming.
fn arb_blank_text() -> impl Strategy<Value = String> {
    "[ \t]{0,8}"
}

/// One user-level operation against the manager.
#[derive(Debug, Clone)]
enum Op {
    Create { title: String, description: String },
    CreateBlank { description: String },
    Toggle(usize),
    Delete(usize),
    BeginEdit(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_valid_text(), arb_valid_text())
            .prop_map(|(title, description)| Op::Create { title, description }),
        arb_valid_text().prop_map(|description| Op::CreateBlank { description }),
        any::<usize>().prop_map(Op::Toggle),
        any::<usize>().prop_map(Op::Delete),
        any::<usize>().prop_map(Op::BeginEdit),
    ]
}

/// Id of the task at `idx % len`, if the list is non-empty.
fn nth_id(mgr: &TaskListManager, idx: usize) -> Option<TaskId> {
    let tasks = mgr.tasks();
    if tasks.is_empty() {
        None
    } else {
        Some(tasks[idx % tasks.len()].id)
    }
}

// --- Properties ---

proptest! {
    /// Task count equals the number of accepted create-commits.
    #[test]
    fn create_commits_grow_list_one_by_one(
        pairs in prop::collection::vec((arb_valid_text(), arb_valid_text()), 0..16)
    ) {
        let mut mgr = TaskListManager::new();
        for (i, (title, description)) in pairs.iter().enumerate() {
            mgr.set_draft_title(title.clone());
            mgr.set_draft_description(description.clone());
            prop_assert!(mgr.commit().is_some());
            prop_assert_eq!(mgr.tasks().len(), i + 1);
        }

        let ids: HashSet<TaskId> = mgr.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), pairs.len());
    }

    /// Blank drafts never create a task, on either side of the form.
    #[test]
    fn blank_drafts_never_create(
        blank in arb_blank_text(),
        valid in arb_valid_text(),
    ) {
        let mut mgr = TaskListManager::new();

        mgr.set_draft_title(blank.clone());
        mgr.set_draft_description(valid.clone());
        prop_assert!(mgr.commit().is_none());

        mgr.set_draft_title(valid);
        mgr.set_draft_description(blank);
        prop_assert!(mgr.commit().is_none());

        prop_assert!(mgr.tasks().is_empty());
    }

    /// Toggling any task twice restores its completed flag.
    #[test]
    fn double_toggle_is_identity(
        pairs in prop::collection::vec((arb_valid_text(), arb_valid_text()), 1..8),
        idx in any::<usize>(),
    ) {
        let mut mgr = TaskListManager::new();
        for (title, description) in pairs {
            mgr.set_draft_title(title);
            mgr.set_draft_description(description);
            mgr.commit().unwrap();
        }

        let id = nth_id(&mgr, idx).unwrap();
        let before = mgr.task(id).unwrap().completed;
        mgr.toggle_completed(id);
        mgr.toggle_completed(id);
        prop_assert_eq!(mgr.task(id).unwrap().completed, before);
    }

    /// Delete removes exactly the targeted id, repeats are no-ops, and the
    /// relative order of the survivors never changes.
    #[test]
    fn delete_is_idempotent_and_order_preserving(
        pairs in prop::collection::vec((arb_valid_text(), arb_valid_text()), 1..8),
        idx in any::<usize>(),
    ) {
        let mut mgr = TaskListManager::new();
        for (title, description) in pairs {
            mgr.set_draft_title(title);
            mgr.set_draft_description(description);
            mgr.commit().unwrap();
        }

        let id = nth_id(&mgr, idx).unwrap();
        let expected: Vec<TaskId> = mgr
            .tasks()
            .iter()
            .map(|t| t.id)
            .filter(|&t| t != id)
            .collect();

        mgr.delete(id);
        prop_assert!(mgr.task(id).is_none());
        let after: Vec<TaskId> = mgr.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(&after, &expected);

        mgr.delete(id);
        let again: Vec<TaskId> = mgr.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(&again, &expected);
    }

    /// Whatever the operation sequence, ids stay unique and invariants on
    /// the editing reference hold (it only dangles after a delete).
    #[test]
    fn ids_stay_unique_under_arbitrary_ops(ops in prop::collection::vec(arb_op(), 0..32)) {
        let mut mgr = TaskListManager::new();
        for op in ops {
            match op {
                Op::Create { title, description } => {
                    mgr.set_draft_title(title);
                    mgr.set_draft_description(description);
                    // May be refused if an edit is pending on a deleted
                    // task; either way the invariants below must hold.
                    let _ = mgr.commit();
                }
                Op::CreateBlank { description } => {
                    mgr.set_draft_title("   ");
                    mgr.set_draft_description(description);
                    prop_assert!(mgr.commit().is_none());
                }
                Op::Toggle(idx) => {
                    if let Some(id) = nth_id(&mgr, idx) {
                        mgr.toggle_completed(id);
                    }
                }
                Op::Delete(idx) => {
                    if let Some(id) = nth_id(&mgr, idx) {
                        mgr.delete(id);
                    }
                }
                Op::BeginEdit(idx) => {
                    if let Some(id) = nth_id(&mgr, idx) {
                        mgr.begin_edit(id);
                    }
                }
            }

            let ids: HashSet<TaskId> = mgr.tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), mgr.tasks().len());
        }
    }
}
