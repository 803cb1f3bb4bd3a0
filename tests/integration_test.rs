// Integration tests for the slot controller

use slotbot::interpreter::errors::SlotError;
use slotbot::interpreter::router::{CommandOutcome, CommandRouter, Notice};
use slotbot::interpreter::store::SlotStore;
use slotbot::parser::parse::{parse_line, Input};
use slotbot::slots::SlotSetView;

/// Parse and run one line, panicking on anything but a command
fn run(store: &mut SlotStore, line: &str) -> Result<Option<Notice>, SlotError> {
    let command = match parse_line(line).expect("Parsing failed") {
        Input::Command(command) => command,
        other => panic!("Expected a command, got {:?}", other),
    };
    match CommandRouter::new(store).execute(command)? {
        CommandOutcome::Applied => Ok(None),
        CommandOutcome::Notice(notice) => Ok(Some(notice)),
        CommandOutcome::Replay(_) => Ok(None),
    }
}

fn replay(store: &mut SlotStore, count: i64) -> Result<Vec<SlotSetView>, SlotError> {
    store.replay_from(count).map(|frames| frames.collect())
}

fn counts(store: &SlotStore) -> Vec<u64> {
    store.current_view().counts().to_vec()
}

#[test]
fn test_walkthrough_scenario() {
    let mut store = SlotStore::default();

    run(&mut store, "size 3").unwrap();
    assert_eq!(counts(&store), vec![0, 0, 0]);

    run(&mut store, "add 1").unwrap();
    run(&mut store, "add 1").unwrap();
    run(&mut store, "mv 1 2").unwrap();
    assert_eq!(counts(&store), vec![1, 1, 0]);

    // Slot 3 is empty, so nothing needs redistributing
    run(&mut store, "size 2").unwrap();
    assert_eq!(counts(&store), vec![1, 1]);

    run(&mut store, "rm 2").unwrap();
    assert_eq!(counts(&store), vec![1, 0]);

    run(&mut store, "undo 1").unwrap();
    assert_eq!(counts(&store), vec![1, 1]);
}

#[test]
fn test_rendering_matches_prompt_format() {
    let mut store = SlotStore::default();
    run(&mut store, "size 3").unwrap();
    run(&mut store, "add 3").unwrap();
    run(&mut store, "add 3").unwrap();
    run(&mut store, "add 1").unwrap();

    assert_eq!(store.current_view().to_string(), "1: X\n2: \n3: XX\n");
}

#[test]
fn test_shrink_redistributes_round_robin() {
    let mut store = SlotStore::default();
    run(&mut store, "size 4").unwrap();
    for line in ["add 3", "add 4", "add 4", "add 4", "add 4"] {
        run(&mut store, line).unwrap();
    }

    run(&mut store, "size 2").unwrap();
    assert_eq!(counts(&store), vec![3, 2]);
}

#[test]
fn test_shrink_to_zero_discards_blocks() {
    let mut store = SlotStore::default();
    run(&mut store, "size 2").unwrap();
    run(&mut store, "add 1").unwrap();
    run(&mut store, "add 2").unwrap();

    run(&mut store, "size 0").unwrap();
    assert_eq!(store.size(), 0);
    assert_eq!(store.current_view().total_blocks(), 0);

    // Growing again does not bring the blocks back
    run(&mut store, "size 2").unwrap();
    assert_eq!(counts(&store), vec![0, 0]);
}

#[test]
fn test_blocked_move_records_identical_snapshot() {
    let mut store = SlotStore::default();
    run(&mut store, "size 2").unwrap();

    let notice = run(&mut store, "mv 1 2").unwrap();
    assert_eq!(notice, Some(Notice::NoBlocksToMove));
    assert_eq!(store.history_len(), 2);
    assert_eq!(store.history().get(0), store.history().get(1));
}

#[test]
fn test_remove_from_empty_slot_is_notice() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();
    assert_eq!(run(&mut store, "rm 1"), Ok(Some(Notice::NoBlocksToRemove)));
}

#[test]
fn test_invalid_slot_fails_without_snapshot() {
    let mut store = SlotStore::default();
    run(&mut store, "size 2").unwrap();
    run(&mut store, "add 1").unwrap();

    assert_eq!(
        run(&mut store, "mv 1 3"),
        Err(SlotError::InvalidSlot { slot: 3, size: 2 })
    );
    assert_eq!(counts(&store), vec![1, 0]);
    assert_eq!(store.history_len(), 2);
}

#[test]
fn test_replay_does_not_grow_history() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();
    run(&mut store, "add 1").unwrap();
    run(&mut store, "add 1").unwrap();

    run(&mut store, "replay 1").unwrap();
    assert_eq!(store.history_len(), 3);
}

#[test]
fn test_replay_yields_count_plus_one_frames() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();
    for _ in 0..4 {
        run(&mut store, "add 1").unwrap();
    }

    let frames = replay(&mut store, 2).unwrap();
    let totals: Vec<u64> = frames.iter().map(|view| view.total_blocks()).collect();
    assert_eq!(totals, vec![2, 3, 4]);
    assert_eq!(frames.last(), Some(&store.current_view()));
}

#[test]
fn test_replay_cannot_reach_initial_state() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();
    run(&mut store, "add 1").unwrap();

    // history has two entries; replaying 1 would start at the first one
    assert!(matches!(
        replay(&mut store, 1),
        Err(SlotError::ReplayRangeTooLarge { .. })
    ));
    assert_eq!(replay(&mut store, 0).map(|frames| frames.len()), Ok(1));
}

#[test]
fn test_undo_zero_restores_latest_snapshot() {
    let mut store = SlotStore::default();
    run(&mut store, "size 2").unwrap();
    run(&mut store, "add 2").unwrap();

    run(&mut store, "undo 0").unwrap();
    assert_eq!(counts(&store), vec![0, 1]);
    assert_eq!(store.history_len(), 3);
}

#[test]
fn test_undo_walks_back_and_is_itself_recorded() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();
    run(&mut store, "add 1").unwrap();
    run(&mut store, "add 1").unwrap();
    run(&mut store, "add 1").unwrap();

    run(&mut store, "undo 2").unwrap();
    assert_eq!(counts(&store), vec![1]);

    // The undo is a command too, so undoing it returns to three blocks
    run(&mut store, "undo 1").unwrap();
    assert_eq!(counts(&store), vec![3]);
}

#[test]
fn test_undo_past_history_is_rejected() {
    let mut store = SlotStore::default();
    run(&mut store, "size 1").unwrap();

    assert_eq!(
        run(&mut store, "undo 1"),
        Err(SlotError::IndexOutOfRange {
            requested: 1,
            recorded: 1
        })
    );
    assert_eq!(store.history_len(), 1);
}

#[test]
fn test_snapshot_limit_rejects_size_before_initializing() {
    let mut store = SlotStore::new(1);
    let err = run(&mut store, "size 1").unwrap_err();
    assert!(matches!(err, SlotError::SnapshotLimitExceeded { limit: 1, .. }));
    assert!(!store.is_initialized());
    assert_eq!(store.history_len(), 0);
}

#[test]
fn test_full_history_leaves_state_unchanged() {
    // room for exactly two one-slot snapshots
    let mut store = SlotStore::new(2 * SlotSetView::estimated_size_for(1));
    run(&mut store, "size 1").unwrap();
    run(&mut store, "add 1").unwrap();

    let err = run(&mut store, "add 1").unwrap_err();
    assert!(matches!(err, SlotError::SnapshotLimitExceeded { .. }));
    assert_eq!(counts(&store), vec![1]);
    assert_eq!(store.history_len(), 2);
    assert_eq!(store.history().last(), Some(&store.current_view()));

    // replay records nothing, so it still works
    assert_eq!(replay(&mut store, 0).map(|frames| frames.len()), Ok(1));
}

#[test]
fn test_huge_size_is_an_error_not_a_crash() {
    let mut store = SlotStore::default();
    run(&mut store, "size 2").unwrap();

    let err = run(&mut store, "size 9223372036854775807").unwrap_err();
    assert!(matches!(err, SlotError::SnapshotLimitExceeded { .. }));
    assert_eq!(counts(&store), vec![0, 0]);
    assert_eq!(store.history_len(), 1);
}
