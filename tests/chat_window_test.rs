//! Chat window merging
//!
//! A poller repeatedly fetches windows that may overlap; id-keyed merging
//! guarantees no message renders twice.

mod helpers;

use helpers::*;

use ClubHub::services::chat::merge_by_id;

#[test]
fn overlapping_poll_windows_merge_without_duplicates() {
    // first poll saw 1-3; the next window overlaps on 3
    let first = vec![chat_message(1, 0), chat_message(2, 1), chat_message(3, 2)];
    let second = vec![chat_message(3, 2), chat_message(4, 3), chat_message(5, 4)];

    let merged = merge_by_id(first, second);
    let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn pinned_history_slots_into_chronological_order() {
    // an old pinned message joins a recent window at its proper place
    let window = vec![chat_message(20, 30), chat_message(21, 45)];
    let pinned = vec![chat_message(5, 0)];

    let merged = merge_by_id(window, pinned);
    let ids: Vec<i64> = merged.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![5, 20, 21]);
}

#[test]
fn pinned_message_already_in_window_appears_once() {
    let window = vec![chat_message(7, 10), chat_message(8, 11)];
    let pinned = vec![chat_message(8, 11)];

    let merged = merge_by_id(window, pinned);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged.iter().filter(|m| m.id == 8).count(), 1);
}

#[test]
fn repeated_merges_stay_stable() {
    let mut view = Vec::new();

    // three polls, each overlapping the previous one
    for round in 0..3u32 {
        let base = round as i64 * 2;
        let window = vec![
            chat_message(base + 1, round * 2),
            chat_message(base + 2, round * 2 + 1),
            chat_message(base + 3, round * 2 + 2),
        ];
        view = merge_by_id(view, window);
    }

    let ids: Vec<i64> = view.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}
