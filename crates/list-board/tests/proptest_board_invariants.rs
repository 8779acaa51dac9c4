//! Property-based invariant tests for the list board.
//!
//! Verifies:
//! 1. Grouping partitions the collection exactly (every item in one group, no loss)
//! 2. Creating the staging list with a selection count other than two never opens it
//! 3. Creating the staging list with exactly two selected always opens it, without an error
//! 4. Cancel restores the loaded snapshot after any sequence of moves
//! 5. A successful move changes only the `list_number` of the moved item
//! 6. No operation creates or destroys items
//! 7. While the staging list is open it renders once, directly between the selected pair

use std::collections::BTreeSet;

use list_board::{group_by_list, Item, ItemId, ListBoard, ListLabel};
use proptest::prelude::*;
use serde_json::json;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_label() -> impl Strategy<Value = ListLabel> {
    prop_oneof![
        (1u32..=4).prop_map(ListLabel::Numbered),
        Just(ListLabel::Staging),
    ]
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => "[a-z]{1,8}".prop_map(Some),
        1 => Just(None),
        1 => Just(Some(String::new())),
    ]
}

/// Items with unique ids, labelled only with numbered lists
fn arb_loaded_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((1u32..=4, arb_text(), arb_text()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (list, name, description))| Item {
                id: ItemId(idx as u64 + 1),
                name,
                description,
                list_number: ListLabel::Numbered(list),
            })
            .collect()
    })
}

fn arb_moves() -> impl Strategy<Value = Vec<(u64, ListLabel)>> {
    prop::collection::vec((1u64..=30, arb_label()), 0..40)
}

fn loaded_board(items: &[Item]) -> ListBoard {
    let mut board = ListBoard::new();
    board
        .load(Some(&json!({ "lists": items })))
        .expect("generated payload is valid");
    board
}

fn ids(items: &[Item]) -> BTreeSet<ItemId> {
    items.iter().map(|i| i.id).collect()
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn grouping_partitions_exactly(
        items in prop::collection::vec((1u64..1000, arb_label()), 0..32)
    ) {
        let items: Vec<Item> = items
            .into_iter()
            .map(|(id, label)| Item::new(id, "n", "d", label))
            .collect();
        let groups = group_by_list(&items);

        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        prop_assert_eq!(total, items.len());

        let labels: BTreeSet<_> = groups.iter().map(|g| g.label).collect();
        prop_assert_eq!(labels.len(), groups.len());

        for group in &groups {
            prop_assert!(!group.items.is_empty());
            prop_assert!(group.items.iter().all(|i| i.list_number == group.label));
        }
        for item in &items {
            let count = groups
                .iter()
                .filter(|g| g.label == item.list_number)
                .map(|g| g.items.iter().filter(|i| *i == item).count())
                .sum::<usize>();
            prop_assert!(count >= 1);
        }
    }

    #[test]
    fn create_staging_requires_two(
        items in arb_loaded_items(),
        picks in prop::collection::btree_set(1u32..=6, 0..6),
    ) {
        let mut board = loaded_board(&items);
        for label in &picks {
            board.toggle_selection(*label);
        }

        let result = board.request_create_staging();
        if picks.len() == 2 {
            prop_assert!(result.is_ok());
            prop_assert!(board.is_staging_visible());
            prop_assert!(board.selection_error().is_none());
        } else {
            prop_assert!(result.is_err());
            prop_assert!(!board.is_staging_visible());
            prop_assert!(board.selection_error().map_or(false, |m| !m.is_empty()));
        }
    }

    #[test]
    fn cancel_restores_snapshot(
        items in arb_loaded_items(),
        a in 1u32..=4,
        b in 1u32..=4,
        moves in arb_moves(),
    ) {
        prop_assume!(a != b);
        let mut board = loaded_board(&items);
        board.toggle_selection(a);
        board.toggle_selection(b);
        board.request_create_staging().unwrap();

        for (id, target) in moves {
            let _ = board.move_item(ItemId(id), target);
            prop_assert_eq!(ids(board.items()), ids(board.snapshot()));
        }
        prop_assert_eq!(board.snapshot(), items.as_slice());

        board.cancel();
        prop_assert_eq!(board.items(), items.as_slice());
        prop_assert!(board.selected().is_empty());
        prop_assert!(!board.is_staging_visible());
    }

    #[test]
    fn move_touches_only_target(
        items in arb_loaded_items(),
        moves in arb_moves(),
    ) {
        let mut board = loaded_board(&items);
        board.toggle_selection(1);
        board.toggle_selection(2);
        board.request_create_staging().unwrap();

        for (id, target) in moves {
            let before = board.items().to_vec();
            match board.move_item(ItemId(id), target) {
                Ok(()) => {
                    for (old, new) in before.iter().zip(board.items()) {
                        if old.id == ItemId(id) {
                            prop_assert_eq!(new.list_number, target);
                            prop_assert_eq!(&new.name, &old.name);
                            prop_assert_eq!(&new.description, &old.description);
                        } else {
                            prop_assert_eq!(new, old);
                        }
                    }
                }
                Err(_) => prop_assert_eq!(board.items(), before.as_slice()),
            }
        }
    }

    #[test]
    fn staging_box_stays_between_pair(
        items in arb_loaded_items(),
        a in 1u32..=4,
        b in 1u32..=4,
        moves in arb_moves(),
    ) {
        prop_assume!(a != b);
        let mut board = loaded_board(&items);
        board.toggle_selection(a);
        board.toggle_selection(b);
        let pair = board.request_create_staging().unwrap();

        for (id, target) in moves {
            let _ = board.move_item(ItemId(id), target);

            let labels: Vec<ListLabel> = board.view().boxes.iter().map(|b| b.label).collect();
            let staging: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, l)| l.is_staging())
                .map(|(idx, _)| idx)
                .collect();
            prop_assert_eq!(staging.len(), 1);

            let idx = staging[0];
            prop_assert!(idx > 0 && idx + 1 < labels.len());
            prop_assert_eq!(labels[idx - 1], ListLabel::Numbered(pair.left));
            prop_assert_eq!(labels[idx + 1], ListLabel::Numbered(pair.right));
        }
    }
}
