//! Board View Model
//!
//! Pure grouping of items into list boxes, with the arrow targets each item
//! row should offer. Rebuilt from controller state on every render.

use std::collections::{BTreeSet, HashMap};

use crate::board::StagingPair;
use crate::item::{Item, ItemContent, ItemId};
use crate::label::{Direction, ListLabel};

/// Items sharing one `list_number`
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup {
    pub label: ListLabel,
    pub items: Vec<Item>,
}

/// Group items by list, in the order each list is first seen
pub fn group_by_list(items: &[Item]) -> Vec<ListGroup> {
    // label -> index into `groups`
    let mut index: HashMap<ListLabel, usize> = HashMap::new();
    let mut groups: Vec<ListGroup> = Vec::new();
    for item in items {
        let idx = *index.entry(item.list_number).or_insert_with(|| {
            groups.push(ListGroup { label: item.list_number, items: Vec::new() });
            groups.len() - 1
        });
        groups[idx].items.push(item.clone());
    }
    groups
}

/// One item row
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub id: ItemId,
    pub content: ItemContent,
    pub left: Option<ListLabel>,
    pub right: Option<ListLabel>,
}

impl EntryView {
    pub fn target(&self, direction: Direction) -> Option<ListLabel> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn has_arrows(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

/// One rendered list box
#[derive(Debug, Clone, PartialEq)]
pub struct ListBoxView {
    pub label: ListLabel,
    pub title: String,
    /// Has a selection checkbox (every list except the staging list)
    pub selectable: bool,
    pub checked: bool,
    pub entries: Vec<EntryView>,
}

/// Everything the list container renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardView {
    pub boxes: Vec<ListBoxView>,
}

impl BoardView {
    pub fn build(items: &[Item], selected: &BTreeSet<u32>, staging: Option<StagingPair>) -> Self {
        let mut groups = group_by_list(items);
        let staging_items = groups
            .iter()
            .position(|g| g.label.is_staging())
            .map(|idx| groups.remove(idx).items)
            .unwrap_or_default();

        let Some(pair) = staging else {
            // Items parked in a committed staging list stay hidden until it is reopened
            let boxes = groups
                .into_iter()
                .map(|g| list_box(g.label, g.items, selected, None))
                .collect();
            return Self { boxes };
        };

        let mut boxes: Vec<ListBoxView> = groups
            .into_iter()
            .map(|g| list_box(g.label, g.items, selected, Some(pair)))
            .collect();

        // The pair is laid out as `left | staging | right` where the first of
        // the two was seen; a pair list emptied by moves keeps its box there
        let is_pair = |b: &ListBoxView| pair.contains(b.label);
        let slot = boxes.iter().position(is_pair).unwrap_or(boxes.len());
        let mut take = |side: u32| {
            let label = ListLabel::Numbered(side);
            match boxes.iter().position(|b| b.label == label) {
                Some(idx) => boxes.remove(idx),
                None => list_box(label, Vec::new(), selected, Some(pair)),
            }
        };
        let left = take(pair.left);
        let right = take(pair.right);
        let staging = list_box(ListLabel::Staging, staging_items, selected, Some(pair));
        boxes.splice(slot..slot, [left, staging, right]);

        Self { boxes }
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn find(&self, label: ListLabel) -> Option<&ListBoxView> {
        self.boxes.iter().find(|b| b.label == label)
    }
}

fn list_box(
    label: ListLabel,
    items: Vec<Item>,
    selected: &BTreeSet<u32>,
    staging: Option<StagingPair>,
) -> ListBoxView {
    let entries = items
        .into_iter()
        .map(|item| EntryView {
            id: item.id,
            content: item.content(),
            left: staging.and_then(|p| p.neighbor(label, Direction::Left)),
            right: staging.and_then(|p| p.neighbor(label, Direction::Right)),
        })
        .collect();

    ListBoxView {
        label,
        title: label.title(),
        selectable: !label.is_staging(),
        checked: label.number().map_or(false, |n| selected.contains(&n)),
        entries,
    }
}
