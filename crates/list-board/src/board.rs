//! List Board Controller
//!
//! Owns the loaded items, the restore snapshot, the list selection and the
//! staging list. All transitions go through the methods here (or
//! [`ListBoard::dispatch`]) so they can be exercised without any rendering.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{BoardError, BoardResult, SELECTION_COUNT_MESSAGE};
use crate::item::{Item, ItemId};
use crate::label::{Direction, ListLabel};
use crate::payload::ListsPayload;
use crate::view::BoardView;

/// Load lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    /// Load failed; the string is the diagnostic reason
    Failed(String),
}

/// The two selected lists the staging list sits between
///
/// `left < right`. Frozen when the staging list is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagingPair {
    pub left: u32,
    pub right: u32,
}

impl StagingPair {
    pub fn new(a: u32, b: u32) -> Self {
        Self { left: a.min(b), right: a.max(b) }
    }

    pub fn contains(&self, label: ListLabel) -> bool {
        match label {
            ListLabel::Numbered(n) => n == self.left || n == self.right,
            ListLabel::Staging => true,
        }
    }

    /// Where an arrow on an item in `from` sends it, if anywhere
    ///
    /// Layout is `left | staging | right`; arrows never skip the staging list.
    pub fn neighbor(&self, from: ListLabel, direction: Direction) -> Option<ListLabel> {
        match (from, direction) {
            (ListLabel::Staging, Direction::Left) => Some(ListLabel::Numbered(self.left)),
            (ListLabel::Staging, Direction::Right) => Some(ListLabel::Numbered(self.right)),
            (ListLabel::Numbered(n), Direction::Right) if n == self.left => Some(ListLabel::Staging),
            (ListLabel::Numbered(n), Direction::Left) if n == self.right => Some(ListLabel::Staging),
            _ => None,
        }
    }

    /// Adjacency rule: one side of every legal move is the staging list
    pub fn allows(&self, from: ListLabel, to: ListLabel) -> bool {
        from != to && self.contains(from) && self.contains(to) && (from.is_staging() || to.is_staging())
    }
}

/// User-level operations, for callers that prefer a single entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleSelection(u32),
    CreateStaging,
    Move { id: ItemId, target: ListLabel },
    Cancel,
    Commit,
}

/// In-memory list membership state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBoard {
    phase: Phase,
    items: Vec<Item>,
    snapshot: Vec<Item>,
    selected: BTreeSet<u32>,
    staging: Option<StagingPair>,
    selection_error: Option<String>,
}

impl ListBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Accessors
    // ========================

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    pub fn is_selected(&self, label: u32) -> bool {
        self.selected.contains(&label)
    }

    pub fn staging(&self) -> Option<StagingPair> {
        self.staging
    }

    pub fn is_staging_visible(&self) -> bool {
        self.staging.is_some()
    }

    pub fn selection_error(&self) -> Option<&str> {
        self.selection_error.as_deref()
    }

    /// Presentation model for the current state
    pub fn view(&self) -> BoardView {
        BoardView::build(&self.items, &self.selected, self.staging)
    }

    // ========================
    // Loading
    // ========================

    /// Enter `Loading` (initial load or retry)
    pub fn begin_load(&mut self) {
        debug!(previous = ?self.phase, "begin load");
        self.phase = Phase::Loading;
    }

    /// Apply the source's document
    ///
    /// `None` means the source produced nothing. Both that and a document that
    /// does not match the schema move the board to `Failed`.
    pub fn finish_load(&mut self, document: Option<&Value>) -> BoardResult<usize> {
        let result = document
            .ok_or(BoardError::Unavailable)
            .and_then(ListsPayload::from_value);

        match result {
            Ok(payload) => {
                let count = payload.lists.len();
                self.snapshot = payload.lists.clone();
                self.items = payload.lists;
                self.selection_error = None;
                self.phase = Phase::Ready;
                info!(count, "lists loaded");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "lists failed to load");
                self.phase = Phase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn load(&mut self, document: Option<&Value>) -> BoardResult<usize> {
        self.begin_load();
        self.finish_load(document)
    }

    // ========================
    // Selection & Staging
    // ========================

    pub fn toggle_selection(&mut self, label: u32) {
        if !self.selected.remove(&label) {
            self.selected.insert(label);
        }
        self.selection_error = None;
        debug!(label, selected = ?self.selected, "selection toggled");
    }

    /// Open the staging list between the two selected lists
    pub fn request_create_staging(&mut self) -> BoardResult<StagingPair> {
        if !self.is_ready() {
            return Err(BoardError::NotReady);
        }

        let mut selected = self.selected.iter().copied();
        match (selected.next(), selected.next(), selected.next()) {
            (Some(a), Some(b), None) => {
                let pair = StagingPair::new(a, b);
                self.staging = Some(pair);
                self.selection_error = None;
                debug!(left = pair.left, right = pair.right, "staging list opened");
                Ok(pair)
            }
            _ => {
                let count = self.selected.len();
                self.selection_error = Some(SELECTION_COUNT_MESSAGE.to_string());
                warn!(selected = count, "staging list needs exactly two lists");
                Err(BoardError::InvalidSelectionCount { selected: count })
            }
        }
    }

    /// Reassign an item's list, subject to the adjacency rule
    pub fn move_item(&mut self, id: ItemId, target: ListLabel) -> BoardResult<()> {
        let pair = self.staging.ok_or(BoardError::StagingInactive)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::UnknownItem(id))?;

        let from = item.list_number;
        if !pair.allows(from, target) {
            warn!(%id, %from, to = %target, "illegal move rejected");
            return Err(BoardError::IllegalMove { id, from, to: target });
        }

        item.list_number = target;
        debug!(%id, %from, to = %target, "item moved");
        Ok(())
    }

    /// Revert to the last loaded snapshot and close the staging list
    pub fn cancel(&mut self) {
        self.items = self.snapshot.clone();
        self.staging = None;
        self.selected.clear();
        self.selection_error = None;
        debug!("changes discarded");
    }

    /// Close the staging list, keeping the current arrangement
    ///
    /// Nothing is persisted; the returned arrangement is for the caller to log.
    pub fn commit(&mut self) -> BoardResult<Vec<Item>> {
        if self.staging.take().is_none() {
            return Err(BoardError::StagingInactive);
        }
        info!(count = self.items.len(), "arrangement committed");
        Ok(self.items.clone())
    }

    /// Apply an [`Action`]
    pub fn dispatch(&mut self, action: Action) -> BoardResult<()> {
        match action {
            Action::ToggleSelection(label) => {
                self.toggle_selection(label);
                Ok(())
            }
            Action::CreateStaging => self.request_create_staging().map(|_| ()),
            Action::Move { id, target } => self.move_item(id, target),
            Action::Cancel => {
                self.cancel();
                Ok(())
            }
            Action::Commit => self.commit().map(|_| ()),
        }
    }
}
