//! List Labels
//!
//! Identifies which list an item belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire spelling of the staging list
pub const STAGING_WIRE_NAME: &str = "new";

/// Owning list of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawLabel", into = "RawLabel")]
pub enum ListLabel {
    /// A list that exists on the server (`list_number: 1`)
    Numbered(u32),
    /// The ephemeral list created from two selected lists (`list_number: "new"`)
    Staging,
}

impl ListLabel {
    pub fn is_staging(&self) -> bool {
        matches!(self, ListLabel::Staging)
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            ListLabel::Numbered(n) => Some(*n),
            ListLabel::Staging => None,
        }
    }

    /// Heading shown above the list box
    pub fn title(&self) -> String {
        match self {
            ListLabel::Numbered(n) => format!("List {}", n),
            ListLabel::Staging => "New List".to_string(),
        }
    }
}

impl fmt::Display for ListLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListLabel::Numbered(n) => write!(f, "{}", n),
            ListLabel::Staging => f.write_str(STAGING_WIRE_NAME),
        }
    }
}

impl From<u32> for ListLabel {
    fn from(n: u32) -> Self {
        ListLabel::Numbered(n)
    }
}

/// Arrow direction on an item row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Left => "⬅",
            Direction::Right => "➡",
        }
    }
}

// ========================
// Wire Representation
// ========================

/// `list_number` as it appears in JSON: a number, or a string
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Number(u32),
    Text(String),
}

impl TryFrom<RawLabel> for ListLabel {
    type Error = String;

    fn try_from(raw: RawLabel) -> Result<Self, Self::Error> {
        match raw {
            RawLabel::Number(n) => Ok(ListLabel::Numbered(n)),
            RawLabel::Text(s) if s == STAGING_WIRE_NAME => Ok(ListLabel::Staging),
            RawLabel::Text(s) => s
                .trim()
                .parse::<u32>()
                .map(ListLabel::Numbered)
                .map_err(|_| format!("unknown list label {:?}", s)),
        }
    }
}

impl From<ListLabel> for RawLabel {
    fn from(label: ListLabel) -> Self {
        match label {
            ListLabel::Numbered(n) => RawLabel::Number(n),
            ListLabel::Staging => RawLabel::Text(STAGING_WIRE_NAME.to_string()),
        }
    }
}
