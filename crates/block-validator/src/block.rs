//! Category-tagged time blocks as the calendar layer stores them.
//!
//! The validator itself only ever sees [`Interval`]s; these records carry the
//! extra fields a day view keeps alongside them and know how to project down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// Title given to a block dropped without a label.
pub const DEFAULT_TITLE: &str = "Block";

/// Colour-coding category of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Work,
    Personal,
    Health,
    /// Fallback for anything unrecognised.
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Health,
        Category::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    /// Look up a category by id, falling back to [`Category::Other`].
    pub fn from_id(id: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_id(s))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_id(&s)
    }
}

/// A block on the day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Opaque record identifier assigned by the store.
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(flatten)]
    pub interval: Interval,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl TimeBlock {
    /// Build a block from a drop payload, filling in the default title and category.
    pub fn new(
        id: impl Into<String>,
        interval: Interval,
        title: Option<String>,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.unwrap_or_else(default_title),
            category: category.unwrap_or_default(),
            interval,
        }
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }
}

/// Project a list of blocks down to the intervals the validator works on.
pub fn intervals_of(blocks: &[TimeBlock]) -> Vec<Interval> {
    blocks.iter().map(TimeBlock::interval).collect()
}
