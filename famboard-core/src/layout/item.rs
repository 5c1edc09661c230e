//! Input and output records of the layout engine.

use serde::{Deserialize, Serialize};

/// Minutes in a day; the exclusive upper bound of any layout.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A time-ranged item on a single day, in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedItem {
    #[serde(alias = "identifier")]
    pub id: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

impl TimedItem {
    pub fn new(id: impl Into<String>, start_minutes: i32, end_minutes: i32) -> Self {
        TimedItem {
            id: id.into(),
            start_minutes,
            end_minutes,
        }
    }

    /// Copy of this item with its range forced into the day and at least one minute long.
    pub fn normalized(&self) -> Self {
        let start = self.start_minutes.clamp(0, MINUTES_PER_DAY - 1);
        let end = self.end_minutes.min(MINUTES_PER_DAY).max(start + 1);

        TimedItem {
            id: self.id.clone(),
            start_minutes: start,
            end_minutes: end,
        }
    }

    pub fn duration(&self) -> i32 {
        self.end_minutes - self.start_minutes
    }

    /// Half-open overlap: touching ranges (10:00-11:00, 11:00-12:00) do not overlap.
    pub fn overlaps(&self, other: &TimedItem) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

/// Column placement for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub id: String,
    pub column: usize,
    pub total_columns: usize,
}
