//! Side-by-side layout of overlapping events on a single day.
//!
//! Items are normalized, sorted, split into overlap-connected clusters and
//! packed into columns cluster by cluster. Each item gets a zero-based column
//! and the column count of its own cluster, so an isolated item always spans
//! the full width even on a busy day.
//!
//! The engine is a pure function over its input. It never fails: degenerate
//! ranges are treated as one-minute events and ranges past midnight are cut
//! at the end of the day.

mod cluster;
mod columns;
mod item;

pub use item::{LayoutResult, MINUTES_PER_DAY, TimedItem};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FamboardError;

/// Ordering applied to items that start at the same minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Longer items take the lower column; equal durations fall back to id.
    #[default]
    LongestFirst,
    /// Keep the caller's order for equal starts.
    InputOrder,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::LongestFirst => "longest_first",
            TieBreak::InputOrder => "input_order",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = FamboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "longest_first" => Ok(TieBreak::LongestFirst),
            "input_order" => Ok(TieBreak::InputOrder),
            other => Err(FamboardError::Config(format!(
                "Unknown tie break '{other}' (expected longest_first or input_order)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub tie_break: TieBreak,
}

/// Lay out one day's items with the default options.
pub fn layout_day(items: &[TimedItem]) -> Vec<LayoutResult> {
    layout_day_with(items, &LayoutOptions::default())
}

/// Lay out one day's items.
///
/// Output has one entry per input item, in layout order rather than input
/// order; callers re-associate results by id.
pub fn layout_day_with(items: &[TimedItem], options: &LayoutOptions) -> Vec<LayoutResult> {
    let clusters = clusters_with(items, options);
    let mut results = Vec::with_capacity(items.len());

    for cluster in &clusters {
        let (assigned, total_columns) = columns::assign_columns(cluster);

        results.extend(
            cluster
                .iter()
                .zip(assigned)
                .map(|(item, column)| LayoutResult {
                    id: item.id.clone(),
                    column,
                    total_columns,
                }),
        );
    }

    debug!(items = items.len(), clusters = clusters.len(), "laid out day");

    results
}

/// Normalized items grouped into maximal overlap-connected clusters, in layout order.
pub fn clusters(items: &[TimedItem]) -> Vec<Vec<TimedItem>> {
    clusters_with(items, &LayoutOptions::default())
}

pub fn clusters_with(items: &[TimedItem], options: &LayoutOptions) -> Vec<Vec<TimedItem>> {
    cluster::split_clusters(sorted(items, options.tie_break))
}

fn sorted(items: &[TimedItem], tie_break: TieBreak) -> Vec<TimedItem> {
    let mut normalized: Vec<TimedItem> = items.iter().map(TimedItem::normalized).collect();

    // sort_by is stable, so InputOrder keeps the caller's order for equal starts.
    normalized.sort_by(|a, b| {
        a.start_minutes
            .cmp(&b.start_minutes)
            .then_with(|| match tie_break {
                TieBreak::LongestFirst => b
                    .duration()
                    .cmp(&a.duration())
                    .then_with(|| a.id.cmp(&b.id)),
                TieBreak::InputOrder => Ordering::Equal,
            })
    });

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn item(id: &str, start: i32, end: i32) -> TimedItem {
        TimedItem::new(id, start, end)
    }

    fn by_id(results: Vec<LayoutResult>) -> HashMap<String, (usize, usize)> {
        results
            .into_iter()
            .map(|r| (r.id, (r.column, r.total_columns)))
            .collect()
    }

    fn hm(h: i32, m: i32) -> i32 {
        h * 60 + m
    }

    #[test]
    fn test_empty_day() {
        assert!(layout_day(&[]).is_empty());
    }

    #[test]
    fn test_overlapping_pair_and_isolated_item() {
        let items = vec![
            item("a", hm(9, 0), hm(10, 0)),
            item("b", hm(9, 30), hm(10, 30)),
            item("c", hm(11, 0), hm(12, 0)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout["a"], (0, 2));
        assert_eq!(layout["b"], (1, 2));
        assert_eq!(layout["c"], (0, 1));
    }

    #[test]
    fn test_identical_ranges_split_into_two_columns() {
        let items = vec![
            item("x", hm(14, 0), hm(15, 0)),
            item("y", hm(14, 0), hm(15, 0)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout["x"].1, 2);
        assert_eq!(layout["y"].1, 2);
        assert_ne!(layout["x"].0, layout["y"].0);
    }

    #[test]
    fn test_transitive_chain_shares_cluster_width() {
        let items = vec![
            item("a", hm(9, 0), hm(10, 0)),
            item("b", hm(9, 30), hm(10, 30)),
            item("c", hm(10, 15), hm(11, 0)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout["a"], (0, 2));
        assert_eq!(layout["b"], (1, 2));
        assert_eq!(layout["c"], (0, 2));
    }

    #[test]
    fn test_longer_item_anchors_left_on_equal_start() {
        let items = vec![
            item("short", hm(8, 0), hm(8, 30)),
            item("long", hm(8, 0), hm(10, 0)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout["long"], (0, 2));
        assert_eq!(layout["short"], (1, 2));
    }

    #[test]
    fn test_input_order_tie_break_keeps_caller_order() {
        let items = vec![
            item("short", hm(8, 0), hm(8, 30)),
            item("long", hm(8, 0), hm(10, 0)),
        ];
        let options = LayoutOptions {
            tie_break: TieBreak::InputOrder,
        };
        let layout = by_id(layout_day_with(&items, &options));

        assert_eq!(layout["short"], (0, 2));
        assert_eq!(layout["long"], (1, 2));
    }

    #[test]
    fn test_isolated_items_on_busy_day_get_full_width() {
        let items = vec![
            item("a", hm(9, 0), hm(10, 0)),
            item("b", hm(9, 0), hm(10, 0)),
            item("c", hm(9, 0), hm(10, 0)),
            item("lunch", hm(12, 0), hm(13, 0)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout["a"].1, 3);
        assert_eq!(layout["lunch"], (0, 1));
    }

    #[test]
    fn test_degenerate_ranges_behave_like_one_minute_events() {
        let items = vec![
            item("zero", hm(9, 0), hm(9, 0)),
            item("inverted", hm(9, 0), hm(8, 0)),
            item("after", hm(9, 1), hm(9, 30)),
        ];
        let layout = by_id(layout_day(&items));

        assert_eq!(layout.len(), 3);
        assert_eq!(layout["zero"].1, 2);
        assert_eq!(layout["inverted"].1, 2);
        // Both one-minute events end at 09:01, so "after" stands alone.
        assert_eq!(layout["after"], (0, 1));
    }

    #[test]
    fn test_result_is_independent_of_input_order() {
        let items = vec![
            item("a", hm(9, 0), hm(10, 0)),
            item("b", hm(9, 0), hm(10, 0)),
            item("c", hm(9, 30), hm(11, 0)),
            item("d", hm(10, 0), hm(10, 45)),
            item("e", hm(13, 0), hm(13, 5)),
        ];
        let mut reversed = items.clone();
        reversed.reverse();

        assert_eq!(by_id(layout_day(&items)), by_id(layout_day(&reversed)));
    }

    #[test]
    fn test_overlapping_items_never_share_a_column() {
        let items: Vec<TimedItem> = (0..20)
            .map(|i| {
                let start = (i * 37) % 600 + 420;
                item(&format!("e{i}"), start, start + 45 + (i % 4) * 30)
            })
            .collect();
        let layout = by_id(layout_day(&items));

        for a in &items {
            for b in &items {
                if a.id != b.id && a.overlaps(b) {
                    assert_ne!(layout[&a.id].0, layout[&b.id].0, "{} / {}", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_cluster_members_share_total_columns() {
        let items = vec![
            item("a", hm(9, 0), hm(12, 0)),
            item("b", hm(9, 15), hm(9, 45)),
            item("c", hm(9, 30), hm(10, 0)),
            item("d", hm(11, 0), hm(11, 30)),
        ];
        let results = layout_day(&items);

        for result in &results {
            assert_eq!(result.total_columns, 3);
        }
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let items = vec![item("dup", 60, 120), item("dup", 90, 150)];
        let results = layout_day(&items);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.total_columns == 2));
    }

    #[test]
    fn test_tie_break_parses_config_names() {
        assert_eq!("longest_first".parse::<TieBreak>().unwrap(), TieBreak::LongestFirst);
        assert_eq!("input_order".parse::<TieBreak>().unwrap(), TieBreak::InputOrder);
        assert_eq!(TieBreak::InputOrder.to_string(), "input_order");
        assert!(matches!(
            "shortest_first".parse::<TieBreak>(),
            Err(FamboardError::Config(_))
        ));
    }

    #[test]
    fn test_clusters_are_normalized() {
        let groups = clusters(&[item("late", 1400, 2000), item("early", 60, 60)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0], item("early", 60, 61));
        assert_eq!(groups[1][0], item("late", 1400, 1440));
    }
}
