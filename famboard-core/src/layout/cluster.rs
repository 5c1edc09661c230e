//! Splitting a sorted day into overlap-connected clusters.

use super::item::TimedItem;

/// Group sorted, normalized items into maximal runs connected by overlap.
///
/// An item joins the open cluster while any earlier member is still running
/// at its start. Tracking the latest end seen so far is equivalent to keeping
/// the set of active items: that set is empty exactly when every member has
/// ended by the current start.
pub(crate) fn split_clusters(sorted: Vec<TimedItem>) -> Vec<Vec<TimedItem>> {
    let mut clusters = Vec::new();
    let mut current: Vec<TimedItem> = Vec::new();
    let mut latest_end = i32::MIN;

    for item in sorted {
        if !current.is_empty() && latest_end <= item.start_minutes {
            clusters.push(std::mem::take(&mut current));
        }

        latest_end = if current.is_empty() {
            item.end_minutes
        } else {
            latest_end.max(item.end_minutes)
        };
        current.push(item);
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}
