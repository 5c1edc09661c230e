//! Greedy first-fit column assignment within one cluster.

use super::item::TimedItem;

/// Assign each item of a sorted cluster to the first column whose last item it
/// does not overlap, opening a new column when none fits.
///
/// Returns the column of each item (same order as `cluster`) and the number of
/// columns opened.
pub(crate) fn assign_columns(cluster: &[TimedItem]) -> (Vec<usize>, usize) {
    // Index into `cluster` of the last item placed in each column.
    let mut column_tails: Vec<usize> = Vec::new();
    let mut assigned = Vec::with_capacity(cluster.len());

    for (idx, item) in cluster.iter().enumerate() {
        let free = column_tails
            .iter()
            .position(|&tail| !cluster[tail].overlaps(item));

        let column = match free {
            Some(column) => {
                column_tails[column] = idx;
                column
            }
            None => {
                column_tails.push(idx);
                column_tails.len() - 1
            }
        };
        assigned.push(column);
    }

    (assigned, column_tails.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, start: i32, end: i32) -> TimedItem {
        TimedItem::new(id, start, end)
    }

    #[test]
    fn test_single_item_uses_one_column() {
        assert_eq!(assign_columns(&[item("a", 0, 10)]), (vec![0], 1));
    }

    #[test]
    fn test_reuses_first_free_column() {
        let cluster = [
            item("a", 540, 600),
            item("b", 570, 630),
            item("c", 615, 660),
        ];
        assert_eq!(assign_columns(&cluster), (vec![0, 1, 0], 2));
    }

    #[test]
    fn test_three_way_overlap_opens_three_columns() {
        let cluster = [
            item("a", 540, 660),
            item("b", 550, 600),
            item("c", 560, 590),
            item("d", 600, 620),
        ];
        // "d" fits after "b" in column 1 ("a" still runs in column 0).
        assert_eq!(assign_columns(&cluster), (vec![0, 1, 2, 1], 3));
    }
}
