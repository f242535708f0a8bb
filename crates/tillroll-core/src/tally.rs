//! Per-item sale counting.

use std::collections::HashMap;

use crate::types::{Item, Sale};

/// Occurrence count per item. Items that never sold are absent, not zero.
pub type TallyTable = HashMap<Item, u64>;

/// Count how many times each item occurs in `stream`.
pub fn tally(stream: &[Sale]) -> TallyTable {
    let mut table = TallyTable::new();
    for sale in stream {
        *table.entry(sale.item).or_insert(0) += 1;
    }
    table
}

/// The best-selling entry of a tally table, or `None` for an empty table.
///
/// On a tie the winner is whichever entry the table's iteration happens to
/// present first. That order-dependence is inherited from the unordered map
/// and deliberately left in place; a caller that needs a total order must
/// impose its own.
pub fn most_sold(table: &TallyTable) -> Option<(Item, u64)> {
    let mut best: Option<(Item, u64)> = None;
    for (&item, &count) in table {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((item, count)),
        }
    }
    best
}
