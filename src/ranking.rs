use crate::models::{Entry, RankedEntry};
use std::cmp::Reverse;

/// Orders entries by sales, highest first, and numbers them from 1.
///
/// The sort is stable: equal sales keep insertion order and still get
/// distinct consecutive ranks.
pub fn rank(entries: &[Entry]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.sales));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            entry: entry.clone(),
            rank: index + 1,
        })
        .collect()
}

pub fn grand_winner(ranked: &[RankedEntry]) -> Option<&RankedEntry> {
    ranked.iter().find(|entry| entry.is_grand_winner())
}
