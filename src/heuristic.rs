//! Per-tile distance estimate.
//!
//! `DISTANCE[from][to]` is the number of flips needed to carry a tile from
//! slot `from` to slot `to` when every other tile is ignored. Summing it over
//! the ten tiles never overestimates the flips still needed.

use crate::puzzle::{ArrangementKey, SLOTS};

#[rustfmt::skip]
const DISTANCE: [[u8; SLOTS]; SLOTS] = [
    // top row
    [0, 2, 2, 4, 4,   1, 1, 1, 3, 3],
    [2, 0, 2, 2, 4,   1, 1, 1, 1, 3],
    [2, 2, 0, 2, 2,   1, 1, 1, 1, 1],
    [4, 2, 2, 0, 2,   3, 1, 1, 1, 1],
    [4, 4, 2, 2, 0,   3, 3, 1, 1, 1],
    // bottom row
    [1, 1, 1, 3, 3,   0, 2, 2, 4, 4],
    [1, 1, 1, 1, 3,   2, 0, 2, 2, 4],
    [1, 1, 1, 1, 1,   2, 2, 0, 2, 2],
    [3, 1, 1, 1, 1,   4, 2, 2, 0, 2],
    [3, 3, 1, 1, 1,   4, 4, 2, 2, 0],
];

pub fn distance(from: usize, to: usize) -> u8 {
    DISTANCE[from][to]
}

/// Sum over all slots of the distance from the slot to the slot its tile
/// belongs in. Zero exactly at the goal.
pub fn total_distance(key: ArrangementKey) -> u8 {
    (0..SLOTS)
        .map(|slot| distance(slot, key.value_at(slot) as usize))
        .sum()
}
