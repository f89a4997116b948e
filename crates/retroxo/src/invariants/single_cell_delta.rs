//! Single-cell delta invariant: each move fills exactly one empty cell.

use super::Invariant;
use crate::history::GameHistory;
use crate::position::Position;
use crate::types::Square;

/// Invariant: Each successive snapshot differs from its predecessor in
/// exactly one cell, which transitions from empty to occupied.
///
/// No move erases a mark, overwrites a mark, or fills two cells.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| match delta(&pair[0], &pair[1]) {
                Some(changed) => changed
                    .iter()
                    .all(|&pos| pair[0].get(pos) == Square::Empty),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}

/// Positions that differ between two boards, or None unless exactly one.
fn delta(
    before: &crate::types::Board,
    after: &crate::types::Board,
) -> Option<Vec<Position>> {
    let changed: Vec<Position> = Position::ALL
        .iter()
        .copied()
        .filter(|&pos| before.get(pos) != after.get(pos))
        .collect();

    if changed.len() == 1 { Some(changed) } else { None }
}
