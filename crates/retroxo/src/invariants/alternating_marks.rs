//! Alternating marks invariant: X and O take turns, X first.

use super::Invariant;
use crate::history::GameHistory;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: The mark added at step i is X when i is odd, O when i is
/// even (snapshot i is the board after move i, and X moves first).
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = if step % 2 == 0 { Player::X } else { Player::O };
                added_mark(&pair[0], &pair[1]) == Some(expected)
            })
    }

    fn description() -> &'static str {
        "Added marks alternate X, O, X, starting with X"
    }
}

/// The mark added between two snapshots, if exactly one cell was filled.
fn added_mark(
    before: &crate::types::Board,
    after: &crate::types::Board,
) -> Option<Player> {
    let mut added = None;

    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(player)) if added.is_none() => {
                added = Some(player);
            }
            (b, a) if b == a => {}
            _ => return None,
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = GameHistory::new();
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        game.play(Position::TopLeft).expect("valid move");
        game.play(Position::BottomRight).expect("valid move");
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_truncating_replay() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        game.play(Position::TopLeft).expect("valid move");
        game.jump_to(0).expect("valid jump");
        game.play(Position::BottomRight).expect("valid move");
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        // Rewrite X's opening move as O's.
        game.snapshots[1].set(Position::Center, Square::Occupied(Player::O));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_consecutive_same_mark_violates() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        game.play(Position::TopLeft).expect("valid move");
        // Rewrite O's reply as a second X mark.
        game.snapshots[2].set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
