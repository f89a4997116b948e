//! Snapshot history engine with time travel.
//!
//! The game is an append-only list of board snapshots plus a cursor
//! selecting which snapshot is current. Playing a move discards any
//! snapshots past the cursor, so only one continuation exists at a time.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derived view of the game at the cursor.
///
/// There is no draw state: a full board with no winner still reports
/// the next player, matching the status line contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner on the current snapshot.
    InProgress {
        /// Player whose turn it is.
        to_move: Player,
    },
    /// The current snapshot holds a completed line.
    Won {
        /// Player holding the line.
        winner: Player,
    },
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next Player: {}", to_move),
            GameStatus::Won { winner } => write!(f, "Winner: {}", winner),
        }
    }
}

/// Error that can occur when jumping to a history step.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step is not a recorded snapshot.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// The game: every board snapshot reached so far, plus a cursor.
///
/// Snapshot 0 is the empty board; snapshot i is the board after move i.
/// The cursor selects the snapshot that is displayed and that the next
/// move builds on. Whose turn it is falls out of cursor parity, so
/// jumping never needs to fix up a stored turn flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl GameHistory {
    /// Creates a history holding a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns all recorded snapshots in move order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the number of moves applied to reach the displayed state.
    ///
    /// Equals the cursor: snapshot i is reached after i moves.
    pub fn move_count(&self) -> usize {
        self.cursor
    }

    /// Returns the player whose turn it is at the cursor.
    ///
    /// X when an even number of moves have completed, O otherwise.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current())
    }

    /// Returns the derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Won { winner },
            None => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Discards snapshots past the cursor, appends a new snapshot with
    /// the mark placed, and advances the cursor to the new end.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the current snapshot already has
    /// a winner, or `MoveError::SquareOccupied` if the cell is taken.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.current().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.to_move();

        // Drop the forked future before extending the timeline.
        self.snapshots.truncate(self.cursor + 1);

        let mut board = self.current().clone();
        board.set(position, Square::Occupied(player));
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;

        debug!(%player, %position, cursor = self.cursor, "Move applied");

        crate::invariants::assert_invariants(self);

        Ok(Move::new(player, position))
    }

    /// Moves the cursor to a recorded step.
    ///
    /// Never touches the snapshot list. Jumping to any recorded step is
    /// legal, including the empty board or a post-win board.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::StepOutOfRange` if `step` exceeds the last
    /// recorded snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.snapshots.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            });
        }

        self.cursor = step;
        debug!(step, "Jumped to snapshot");

        Ok(())
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_rooted_at_empty_board() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_play_alternates_marks() {
        let mut game = GameHistory::new();
        let first = game.play(Position::Center).expect("valid move");
        assert_eq!(first.player(), Player::X);
        let second = game.play(Position::TopLeft).expect("valid move");
        assert_eq!(second.player(), Player::O);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_play_occupied_square_rejected() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        let result = game.play(Position::Center);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        // Rejected moves leave the history untouched.
        assert_eq!(game.len(), 2);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        let result = game.jump_to(5);
        assert_eq!(result, Err(JumpError::StepOutOfRange { step: 5, len: 2 }));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_jump_does_not_touch_snapshots() {
        let mut game = GameHistory::new();
        game.play(Position::Center).expect("valid move");
        game.play(Position::TopLeft).expect("valid move");
        game.jump_to(0).expect("valid jump");
        assert_eq!(game.len(), 3);
        assert_eq!(game.current(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_status_display_matches_status_line() {
        let mut game = GameHistory::new();
        assert_eq!(game.status().to_string(), "Next Player: X");
        game.play(Position::Center).expect("valid move");
        assert_eq!(game.status().to_string(), "Next Player: O");
    }
}
