//! retroxo - tic-tac-toe with snapshot history and time travel.
//!
//! The game is modeled as an append-only list of board snapshots plus a
//! cursor selecting the current one:
//!
//! - [`GameHistory`] applies moves (cloning the current snapshot and
//!   discarding any forked future) and jumps the cursor to past steps.
//! - [`check_winner`] is the pure win rule over the 8 fixed lines.
//!
//! Whose turn it is derives from cursor parity and is never stored.
//!
//! # Example
//!
//! ```
//! use retroxo::{GameHistory, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//!
//! // Rewind to the opening and branch off.
//! game.jump_to(1)?;
//! game.play(Position::BottomRight)?;
//!
//! assert_eq!(game.move_count(), 2);
//! assert_eq!(game.to_move(), Player::X);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod history;
mod position;
mod rules;
mod types;

pub mod invariants;

// Crate-level exports - move events and errors
pub use action::{Move, MoveError};

// Crate-level exports - history engine
pub use history::{GameHistory, GameStatus, JumpError};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - board types
pub use types::{Board, Player, Square};

// Crate-level exports - rules
pub use rules::check_winner;

/// Alias for the glossary term: the value occupying a cell side.
pub type Mark = Player;
