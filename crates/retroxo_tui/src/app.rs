//! Application state and logic.

use crossterm::event::KeyCode;
use retroxo::{GameHistory, Position};
use tracing::debug;

use crate::input;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The history entry list.
    History,
}

/// Main application state.
pub struct App {
    game: GameHistory,
    focus: Focus,
    board_cursor: Position,
    history_cursor: usize,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: GameHistory::new(),
            focus: Focus::Board,
            board_cursor: Position::Center,
            history_cursor: 0,
            status_message: "Next Player: X. Press 1-9 or navigate with arrows.".to_string(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the board cell cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Gets the selected history entry.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Dispatches a key press to the focused pane.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.play_at(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play_at(self.board_cursor),
                Focus::History => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.select_history_entry(key);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.board_cursor = input::move_cursor(self.board_cursor, key);
            }
            _ => {}
        }
    }

    /// Makes a move at the given position.
    fn play_at(&mut self, position: Position) {
        debug!(%position, "Making move");

        match self.game.play(position) {
            Ok(mov) => {
                self.history_cursor = self.game.move_count();
                self.status_message = format!("{}. {}", mov, self.game.status());
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Jumps to the selected history entry.
    fn jump_to_selected(&mut self) {
        debug!(step = self.history_cursor, "Jumping to history entry");

        match self.game.jump_to(self.history_cursor) {
            Ok(()) => {
                self.status_message = self.game.status().to_string();
            }
            Err(e) => {
                self.status_message = format!("Invalid jump: {}.", e);
            }
        }
    }

    /// Moves the history selection up or down.
    fn select_history_entry(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        self.history_cursor = match key {
            KeyCode::Up => self.history_cursor.saturating_sub(1),
            KeyCode::Down => (self.history_cursor + 1).min(last),
            _ => self.history_cursor,
        };
    }

    /// Toggles focus between the board and the history list.
    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameHistory::new();
        self.board_cursor = Position::Center;
        self.history_cursor = 0;
        self.focus = Focus::Board;
        self.status_message = "Next Player: X. Press 1-9 or navigate with arrows.".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retroxo::Player;

    #[test]
    fn test_digit_key_plays_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().move_count(), 1);
        assert!(!app.game().current().is_empty(Position::Center));
    }

    #[test]
    fn test_enter_plays_at_board_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert!(!app.game().current().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_occupied_cell_reports_in_status() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().move_count(), 1);
        assert!(app.status_message().starts_with("Invalid move:"));
    }

    #[test]
    fn test_jump_flow_rewinds_game() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('1'));

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.game().to_move(), Player::X);
        // The snapshot list is untouched by the jump.
        assert_eq!(app.game().len(), 3);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('9'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().len(), 1);
        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.history_cursor(), 0);
    }
}
