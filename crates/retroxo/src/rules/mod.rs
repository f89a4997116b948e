//! Game rules.

mod win;

pub use win::check_winner;
