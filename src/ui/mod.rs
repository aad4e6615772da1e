//! Console rendering of poll results.

pub mod formatting;
pub mod page;

pub use formatting::{format_game_line, format_points};
pub use page::StatusPage;
