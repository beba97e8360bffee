//! In-progress game state.
//!
//! - `GameSession` - 5x5 grid of optional shots with round/shot cursors
//! - `Position` - cursor inside the grid
//! - `Progress` - outcome of a transition

mod game_session;
mod progress;

pub use game_session::*;
pub use progress::*;
