//! Game model types.
//!
//! - `Shot` - a single hit/miss result
//! - `Round` - five shots
//! - `Game` - five rounds identified by their start time
//! - `GameRecord`, `RoundRecord` - stored JSON shape

mod record;
mod round;
mod shot;

pub use record::*;
pub use round::*;
pub use shot::*;
