//! Stream URI validation.
//!
//! Only the link is checked; nothing is streamed.

mod uri;

pub use uri::*;
