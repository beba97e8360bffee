//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod check_uri;
pub mod export;
pub mod history;
pub mod import;
pub mod play;
pub mod record;
pub mod reset;
pub mod show;
