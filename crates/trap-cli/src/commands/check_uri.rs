//! Stream link check.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use trap_core::StreamUri;

/// Validate an RTSP link
pub fn run(uri: &str) -> Result<()> {
    match StreamUri::parse(uri) {
        Some(parsed) => {
            println!(
                "{} Stream link received: {} (host {})",
                "✓".green(),
                parsed,
                parsed.authority.cyan()
            );
            Ok(())
        }
        None => bail!("Unsupported stream link: {} (expected rtsp:// or rtsps://)", uri.trim()),
    }
}
