//! Main entry point for dayrange
//!
//! This binary supports both CLI and GUI modes:
//! - CLI mode: when any arguments are given
//! - GUI mode: when started without arguments

use anyhow::{Result, anyhow};

fn main() -> Result<()> {
    if dayrange_cli::should_run_cli_mode() {
        dayrange_cli::run().map_err(|e| anyhow!(e))?;
    } else {
        dayrange_gui::run()?;
    }

    Ok(())
}
