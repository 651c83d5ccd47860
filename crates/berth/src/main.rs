#![forbid(unsafe_code)]

//! # berth
//!
//! Terminal form for connecting an account to a calendar server.
//!
//! ## Usage
//!
//! ```bash
//! berth                                  # open the form
//! berth --log-file /tmp/berth.log       # keep diagnostics
//! berth --no-alt-screen                 # debug in the main buffer
//! ```

use anyhow::Context;
use clap::Parser;

use berth::cli::{self, Cli};
use berth::event::Program;
use berth::screen::FormScreen;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli)?;
    tracing::debug!("opening the connection form");

    Program::new(FormScreen::new())
        .alt_screen(!cli.no_alt_screen)
        .run()
        .context("failed to run the connection form")?;

    Ok(())
}
