//! Command-line interface and logging bootstrap.
//!
//! The screen owns the terminal while the form is open, so diagnostics go
//! to a file instead of stderr; without `--log-file` they are discarded.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Connect a calendar account from your terminal.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "berth",
    version,
    about = "Connect a calendar account from your terminal"
)]
pub struct Cli {
    /// Append diagnostic logs to this file
    #[arg(long, env = "BERTH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "berth=debug"
    #[arg(long, default_value = "info", env = "BERTH_LOG")]
    pub log_filter: String,

    /// Run in the main terminal buffer instead of the alternate screen
    ///
    /// Useful for debugging: the final frame stays visible after exit.
    #[arg(long, env = "BERTH_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,
}

/// Installs the global tracing subscriber per the CLI flags.
pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&cli.log_filter)
        .with_context(|| format!("invalid log filter {:?}", cli.log_filter))?;

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_contract_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_keep_the_alt_screen_and_info_filter() {
        let cli = Cli::try_parse_from(["berth"]).expect("bare invocation parses");
        assert!(!cli.no_alt_screen);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_filter, "info");
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "berth",
            "--no-alt-screen",
            "--log-file",
            "/tmp/berth.log",
            "--log-filter",
            "berth=debug",
        ])
        .expect("flags parse");
        assert!(cli.no_alt_screen);
        assert_eq!(cli.log_file.as_deref(), Some(std::path::Path::new("/tmp/berth.log")));
        assert_eq!(cli.log_filter, "berth=debug");
    }
}
