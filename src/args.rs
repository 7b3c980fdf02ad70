//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "sellerscope",
    version,
    about = "Analyze an eBay seller from a listing link"
)]
pub struct Cli {
    /// Listing link to analyze. Runs once and prints the report unless --tui is given
    #[arg(long, value_name = "URL")]
    pub link: Option<String>,

    /// Open the interactive form, pre-filled with --link when present
    #[arg(long)]
    pub tui: bool,

    /// Probe the analysis service health endpoint and exit
    #[arg(long, conflicts_with_all = ["link", "tui"])]
    pub check: bool,

    /// Override the analysis service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "sellerscope=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// What the binary should do for a given command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Check,
    OneShot { link: String },
    Interactive { initial_link: Option<String> },
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.check {
            return Mode::Check;
        }
        match (&self.link, self.tui) {
            (Some(link), false) => Mode::OneShot { link: link.clone() },
            (link, _) => Mode::Interactive {
                initial_link: link.clone(),
            },
        }
    }

    /// Apply command line overrides on top of the loaded file config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
