use std::path::PathBuf;

use clap::Parser;

/// Fetches redemption values for U.S. savings bonds from the TreasuryDirect
/// calculator, one output line per (bond, month).
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Fetch the full monthly history of each bond instead of only the
    /// current month
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Holdings file: one `<series> <issue-date:YYYY-MM-DD> <serial>
    /// <face-value>` per line
    pub holdings_file: PathBuf,

    /// Override the calculator endpoint (e.g. a local test server)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum calculator requests per second
    #[arg(
        long = "pace-per-sec",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pace_per_sec: u32,
}
