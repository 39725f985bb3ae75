use std::io::Write;
use std::num::NonZeroU32;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use savings_bond_history::{
    cli::Cli,
    history::{HistoryMode, walk_history},
    models::holding::load_holdings,
    providers::treasury_calc::{DEFAULT_ENDPOINT, TreasuryCalculator},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mode = if cli.all {
        HistoryMode::FullHistory
    } else {
        HistoryMode::CurrentMonthOnly
    };

    // Clap already enforces a 1.. range; this just avoids an unchecked cast.
    let pace = NonZeroU32::new(cli.pace_per_sec).ok_or("pace-per-sec must be at least 1")?;
    let endpoint = cli.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let calculator = TreasuryCalculator::with_options(endpoint, pace)?;

    // An unreadable, malformed, or empty holdings file is fatal; calculator
    // failures below only fail the holding they hit.
    let holdings = load_holdings(&cli.holdings_file)
        .map_err(|e| format!("{}: {}", cli.holdings_file.display(), e))?;
    if holdings.is_empty() {
        return Err(format!("{}: no holdings found", cli.holdings_file.display()).into());
    }

    let stdout = std::io::stdout();
    let mut success_count = 0;
    let mut error_count = 0;

    for holding in &holdings {
        let mut out = stdout.lock();
        let result = walk_history(&calculator, holding, mode, |row| {
            // Stdout is reserved for data rows; diagnostics go to stderr.
            writeln!(out, "{}", row.to_line())
        })
        .await;

        match result {
            Ok(_) => success_count += 1,
            Err(e) => {
                eprintln!("ERROR: {} - {}", holding.serial_number, e);
                error_count += 1;
            }
        }
    }

    eprintln!("SUMMARY: {} succeeded, {} failed", success_count, error_count);

    Ok(())
}
