//! nsedash CLI - Terminal dashboard for NSE stocks and the NIFTY 50 index.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use nsedash_lib::Period;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;
mod session;

use config::AppConfig;
use display::{Format, parse_period};
use session::Session;

#[derive(Parser)]
#[command(name = "nsedash")]
#[command(about = "Terminal dashboard for NSE stocks and the NIFTY 50 index", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available stocks and the benchmark index
    List {
        /// Search pattern (symbol or name)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the benchmark index's previous and latest close
    Overview,

    /// Show key metrics, moving averages and benchmark comparison for a stock
    Report {
        /// Stock symbol (e.g., RELIANCE or RELIANCE.NS)
        symbol: String,

        /// History period (1mo, 3mo, 6mo, 1y, 2y, 5y)
        #[arg(short, long, default_value = "1mo", value_parser = parse_period)]
        period: Period,
    },

    /// Compare the normalized performance of the first N stocks
    Compare {
        /// History period (1mo, 3mo, 6mo, 1y, 2y, 5y)
        #[arg(short, long, default_value = "1mo", value_parser = parse_period)]
        period: Period,

        /// Number of stocks. Defaults to the configured compare count.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Write the normalized lines to this file instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for --output
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Ask a question about a stock (matched against provider metadata)
    Ask {
        /// Stock symbol
        symbol: String,

        /// Question, e.g. "currency" or "exchange name"
        question: String,

        /// History period used for the lookup
        #[arg(short, long, default_value = "1mo", value_parser = parse_period)]
        period: Period,
    },

    /// Export a stock's daily rows with moving averages and normalized close
    Export {
        /// Stock symbol
        symbol: String,

        /// History period (1mo, 3mo, 6mo, 1y, 2y, 5y)
        #[arg(short, long, default_value = "1mo", value_parser = parse_period)]
        period: Period,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the interactive dashboard
    Dashboard,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins unless `--quiet` is set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = if quiet {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = AppConfig::load(cli.config.as_deref())?;
    let mut session = Session::connect(config, cli.quiet)?;

    match command {
        Commands::List { search } => commands::list::list_symbols(search.as_deref()),
        Commands::Overview => commands::overview::show_overview(&mut session).await,
        Commands::Report { symbol, period } => {
            commands::report::show_report(&mut session, &symbol, period).await
        }
        Commands::Compare {
            period,
            count,
            output,
            format,
        } => commands::compare::compare_top(&mut session, period, count, output, format).await,
        Commands::Ask {
            symbol,
            question,
            period,
        } => commands::ask::ask(&mut session, &symbol, &question, period).await,
        Commands::Export {
            symbol,
            period,
            format,
            output,
        } => {
            commands::export::export(&mut session, &symbol, period, format, output, cli.quiet)
                .await
        }
        Commands::Dashboard => commands::dashboard::run_dashboard(&mut session).await,
    }
}
