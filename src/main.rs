use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_export_command, handle_session_command, handle_transaction_command, ExportFormat,
    SessionCommands, TransactionCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::BalancePrinter;
use expense_tracker::services::Tracker;
use expense_tracker::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Record income and expenses per user and keep a running balance. \
                  Data is stored locally; logging in selects whose ledger you see."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Export the current user's ledger
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = open_file_store(&paths)?;

    let mut tracker = Tracker::new(&store);
    tracker.subscribe(BalancePrinter::new(settings.currency_symbol.clone()));

    match cli.command {
        Some(Commands::Session(cmd)) => handle_session_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut tracker, &settings, cmd)?
        }
        Some(Commands::Export { output, format }) => {
            handle_export_command(&mut tracker, output, format)?
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data store:     {}", paths.store_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  History limit:   {}", settings.history_limit);
        }
        None => {
            println!("Expense Tracker - personal income and expense ledger");
            println!();
            println!("Run 'expense login <username>' to get started.");
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose` when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("expense_tracker={},expense={}", level, level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
