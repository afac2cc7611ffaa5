use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use table_view::{BacktestColumn, HoldingColumn, StockColumn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod display;

/// The main entry point for the Passive Wealth dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment overrides (APP_*, DATABASE_URL) may live in a .env file.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(dotenv_loaded, "Logging initialised.");

    let cli = Cli::parse();
    let settings = configuration::load_config(&cli.config)?;

    match cli.command {
        Commands::Stocks(args) => commands::handle_stocks(args, &settings, cli.json).await,
        Commands::Backtests(args) => commands::handle_backtests(args, &settings, cli.json).await,
        Commands::Momentum(args) => commands::handle_momentum(args, &settings, cli.json).await,
        Commands::Search(args) => commands::handle_search(args, &settings, cli.json).await,
        Commands::History(args) => commands::handle_history(args, &settings, cli.json).await,
        Commands::Serve => web_server::run_server(settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// AI-ranked stock tables, backtest history and the momentum portfolio.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Print the rendered page as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top-stocks table.
    Stocks(StocksArgs),
    /// Show the backtest history with its header statistics.
    Backtests(BacktestsArgs),
    /// Show the momentum portfolio: track record, chart and one quarter's holdings.
    Momentum(MomentumArgs),
    /// Find stocks by symbol or company name.
    Search(SearchArgs),
    /// Show a stock's daily prices and its change over recent days.
    History(HistoryArgs),
    /// Serve the dashboard API over HTTP.
    Serve,
}

/// Page, direction and filter options shared by every table.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,

    /// Page to show, starting at 1. Out-of-range pages are clamped.
    #[arg(long)]
    pub page: Option<usize>,

    /// Restrict a field to a range, e.g. `--filter ai-score=7:10` or `--filter returns=0:`.
    #[arg(long = "filter", value_name = "FIELD=MIN:MAX")]
    pub filters: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StocksArgs {
    /// Column to sort by (default: ai-score).
    #[arg(long, value_enum)]
    pub sort: Option<StockColumn>,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BacktestsArgs {
    /// Column to sort by (default: returns).
    #[arg(long, value_enum)]
    pub sort: Option<BacktestColumn>,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug, Clone)]
pub struct MomentumArgs {
    /// Quarter to list holdings for, e.g. `Q2-2024` (default: most recent).
    #[arg(long)]
    pub quarter: Option<String>,

    /// Viewport width in pixels used to pick the chart layout (default: from config).
    #[arg(long)]
    pub width: Option<u32>,

    /// Column to sort holdings by (default: weight).
    #[arg(long, value_enum)]
    pub sort: Option<HoldingColumn>,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for in symbols and company names.
    pub query: String,
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Stock symbol, e.g. `INFY`.
    pub symbol: String,

    /// Calendar days to look back, 1 to 365.
    #[arg(long, default_value_t = web_server::handlers::DEFAULT_HISTORY_DAYS)]
    pub days: u32,
}
