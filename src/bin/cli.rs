//! Courtside CLI
//!
//! Command-line interface for Courtside:
//! - Fetch both series from the data service and inspect them
//! - Compute win-ratio rows locally from a results CSV
//! - Check service status
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use courtside::chart::{format_row_date, ChartMatrix};
use courtside::client::{FetchResult, Fetcher, FetcherConfig};
use courtside::config::{generate_default_config, Config};
use courtside::slot::{FetchError, Slot};
use courtside::view::{HomeView, Series};
use courtside::{logging, standings};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NBA win/loss ratios: predictions vs. actual outcomes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data service URL (default: [client] base_url from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch series from the data service
    Fetch {
        /// Which series to fetch
        #[arg(short, long, value_enum, default_value_t = SeriesArg::Both)]
        series: SeriesArg,
    },

    /// Compute per-day win ratios from a game results CSV
    Standings {
        /// Path to CSV file (Date, Home Team Name, Away Team Name, Home Win)
        path: PathBuf,
    },

    /// Show data service status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Table,
    /// Chart matrix as JSON
    Json,
    /// Google Charts data table
    Google,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesArg {
    Predictions,
    Actual,
    Both,
}

impl SeriesArg {
    fn series(self) -> Vec<Series> {
        match self {
            SeriesArg::Predictions => vec![Series::Predictions],
            SeriesArg::Actual => vec![Series::Actual],
            SeriesArg::Both => Series::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, report) = Config::load_default();

    let mut logging_config = config.logging.clone();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    logging::init(&logging_config)?;
    report.log();

    let mut client_config = FetcherConfig::from(&config.client);
    if let Some(url) = &cli.api_url {
        client_config.base_url = url.clone();
    }

    match cli.command {
        Commands::Fetch { series } => {
            let requested = series.series();
            let fetcher = Arc::new(Fetcher::new(client_config)?);
            let mut set = fetcher.spawn(&requested);
            let mut view = HomeView::new();

            loop {
                tokio::select! {
                    next = set.next() => match next {
                        Some(FetchResult { series, result }) => view.resolve(series, result),
                        None => break,
                    },
                    _ = tokio::signal::ctrl_c() => {
                        set.cancel();
                        eprintln!("Cancelled");
                        break;
                    }
                }
            }

            let mut failures = 0;
            for series in requested {
                match view.slot(series) {
                    Slot::Loaded(matrix) => print_matrix(series.as_str(), matrix, cli.format)?,
                    Slot::Failed(e) => {
                        eprintln!("{}: {}", series, e);
                        failures += 1;
                    }
                    Slot::Pending => {
                        eprintln!("{}: not fetched", series);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} series could not be fetched", failures);
            }
        }

        Commands::Standings { path } => {
            let rows = standings::load_series(&path)?;
            let raw: Vec<_> = rows.iter().map(|row| row.to_raw()).collect();
            let matrix = ChartMatrix::transform(&raw)?;

            let label = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "standings".to_string());
            print_matrix(&label, &matrix, cli.format)?;
        }

        Commands::Status => {
            let base_url = client_config.base_url.clone();
            let fetcher = Fetcher::new(client_config)?;

            match fetcher.health().await {
                Ok(health) => {
                    println!("Courtside v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!();
                    for series in Series::ALL {
                        let entry = &health[series.as_str()];
                        println!(
                            "  {:<12} {:<6} {} days",
                            series.as_str(),
                            entry["status"].as_str().unwrap_or("-"),
                            entry["days"].as_u64().unwrap_or(0)
                        );
                        if let Some(error) = entry["error"].as_str() {
                            println!("               {}", error);
                        }
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Err(e @ FetchError::Status { .. }) => {
                    anyhow::bail!("API returned error: {}", e);
                }
                Err(e) => {
                    eprintln!("Cannot reach Courtside API at {}", base_url);
                    eprintln!();
                    eprintln!("Make sure the Courtside API server is running:");
                    eprintln!("  cargo run --bin courtside-api");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_matrix(label: &str, matrix: &ChartMatrix, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(matrix)?),
        OutputFormat::Google => {
            println!("{}", serde_json::to_string_pretty(&matrix.to_google_table())?)
        }
        OutputFormat::Table => print_summary(label, matrix),
    }
    Ok(())
}

fn print_summary(label: &str, matrix: &ChartMatrix) {
    println!("{}", label);
    println!("{}", "-".repeat(60));
    println!("  Game days: {}", matrix.row_count());

    match matrix.date_span() {
        Some((first, last)) => println!(
            "  Span:      {} .. {}",
            format_row_date(first),
            format_row_date(last)
        ),
        None => {
            println!("  No data");
            println!();
            return;
        }
    }

    if let Some((team, pct)) = matrix.leader() {
        println!("  Leader:    {} ({:.2}%)", team, pct);
    }

    if let Some(last) = matrix.rows().last() {
        let mut standings: Vec<(&str, f64)> = last
            .values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| matrix.series_label(i).map(|label| (label, *v)))
            .collect();
        standings.sort_by(|a, b| b.1.total_cmp(&a.1));

        println!();
        println!("  {:<4} {:<26} {:>8}", "#", "Team", "Win %");
        for (rank, (team, pct)) in standings.iter().enumerate() {
            println!("  {:<4} {:<26} {:>8.2}", rank + 1, team, pct);
        }
    }
    println!();
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["courtside", "fetch", "--series", "actual", "-f", "google"])
            .unwrap();
        assert!(cli.format == OutputFormat::Google);
        match cli.command {
            Commands::Fetch { series } => assert_eq!(series.series(), vec![Series::Actual]),
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["courtside", "status", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));

        let quiet = Cli::try_parse_from(["courtside", "status"]).unwrap();
        assert!(!quiet.verbose);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(3_700), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h 0m");
    }
}
