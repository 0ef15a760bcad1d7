//! Redline CLI binary.
//!
//! Provides command-line interface for ingesting annual filings data and
//! querying quant scores, narrative diffs and red flags.

mod integration;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use integration::ingest::{IngestSources, parse_ipo_floor, run_ingest};
use integration::store_manager::{open_store, store_path};
use redline::Analyzer;
use redline::diagnostics::{RuleId, catalogue, rule_info};
use redline::output::{EntitySummary, ExportFormat, Exporter};
use render::Table;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "redline")]
#[command(about = "Redline: quant scores, narrative diffs and red flags", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "REDLINE_DB")]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
    PrettyJson,
    Csv,
}

impl OutputFormat {
    const fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Json => Some(ExportFormat::Json),
            Self::PrettyJson => Some(ExportFormat::PrettyJson),
            Self::Csv => Some(ExportFormat::Csv),
            Self::Text | Self::Markdown => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load CSV data and rescore every stored symbol
    Ingest {
        /// Financial statements CSV
        #[arg(long)]
        statements: Option<PathBuf>,

        /// Filing insights CSV
        #[arg(long)]
        insights: Option<PathBuf>,

        /// Market caps CSV (symbol,market_cap)
        #[arg(long)]
        market_caps: Option<PathBuf>,

        /// First fiscal year to score for a symbol (repeatable)
        #[arg(long = "ipo-floor", value_name = "SYMBOL=YEAR", value_parser = parse_ipo_floor)]
        ipo_floors: Vec<(String, i32)>,
    },

    /// List covered tickers
    Tickers {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show quant scores for a ticker
    Scores {
        /// Stock symbol
        ticker: String,

        /// Include scored years without a filing insight
        #[arg(long)]
        all_years: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the year-over-year narrative diff for a ticker
    NlpDiff {
        /// Stock symbol
        ticker: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show red flags for a ticker
    RedFlags {
        /// Stock symbol
        ticker: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Full report for a ticker
    Report {
        /// Stock symbol
        ticker: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the red-flag rules, or describe one
    Rules {
        /// Rule identifier (e.g. RF-003)
        id: Option<RuleId>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show store location and row counts
    Stats,

    /// Delete stored data
    Clear {
        /// Only delete this symbol
        #[arg(long)]
        symbol: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Rules { id, format } = cli.command {
        let rules = match id {
            Some(id) => vec![rule_info(id).ok_or_else(|| format!("{} is not in the rule battery", id))?],
            None => catalogue(),
        };
        return match format {
            OutputFormat::Text | OutputFormat::Markdown => {
                print!("{}", render::rules_table(&rules).render(format == OutputFormat::Markdown));
                Ok(())
            }
            _ => Err(format!("rules can only be listed as text or markdown, not {:?}", format).into()),
        };
    }

    let analyzer = Analyzer::new(open_store(cli.db.as_deref())?);

    match cli.command {
        Commands::Ingest {
            statements,
            insights,
            market_caps,
            ipo_floors,
        } => {
            let sources = IngestSources {
                statements,
                insights,
                market_caps,
            };
            ingest(&analyzer, &sources, ipo_floors.into_iter().collect())?;
        }
        Commands::Tickers { format } => {
            let response = analyzer.tickers()?;
            emit(&response, format, || render::tickers_table(&response))?;
        }
        Commands::Scores {
            ticker,
            all_years,
            format,
        } => {
            let response = if all_years {
                analyzer.scored_years(&ticker)?
            } else {
                analyzer.quant_scores(&ticker)?
            };
            emit(&response, format, || render::quant_table(&response))?;
        }
        Commands::NlpDiff { ticker, format } => {
            let response = analyzer.nlp_diff(&ticker)?;
            emit(&response, format, || render::nlp_table(&response))?;
        }
        Commands::RedFlags { ticker, format } => {
            let response = analyzer.red_flags(&ticker)?;
            emit(&response, format, || render::flags_table(&response))?;
        }
        Commands::Report {
            ticker,
            format,
            output,
        } => {
            let report = analyzer.report(&ticker)?;
            let content = match format.export_format() {
                Some(export) => report.export_to_string(export)?,
                None => {
                    let summary = EntitySummary::from_report(&report);
                    if format == OutputFormat::Markdown {
                        summary.to_markdown()
                    } else {
                        summary.to_ascii_table()
                    }
                }
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
        Commands::Stats => {
            print_stats(&analyzer, cli.db.as_deref())?;
        }
        Commands::Clear { symbol } => match symbol {
            Some(symbol) => {
                analyzer.store().clear_symbol(&symbol)?;
                println!("Cleared stored data for {}", symbol.to_uppercase());
            }
            None => {
                analyzer.store().clear_all()?;
                println!("Cleared all stored data");
            }
        },
        Commands::Rules { .. } => {}
    }

    Ok(())
}

/// Print a response in the requested format.
fn emit<T: Exporter>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> Table,
) -> Result<(), Box<dyn std::error::Error>> {
    match format.export_format() {
        Some(export) => println!("{}", value.export_to_string(export)?.trim_end()),
        None => print!("{}", table().render(format == OutputFormat::Markdown)),
    }
    Ok(())
}

fn ingest(
    analyzer: &Analyzer,
    sources: &IngestSources,
    ipo_floors: HashMap<String, i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Loading CSV data...");

    let result = run_ingest(analyzer, sources, &ipo_floors, Some(&pb));
    pb.finish_and_clear();
    let summary = result?;

    println!("Ingest complete");
    println!("  Statements loaded:   {}", summary.statements);
    println!("  Insights loaded:     {}", summary.insights);
    println!("  Market caps loaded:  {}", summary.market_caps);
    println!(
        "  Years scored:        {} across {} symbols",
        summary.years_scored, summary.symbols
    );
    Ok(())
}

fn print_stats(analyzer: &Analyzer, db: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let stats = analyzer.store().get_stats()?;
    println!("Store location: {}", store_path(db).display());
    print!("{}", render::stats_table(&stats).to_text());
    Ok(())
}
