//! Ingest pipeline: CSV files into the store, then rescoring.
//!
//! Every symbol with stored statements is rescored after loading, so a new
//! market-cap file or a changed listing year takes effect without
//! re-reading statements.

use indicatif::ProgressBar;
use redline::Analyzer;
use redline::data::DataError;
use redline::data::csv_io::{load_insights, load_market_caps, load_statements};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error type for ingest operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum IngestError {
    /// An input file could not be read or parsed.
    #[error("{path}: {source}")]
    Source {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: DataError,
    },
    /// Store or scoring error.
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Input files for one ingest run.
#[derive(Debug, Clone, Default)]
pub(crate) struct IngestSources {
    /// Raw statements CSV
    pub statements: Option<PathBuf>,
    /// Filing insights CSV
    pub insights: Option<PathBuf>,
    /// Market caps CSV
    pub market_caps: Option<PathBuf>,
}

/// Counts reported after an ingest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IngestSummary {
    pub statements: usize,
    pub insights: usize,
    pub market_caps: usize,
    pub symbols: usize,
    pub years_scored: usize,
}

/// Parse a `SYMBOL=YEAR` listing floor.
pub(crate) fn parse_ipo_floor(s: &str) -> Result<(String, i32), String> {
    let (symbol, year) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=YEAR, got '{}'", s))?;
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(format!("missing symbol in '{}'", s));
    }
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid year in '{}': {}", s, e))?;
    Ok((symbol, year))
}

fn source_error(path: &Path) -> impl FnOnce(DataError) -> IngestError + '_ {
    move |source| IngestError::Source {
        path: path.to_path_buf(),
        source,
    }
}

/// Load the given files and rescore every stored symbol.
pub(crate) fn run_ingest(
    analyzer: &Analyzer,
    sources: &IngestSources,
    ipo_floors: &HashMap<String, i32>,
    progress: Option<&ProgressBar>,
) -> Result<IngestSummary, IngestError> {
    let mut summary = IngestSummary::default();

    if let Some(path) = &sources.statements {
        let statements = load_statements(path).map_err(source_error(path))?;
        analyzer.ingest_statements(&statements)?;
        summary.statements = statements.len();
    }

    if let Some(path) = &sources.insights {
        let insights = load_insights(path).map_err(source_error(path))?;
        analyzer.ingest_insights(&insights)?;
        summary.insights = insights.len();
    }

    if let Some(path) = &sources.market_caps {
        let caps = load_market_caps(path).map_err(source_error(path))?;
        analyzer.ingest_market_caps(&caps)?;
        summary.market_caps = caps.len();
    }

    let symbols = analyzer.store().statement_symbols()?;
    if let Some(pb) = progress {
        pb.set_length(symbols.len() as u64);
        pb.set_message("Scoring...");
    }

    for symbol in &symbols {
        if let Some(pb) = progress {
            pb.set_message(format!("Scoring {}", symbol));
        }
        let floor = ipo_floors.get(&symbol.to_uppercase()).copied();
        summary.years_scored += analyzer.rescore(symbol, floor)?;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    summary.symbols = symbols.len();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline::data::SqliteStore;
    use rstest::rstest;

    #[rstest]
    #[case("ABNB=2021", "ABNB", 2021)]
    #[case(" snow = 2020 ", "SNOW", 2020)]
    fn test_parse_ipo_floor(#[case] input: &str, #[case] symbol: &str, #[case] year: i32) {
        assert_eq!(parse_ipo_floor(input).unwrap(), (symbol.to_string(), year));
    }

    #[rstest]
    #[case("ABNB")]
    #[case("=2021")]
    #[case("ABNB=twenty")]
    fn test_parse_ipo_floor_rejects(#[case] input: &str) {
        assert!(parse_ipo_floor(input).is_err());
    }

    #[test]
    fn test_run_ingest_from_files() {
        let dir = std::env::temp_dir().join("redline_ingest_test");
        std::fs::create_dir_all(&dir).unwrap();
        let statements = dir.join("statements.csv");
        std::fs::write(
            &statements,
            "symbol,fiscal_year,total_assets,net_income\nsnow,2019,100,-10\nsnow,2020,120,-5\n",
        )
        .unwrap();

        let analyzer = Analyzer::new(SqliteStore::in_memory().unwrap());
        let sources = IngestSources {
            statements: Some(statements),
            ..IngestSources::default()
        };
        let floors = HashMap::from([("SNOW".to_string(), 2020)]);
        let summary = run_ingest(&analyzer, &sources, &floors, None).unwrap();

        assert_eq!(summary.statements, 2);
        assert_eq!(summary.symbols, 1);
        assert_eq!(summary.years_scored, 1);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_run_ingest_reports_bad_file() {
        let analyzer = Analyzer::new(SqliteStore::in_memory().unwrap());
        let sources = IngestSources {
            insights: Some(PathBuf::from("/nonexistent/insights.csv")),
            ..IngestSources::default()
        };
        let err = run_ingest(&analyzer, &sources, &HashMap::new(), None).unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/insights.csv"));
    }
}
