//! Response envelopes.

use redline_data::{QuantScoreEntry, TickerSummary};
use redline_diagnostics::{NlpDiffEntry, RedFlag};
use serde::{Deserialize, Serialize};

/// Quant score series for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantScoresResponse {
    /// Upper-cased ticker
    pub ticker: String,
    /// One entry per fiscal year, ascending
    pub series: Vec<QuantScoreEntry>,
}

impl QuantScoresResponse {
    /// Create a new response.
    pub fn new(ticker: &str, series: Vec<QuantScoreEntry>) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            series,
        }
    }
}

/// Narrative diff series for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpDiffResponse {
    /// Upper-cased ticker
    pub ticker: String,
    /// One entry per fiscal year, ascending
    pub series: Vec<NlpDiffEntry>,
}

impl NlpDiffResponse {
    /// Create a new response.
    pub fn new(ticker: &str, series: Vec<NlpDiffEntry>) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            series,
        }
    }
}

/// Red flags for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagsResponse {
    /// Upper-cased ticker
    pub ticker: String,
    /// Flags in (fiscal year, rule) order
    pub flags: Vec<RedFlag>,
    /// Number of flags
    pub total: usize,
}

impl RedFlagsResponse {
    /// Create a new response; `total` is taken from `flags`.
    pub fn new(ticker: &str, flags: Vec<RedFlag>) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            total: flags.len(),
            flags,
        }
    }
}

/// Coverage of one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerMeta {
    /// Upper-cased ticker
    pub ticker: String,
    /// Coverage tier label
    pub tier: Option<String>,
    /// Number of fiscal years with joined records
    pub years_available: usize,
}

impl From<TickerSummary> for TickerMeta {
    fn from(summary: TickerSummary) -> Self {
        Self {
            ticker: summary.symbol.to_uppercase(),
            tier: summary.tier,
            years_available: summary.years_available,
        }
    }
}

/// Every covered ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerListResponse {
    /// Tickers in alphabetical order
    pub tickers: Vec<TickerMeta>,
    /// Number of tickers
    pub total: usize,
}

impl TickerListResponse {
    /// Create a new response; `total` is taken from `tickers`.
    pub fn new(tickers: Vec<TickerMeta>) -> Self {
        Self {
            total: tickers.len(),
            tickers,
        }
    }
}

impl FromIterator<TickerSummary> for TickerListResponse {
    fn from_iter<I: IntoIterator<Item = TickerSummary>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(TickerMeta::from).collect())
    }
}
