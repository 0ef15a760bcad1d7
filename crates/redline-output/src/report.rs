//! Per-entity analysis report.

use chrono::{DateTime, Utc};
use redline_data::QuantScoreEntry;
use redline_diagnostics::{NlpDiffEntry, RedFlag};
use serde::{Deserialize, Serialize};

/// Everything computed for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Upper-cased ticker
    pub ticker: String,

    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,

    /// Quant scores, ascending by fiscal year
    pub quant_scores: Vec<QuantScoreEntry>,

    /// Narrative diffs, ascending by fiscal year
    pub nlp_diff: Vec<NlpDiffEntry>,

    /// Red flags in (fiscal year, rule) order
    pub red_flags: Vec<RedFlag>,
}

impl Report {
    /// Create a new report stamped with the current time.
    pub fn new(
        ticker: &str,
        quant_scores: Vec<QuantScoreEntry>,
        nlp_diff: Vec<NlpDiffEntry>,
        red_flags: Vec<RedFlag>,
    ) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            generated_at: Utc::now(),
            quant_scores,
            nlp_diff,
            red_flags,
        }
    }

    /// Fiscal years covered by the quant series.
    pub fn years(&self) -> Option<(i32, i32)> {
        let first = self.quant_scores.first()?.fiscal_year;
        let last = self.quant_scores.last()?.fiscal_year;
        Some((first, last))
    }
}
