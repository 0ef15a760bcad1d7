//! Joined per-entity, per-year records.

use super::{Disclosure, QuantMetrics, QuantScoreEntry};
use serde::{Deserialize, Serialize};

/// Joined quantitative and qualitative record for one entity-year.
///
/// An entity's history is a slice of these, strictly ascending by
/// `fiscal_year` with no duplicates. That ordering is a caller precondition
/// and is not checked by the engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualRecord {
    /// Entity symbol
    pub symbol: String,
    /// Fiscal year
    pub fiscal_year: i32,
    /// Coverage tier label
    pub tier: Option<String>,
    /// Filing form the disclosure was taken from (e.g. 10-K)
    pub filing_type: Option<String>,
    /// Quantitative scores
    pub quant: QuantMetrics,
    /// Qualitative disclosure fields
    pub disclosure: Disclosure,
}

impl AnnualRecord {
    /// Create an empty record for a symbol and fiscal year.
    pub fn new(symbol: impl Into<String>, fiscal_year: i32) -> Self {
        Self {
            symbol: symbol.into(),
            fiscal_year,
            ..Self::default()
        }
    }

    /// Attach quantitative scores.
    pub fn with_quant(mut self, quant: QuantMetrics) -> Self {
        self.quant = quant;
        self
    }

    /// Attach qualitative disclosure fields.
    pub fn with_disclosure(mut self, disclosure: Disclosure) -> Self {
        self.disclosure = disclosure;
        self
    }

    /// The quantitative part as a standalone score entry.
    pub fn quant_entry(&self) -> QuantScoreEntry {
        QuantScoreEntry::new(self.fiscal_year, self.quant.clone())
    }
}
