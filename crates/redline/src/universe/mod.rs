//! Ticker universes used for entity classification.
//!
//! Membership in the financial universe is what selects the Altman Z″
//! variant; every other ticker is scored with the standard Z-Score.

pub mod financials;

pub use financials::{FINANCIAL_TICKERS, FinancialUniverse};

use redline_scores::EntityClass;

/// Trait for ticker universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s.eq_ignore_ascii_case(symbol))
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for FinancialUniverse {
    fn symbols(&self) -> Vec<String> {
        FINANCIAL_TICKERS.iter().map(|s| s.to_string()).collect()
    }

    fn contains(&self, symbol: &str) -> bool {
        Self::is_financial(symbol)
    }

    fn size(&self) -> usize {
        FINANCIAL_TICKERS.len()
    }
}

/// Classify a ticker for Z-Score variant selection.
pub fn classify(symbol: &str) -> EntityClass {
    if FinancialUniverse::is_financial(symbol) {
        EntityClass::Financial
    } else {
        EntityClass::NonFinancial
    }
}
