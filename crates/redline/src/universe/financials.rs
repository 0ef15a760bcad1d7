//! Financial-sector tickers.

/// Tickers scored with the Altman Z″ (prime) variant.
pub const FINANCIAL_TICKERS: [&str; 15] = [
    "JPM", "BAC", "GS", "V", "MA", "AXP", "BLK", "MS", "C", "PYPL", "SQ", "WFC", "USB", "PNC",
    "SCHW",
];

/// Banks, payment networks and asset managers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinancialUniverse;

impl FinancialUniverse {
    /// Whether a symbol belongs to the financial universe (case-insensitive).
    pub fn is_financial(symbol: &str) -> bool {
        let symbol = symbol.trim();
        FINANCIAL_TICKERS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_financial() {
        assert!(FinancialUniverse::is_financial("C"));
        assert!(FinancialUniverse::is_financial(" gs "));
        assert!(!FinancialUniverse::is_financial("CRM"));
        assert!(!FinancialUniverse::is_financial("CC"));
    }
}
