//! Raw annual financial statement line items.

use serde::{Deserialize, Serialize};

/// One fiscal year of balance-sheet, income-statement and cash-flow items.
///
/// Every line item is independently optional. Downstream calculators treat a
/// missing item as "unknown" and never substitute a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Stock symbol
    pub symbol: String,
    /// Fiscal year
    pub fiscal_year: i32,

    // Balance Sheet
    /// Total assets
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total liabilities (net of minority interest)
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    /// Current assets
    #[serde(default)]
    pub current_assets: Option<f64>,
    /// Current liabilities
    #[serde(default)]
    pub current_liabilities: Option<f64>,
    /// Retained earnings
    #[serde(default)]
    pub retained_earnings: Option<f64>,
    /// Long-term debt
    #[serde(default)]
    pub long_term_debt: Option<f64>,
    /// Stockholders equity
    #[serde(default)]
    pub stockholders_equity: Option<f64>,
    /// Ordinary shares outstanding
    #[serde(default)]
    pub shares_outstanding: Option<f64>,

    // Income Statement
    /// Total revenue
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Net income
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Gross profit
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Earnings before interest and taxes
    #[serde(default)]
    pub ebit: Option<f64>,
    /// Operating income
    #[serde(default)]
    pub operating_income: Option<f64>,

    // Cash Flow
    /// Operating cash flow
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
}

impl FinancialStatement {
    /// Create an empty statement for a symbol and fiscal year.
    pub fn new(symbol: impl Into<String>, fiscal_year: i32) -> Self {
        Self {
            symbol: symbol.into(),
            fiscal_year,
            ..Self::default()
        }
    }

    /// EBIT, falling back to operating income when EBIT is not reported.
    pub const fn ebit_or_operating_income(&self) -> Option<f64> {
        match self.ebit {
            Some(ebit) => Some(ebit),
            None => self.operating_income,
        }
    }

    /// True when the statement carries a balance sheet (total assets present).
    pub const fn has_balance_sheet(&self) -> bool {
        self.total_assets.is_some()
    }
}
