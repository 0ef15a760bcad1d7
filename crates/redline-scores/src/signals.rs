//! Intermediate ratios derived from raw statement line items.
//!
//! The Piotroski signals compare a fiscal year against the year before it,
//! so ratios are extracted for both years and carried as a [`RatioPair`].
//! A prior year with no statement yields a fully unknown ratio set.

use crate::lifted::Metric;
use redline_data::FinancialStatement;

/// Ratios for one fiscal year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialRatios {
    /// Net income / total assets
    pub roa: Metric,
    /// Operating cash flow
    pub operating_cash_flow: Metric,
    /// Operating cash flow / total assets
    pub cfo_to_assets: Metric,
    /// Long-term debt / total assets
    pub leverage: Metric,
    /// Current assets / current liabilities
    pub current_ratio: Metric,
    /// Gross profit / revenue
    pub gross_margin: Metric,
    /// Revenue / total assets
    pub asset_turnover: Metric,
    /// Shares outstanding
    pub shares_outstanding: Metric,
}

impl FinancialRatios {
    /// Extract ratios from one statement.
    pub fn from_statement(stmt: &FinancialStatement) -> Self {
        let total_assets = Metric::from(stmt.total_assets);
        let net_income = Metric::from(stmt.net_income);
        let revenue = Metric::from(stmt.revenue);
        let operating_cash_flow = Metric::from(stmt.operating_cash_flow);

        Self {
            roa: net_income.ratio(total_assets),
            operating_cash_flow,
            cfo_to_assets: operating_cash_flow.ratio(total_assets),
            leverage: Metric::from(stmt.long_term_debt).ratio(total_assets),
            current_ratio: Metric::from(stmt.current_assets)
                .ratio(Metric::from(stmt.current_liabilities)),
            gross_margin: Metric::from(stmt.gross_profit).ratio(revenue),
            asset_turnover: revenue.ratio(total_assets),
            shares_outstanding: Metric::from(stmt.shares_outstanding),
        }
    }
}

/// Ratios for a fiscal year and the year before it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioPair {
    /// Current fiscal year
    pub current: FinancialRatios,
    /// Prior fiscal year (all unknown when there is no prior statement)
    pub prior: FinancialRatios,
}

impl RatioPair {
    /// Extract ratios for `current` and an optional `prior` statement.
    pub fn extract(current: &FinancialStatement, prior: Option<&FinancialStatement>) -> Self {
        Self {
            current: FinancialRatios::from_statement(current),
            prior: prior.map(FinancialRatios::from_statement).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratios_from_full_statement() {
        let stmt = FinancialStatement {
            total_assets: Some(1000.0),
            net_income: Some(50.0),
            operating_cash_flow: Some(80.0),
            long_term_debt: Some(200.0),
            current_assets: Some(300.0),
            current_liabilities: Some(150.0),
            gross_profit: Some(400.0),
            revenue: Some(800.0),
            shares_outstanding: Some(10.0),
            ..FinancialStatement::new("TEST", 2023)
        };
        let r = FinancialRatios::from_statement(&stmt);

        assert_relative_eq!(r.roa.value().unwrap(), 0.05);
        assert_relative_eq!(r.cfo_to_assets.value().unwrap(), 0.08);
        assert_relative_eq!(r.leverage.value().unwrap(), 0.2);
        assert_relative_eq!(r.current_ratio.value().unwrap(), 2.0);
        assert_relative_eq!(r.gross_margin.value().unwrap(), 0.5);
        assert_relative_eq!(r.asset_turnover.value().unwrap(), 0.8);
        assert_eq!(r.shares_outstanding.value(), Some(10.0));
    }

    #[test]
    fn test_zero_assets_leaves_asset_ratios_unknown() {
        let stmt = FinancialStatement {
            total_assets: Some(0.0),
            net_income: Some(50.0),
            revenue: Some(100.0),
            gross_profit: Some(20.0),
            ..FinancialStatement::new("TEST", 2023)
        };
        let r = FinancialRatios::from_statement(&stmt);

        assert!(!r.roa.is_known());
        assert!(!r.asset_turnover.is_known());
        assert!(!r.leverage.is_known());
        assert_relative_eq!(r.gross_margin.value().unwrap(), 0.2);
    }

    #[test]
    fn test_missing_prior_is_all_unknown() {
        let current = FinancialStatement {
            total_assets: Some(10.0),
            ..FinancialStatement::new("TEST", 2023)
        };
        let pair = RatioPair::extract(&current, None);
        assert_eq!(pair.prior, FinancialRatios::default());
        assert!(!pair.prior.roa.is_known());
    }
}
