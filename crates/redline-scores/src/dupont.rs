//! DuPont decomposition of return on equity.
//!
//! ROE = net margin × asset turnover × equity multiplier. Each factor is
//! reported independently; ROE only when all three resolve. ROE is the
//! product of the unrounded factors, and every output is then rounded to
//! [`DUPONT_DECIMALS`] places.

use crate::lifted::Metric;
use redline_data::FinancialStatement;

/// Decimal places for every decomposition output.
pub const DUPONT_DECIMALS: i32 = 6;

/// DuPont factors for one fiscal year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DuPont {
    /// Net income / revenue
    pub net_margin: Option<f64>,
    /// Revenue / total assets
    pub asset_turnover: Option<f64>,
    /// Total assets / stockholders equity
    pub equity_multiplier: Option<f64>,
    /// Product of the three factors
    pub roe: Option<f64>,
}

impl DuPont {
    /// Decompose one statement.
    pub fn compute(stmt: &FinancialStatement) -> Self {
        let total_assets = Metric::from(stmt.total_assets);
        let revenue = Metric::from(stmt.revenue);

        let net_margin = Metric::from(stmt.net_income).ratio(revenue);
        let asset_turnover = revenue.ratio(total_assets);
        let equity_multiplier = total_assets.ratio(Metric::from(stmt.stockholders_equity));
        let roe = net_margin * asset_turnover * equity_multiplier;

        Self {
            net_margin: net_margin.round_to(DUPONT_DECIMALS).value(),
            asset_turnover: asset_turnover.round_to(DUPONT_DECIMALS).value(),
            equity_multiplier: equity_multiplier.round_to(DUPONT_DECIMALS).value(),
            roe: roe.round_to(DUPONT_DECIMALS).value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_decomposition() {
        let stmt = FinancialStatement {
            net_income: Some(100.0),
            revenue: Some(1000.0),
            total_assets: Some(2000.0),
            stockholders_equity: Some(500.0),
            ..FinancialStatement::new("TEST", 2023)
        };
        let d = DuPont::compute(&stmt);

        assert_relative_eq!(d.net_margin.unwrap(), 0.1);
        assert_relative_eq!(d.asset_turnover.unwrap(), 0.5);
        assert_relative_eq!(d.equity_multiplier.unwrap(), 4.0);
        assert_relative_eq!(d.roe.unwrap(), 0.2);
    }

    #[test]
    fn test_roe_equals_product_within_rounding() {
        let stmt = FinancialStatement {
            net_income: Some(123.456),
            revenue: Some(987.654),
            total_assets: Some(3210.987),
            stockholders_equity: Some(777.777),
            ..FinancialStatement::new("TEST", 2023)
        };
        let d = DuPont::compute(&stmt);
        let product = d.net_margin.unwrap() * d.asset_turnover.unwrap() * d.equity_multiplier.unwrap();
        assert_relative_eq!(d.roe.unwrap(), product, epsilon = 1e-5);
        // Equals net income / equity
        assert_relative_eq!(d.roe.unwrap(), 123.456 / 777.777, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_equity_only_hides_multiplier_and_roe() {
        let stmt = FinancialStatement {
            net_income: Some(-50.0),
            revenue: Some(1000.0),
            total_assets: Some(2000.0),
            stockholders_equity: Some(0.0),
            ..FinancialStatement::new("TEST", 2023)
        };
        let d = DuPont::compute(&stmt);
        assert_relative_eq!(d.net_margin.unwrap(), -0.05);
        assert_relative_eq!(d.asset_turnover.unwrap(), 0.5);
        assert_eq!(d.equity_multiplier, None);
        assert_eq!(d.roe, None);
    }

    #[test]
    fn test_empty_statement() {
        assert_eq!(DuPont::compute(&FinancialStatement::new("TEST", 2023)), DuPont::default());
    }
}
