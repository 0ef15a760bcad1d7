//! Altman Z-Score.
//!
//! Two variants, chosen by entity classification alone:
//!
//! - **standard**: `1.2·X1 + 1.4·X2 + 3.3·X3 + 0.6·X4 + 1.0·X5` with
//!   X4 = market cap / total liabilities and X5 = revenue / total assets.
//! - **prime** (Z"): `6.56·X1 + 3.26·X2 + 6.72·X3 + 1.05·X4` with
//!   X4 = book equity / total liabilities, so no market price is needed.
//!
//! X1 = working capital / total assets, X2 = retained earnings / total
//! assets, X3 = EBIT / total assets (operating income when EBIT is missing).

use crate::lifted::Metric;
use derive_more::Display;
use redline_data::{FinancialStatement, ZScoreVariant};
use serde::{Deserialize, Serialize};

/// Weights of the standard variant, X1..X5.
pub const STANDARD_WEIGHTS: [f64; 5] = [1.2, 1.4, 3.3, 0.6, 1.0];

/// Weights of the prime variant, X1..X4.
pub const PRIME_WEIGHTS: [f64; 4] = [6.56, 3.26, 6.72, 1.05];

/// Decimal places the score is rounded to.
pub const Z_SCORE_DECIMALS: i32 = 4;

/// Entity classification that selects the Z-Score variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityClass {
    /// Banks, brokers, payment networks and other financial-sector entities
    #[display("financial")]
    Financial,
    /// Everything else
    #[display("non-financial")]
    NonFinancial,
}

impl EntityClass {
    /// The Z-Score variant used for this class.
    pub const fn z_score_variant(self) -> ZScoreVariant {
        match self {
            Self::Financial => ZScoreVariant::Prime,
            Self::NonFinancial => ZScoreVariant::Standard,
        }
    }
}

/// Z-Score result. The variant is reported even when the score is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltmanZ {
    /// Score rounded to four decimals, if every ratio resolved
    pub score: Option<f64>,
    /// Formula variant
    pub variant: ZScoreVariant,
}

impl AltmanZ {
    /// Compute the score for one statement.
    ///
    /// `market_cap` is only used by the standard variant.
    pub fn compute(
        stmt: &FinancialStatement,
        market_cap: Option<f64>,
        variant: ZScoreVariant,
    ) -> Self {
        let total_assets = Metric::from(stmt.total_assets);
        let total_liabilities = Metric::from(stmt.total_liabilities);
        let working_capital =
            Metric::from(stmt.current_assets) - Metric::from(stmt.current_liabilities);

        let x1 = working_capital.ratio(total_assets);
        let x2 = Metric::from(stmt.retained_earnings).ratio(total_assets);
        let x3 = Metric::from(stmt.ebit_or_operating_income()).ratio(total_assets);

        let z = match variant {
            ZScoreVariant::Standard => {
                let x4 = Metric::from(market_cap).ratio(total_liabilities);
                let x5 = Metric::from(stmt.revenue).ratio(total_assets);
                let [w1, w2, w3, w4, w5] = STANDARD_WEIGHTS;
                Metric::weighted_sum(&[(w1, x1), (w2, x2), (w3, x3), (w4, x4), (w5, x5)])
            }
            ZScoreVariant::Prime => {
                let x4 = Metric::from(stmt.stockholders_equity).ratio(total_liabilities);
                let [w1, w2, w3, w4] = PRIME_WEIGHTS;
                Metric::weighted_sum(&[(w1, x1), (w2, x2), (w3, x3), (w4, x4)])
            }
        };

        Self {
            score: z.round_to(Z_SCORE_DECIMALS).value(),
            variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn statement() -> FinancialStatement {
        FinancialStatement {
            total_assets: Some(1000.0),
            total_liabilities: Some(500.0),
            current_assets: Some(400.0),
            current_liabilities: Some(200.0),
            retained_earnings: Some(300.0),
            ebit: Some(100.0),
            revenue: Some(1200.0),
            stockholders_equity: Some(500.0),
            ..FinancialStatement::new("TEST", 2023)
        }
    }

    #[test]
    fn test_standard_variant() {
        let z = AltmanZ::compute(&statement(), Some(2000.0), ZScoreVariant::Standard);
        // 1.2*0.2 + 1.4*0.3 + 3.3*0.1 + 0.6*4.0 + 1.0*1.2
        assert_relative_eq!(z.score.unwrap(), 4.59, epsilon = 1e-9);
        assert_eq!(z.variant, ZScoreVariant::Standard);
    }

    #[test]
    fn test_prime_variant_ignores_market_cap() {
        let z = AltmanZ::compute(&statement(), None, ZScoreVariant::Prime);
        // 6.56*0.2 + 3.26*0.3 + 6.72*0.1 + 1.05*1.0
        assert_relative_eq!(z.score.unwrap(), 4.012, epsilon = 1e-9);
        assert_eq!(z.variant, ZScoreVariant::Prime);
    }

    #[test]
    fn test_operating_income_fallback() {
        let mut stmt = statement();
        stmt.ebit = None;
        stmt.operating_income = Some(100.0);
        let z = AltmanZ::compute(&stmt, Some(2000.0), ZScoreVariant::Standard);
        assert_relative_eq!(z.score.unwrap(), 4.59, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_score_keeps_variant() {
        let z = AltmanZ::compute(&statement(), None, ZScoreVariant::Standard);
        assert_eq!(z.score, None);
        assert_eq!(z.variant, ZScoreVariant::Standard);

        let mut stmt = statement();
        stmt.total_assets = Some(0.0);
        let z = AltmanZ::compute(&stmt, None, ZScoreVariant::Prime);
        assert_eq!(z.score, None);
        assert_eq!(z.variant, ZScoreVariant::Prime);
    }

    #[test]
    fn test_rounded_to_four_decimals() {
        let mut stmt = statement();
        stmt.retained_earnings = Some(333.333_333);
        let z = AltmanZ::compute(&stmt, None, ZScoreVariant::Prime)
            .score
            .unwrap();
        assert_eq!(z, (z * 1e4).round() / 1e4);
    }

    #[test]
    fn test_class_selects_variant() {
        assert_eq!(EntityClass::Financial.z_score_variant(), ZScoreVariant::Prime);
        assert_eq!(
            EntityClass::NonFinancial.z_score_variant(),
            ZScoreVariant::Standard
        );
        assert_eq!(EntityClass::NonFinancial.to_string(), "non-financial");
    }
}
