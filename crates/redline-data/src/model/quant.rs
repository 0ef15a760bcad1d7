//! Computed quantitative score fields.

use crate::error::{DataError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Altman Z-Score formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZScoreVariant {
    /// Original five-ratio Z-Score for general (non-financial) entities
    #[display("standard")]
    Standard,
    /// Four-ratio Z"-Score without market-price dependence, for financials
    #[display("prime")]
    Prime,
}

impl ZScoreVariant {
    /// Convert to database string representation.
    pub const fn to_db_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Prime => "prime",
        }
    }

    /// Parse from database string representation.
    pub fn from_db_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Self::Standard),
            "prime" => Ok(Self::Prime),
            _ => Err(DataError::Parse(format!("Invalid Z-Score variant: {}", s))),
        }
    }
}

/// The quantitative group of an annual record.
///
/// `f1..f9` are tri-state signals: `Some(1)`, `Some(0)` or `None` (unknown).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantMetrics {
    /// Piotroski composite, unknown unless at least 5 signals resolved
    pub f_score: Option<u8>,
    /// Positive return on assets
    pub f1: Option<u8>,
    /// Positive operating cash flow
    pub f2: Option<u8>,
    /// ROA improved year-over-year
    pub f3: Option<u8>,
    /// Operating cash flow per asset exceeds ROA
    pub f4: Option<u8>,
    /// Leverage decreased year-over-year
    pub f5: Option<u8>,
    /// Current ratio improved year-over-year
    pub f6: Option<u8>,
    /// No dilution
    pub f7: Option<u8>,
    /// Gross margin improved year-over-year
    pub f8: Option<u8>,
    /// Asset turnover improved year-over-year
    pub f9: Option<u8>,
    /// Altman Z-Score (4 decimals)
    pub z_score: Option<f64>,
    /// Altman variant used for `z_score`
    pub z_score_type: Option<ZScoreVariant>,
    /// DuPont return on equity (6 decimals)
    pub roe: Option<f64>,
    /// Net income / revenue (6 decimals)
    pub net_margin: Option<f64>,
    /// Revenue / total assets (6 decimals)
    pub asset_turnover: Option<f64>,
    /// Total assets / equity (6 decimals)
    pub equity_multiplier: Option<f64>,
    /// Point-in-time market capitalization
    pub market_cap: Option<f64>,
}

impl QuantMetrics {
    /// The nine Piotroski signals in order.
    pub const fn signals(&self) -> [Option<u8>; 9] {
        [
            self.f1, self.f2, self.f3, self.f4, self.f5, self.f6, self.f7, self.f8, self.f9,
        ]
    }

    /// Set the nine Piotroski signals from an ordered array.
    pub const fn set_signals(&mut self, signals: [Option<u8>; 9]) {
        let [f1, f2, f3, f4, f5, f6, f7, f8, f9] = signals;
        self.f1 = f1;
        self.f2 = f2;
        self.f3 = f3;
        self.f4 = f4;
        self.f5 = f5;
        self.f6 = f6;
        self.f7 = f7;
        self.f8 = f8;
        self.f9 = f9;
    }
}

/// Quantitative scores for one fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantScoreEntry {
    /// Fiscal year
    pub fiscal_year: i32,
    /// Score fields
    #[serde(flatten)]
    pub metrics: QuantMetrics,
}

impl QuantScoreEntry {
    /// Create a new entry.
    pub const fn new(fiscal_year: i32, metrics: QuantMetrics) -> Self {
        Self {
            fiscal_year,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("standard", Some(ZScoreVariant::Standard))]
    #[case("prime", Some(ZScoreVariant::Prime))]
    #[case("Z-double-prime", None)]
    #[case("", None)]
    fn test_variant_from_db_str(#[case] raw: &str, #[case] expected: Option<ZScoreVariant>) {
        assert_eq!(ZScoreVariant::from_db_str(raw).ok(), expected);
        if let Some(variant) = expected {
            assert_eq!(variant.to_db_str(), raw);
        }
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(ZScoreVariant::Standard.to_string(), "standard");
        assert_eq!(ZScoreVariant::Prime.to_string(), "prime");
    }

    #[test]
    fn test_entry_serializes_flat() {
        let mut metrics = QuantMetrics {
            f_score: Some(6),
            z_score: Some(2.5),
            z_score_type: Some(ZScoreVariant::Prime),
            ..QuantMetrics::default()
        };
        metrics.set_signals([Some(1); 9]);
        let json = serde_json::to_value(QuantScoreEntry::new(2023, metrics)).unwrap();

        assert_eq!(json["fiscal_year"], 2023);
        assert_eq!(json["f_score"], 6);
        assert_eq!(json["f9"], 1);
        assert_eq!(json["z_score_type"], "prime");
        assert!(json["roe"].is_null());
    }
}
