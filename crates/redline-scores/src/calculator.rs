//! Per-year quant score assembly.

use crate::altman::{AltmanZ, EntityClass};
use crate::dupont::DuPont;
use crate::piotroski::PiotroskiScore;
use crate::signals::RatioPair;
use redline_data::{FinancialStatement, QuantMetrics, QuantScoreEntry};
use std::collections::BTreeMap;

/// Produces [`QuantScoreEntry`] values from raw statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantScoreCalculator;

impl QuantScoreCalculator {
    /// Create a calculator.
    pub const fn new() -> Self {
        Self
    }

    /// Score one fiscal year.
    ///
    /// # Arguments
    /// * `current` - Statement for the year being scored
    /// * `prior` - Statement for the immediately preceding fiscal year, if any
    /// * `market_cap` - Point-in-time market capitalization (zero is treated as unknown)
    /// * `class` - Entity classification, selecting the Z-Score variant
    pub fn score(
        &self,
        current: &FinancialStatement,
        prior: Option<&FinancialStatement>,
        market_cap: Option<f64>,
        class: EntityClass,
    ) -> QuantScoreEntry {
        let market_cap = market_cap.filter(|v| v.is_finite() && *v != 0.0);

        let piotroski = PiotroskiScore::from_ratios(&RatioPair::extract(current, prior));
        let altman = AltmanZ::compute(current, market_cap, class.z_score_variant());
        let dupont = DuPont::compute(current);

        let mut metrics = QuantMetrics {
            f_score: piotroski.composite,
            z_score: altman.score,
            z_score_type: Some(altman.variant),
            roe: dupont.roe,
            net_margin: dupont.net_margin,
            asset_turnover: dupont.asset_turnover,
            equity_multiplier: dupont.equity_multiplier,
            market_cap,
            ..QuantMetrics::default()
        };
        metrics.set_signals(piotroski.signals);

        tracing::trace!(
            "{} {}: f_score={:?} z_score={:?} ({}) roe={:?}",
            current.symbol,
            current.fiscal_year,
            metrics.f_score,
            metrics.z_score,
            altman.variant,
            metrics.roe
        );

        QuantScoreEntry::new(current.fiscal_year, metrics)
    }

    /// Score every year of one entity's statement history.
    ///
    /// Each year is paired with the statement for exactly the previous
    /// fiscal year; a gap leaves the prior unknown. Years before
    /// `first_year` (e.g. pre-listing years) are skipped. Output is
    /// ascending by fiscal year regardless of input order.
    pub fn score_history(
        &self,
        statements: &[FinancialStatement],
        market_cap: Option<f64>,
        class: EntityClass,
        first_year: Option<i32>,
    ) -> Vec<QuantScoreEntry> {
        let by_year: BTreeMap<i32, &FinancialStatement> =
            statements.iter().map(|s| (s.fiscal_year, s)).collect();
        let floor = first_year.unwrap_or(i32::MIN);

        by_year
            .range(floor..)
            .map(|(&year, stmt)| {
                let prior = by_year.get(&(year - 1)).copied();
                self.score(stmt, prior, market_cap, class)
            })
            .collect()
    }
}
