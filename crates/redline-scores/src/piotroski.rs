//! Piotroski F-Score.
//!
//! Nine binary signals covering profitability, leverage/liquidity and
//! operating efficiency. Each signal is `Some(1)`, `Some(0)` or `None` when
//! its inputs are missing. An unknown signal counts neither for nor against
//! the composite, and the composite itself is only reported once at least
//! [`MIN_RESOLVED_SIGNALS`] signals resolve.

use crate::lifted::Metric;
use crate::signals::RatioPair;

/// Number of Piotroski signals.
pub const SIGNAL_COUNT: usize = 9;

/// Minimum resolved signals for the composite to be reported.
pub const MIN_RESOLVED_SIGNALS: usize = 5;

/// Nine signals and their composite for one fiscal year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PiotroskiScore {
    /// Signals f1..f9 in order
    pub signals: [Option<u8>; SIGNAL_COUNT],
    /// Sum of resolved signals, if enough resolved
    pub composite: Option<u8>,
}

const fn bit(condition: Option<bool>) -> Option<u8> {
    match condition {
        Some(true) => Some(1),
        Some(false) => Some(0),
        None => None,
    }
}

impl PiotroskiScore {
    /// Evaluate all nine signals from a year's ratios and the prior year's.
    pub fn from_ratios(pair: &RatioPair) -> Self {
        let cur = &pair.current;
        let prior = &pair.prior;

        let signals = [
            // Profitability
            bit(cur.roa.gt(Metric::new(0.0))),
            bit(cur.operating_cash_flow.gt(Metric::new(0.0))),
            bit(cur.roa.gt(prior.roa)),
            bit(cur.cfo_to_assets.gt(cur.roa)),
            // Leverage and liquidity
            bit(cur.leverage.lt(prior.leverage)),
            bit(cur.current_ratio.gt(prior.current_ratio)),
            bit(cur.shares_outstanding.le(prior.shares_outstanding)),
            // Operating efficiency
            bit(cur.gross_margin.gt(prior.gross_margin)),
            bit(cur.asset_turnover.gt(prior.asset_turnover)),
        ];

        Self::from_signals(signals)
    }

    /// Build a score from precomputed signals.
    pub fn from_signals(signals: [Option<u8>; SIGNAL_COUNT]) -> Self {
        let resolved = signals.iter().flatten().count();
        let composite = if resolved >= MIN_RESOLVED_SIGNALS {
            Some(signals.iter().flatten().sum())
        } else {
            tracing::trace!(
                "F-Score withheld: {} of {} signals resolved",
                resolved,
                SIGNAL_COUNT
            );
            None
        };
        Self { signals, composite }
    }

    /// Number of signals that resolved.
    pub fn resolved_count(&self) -> usize {
        self.signals.iter().flatten().count()
    }
}
