//! Ordered rule battery.

use super::rule::{RedFlag, Rule};
use super::rules::{
    DistressLiquidityConcern, EarningsToneDivergence, LowScoreNegativeTone, OperationalEmergency,
    ScoreDeterioration,
};
use redline_data::AnnualRecord;

/// Evaluates a fixed, ordered list of rules over an entity's history.
#[derive(Debug)]
pub struct RedFlagEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RedFlagEngine {
    fn default() -> Self {
        Self::with_rules(vec![
            Box::new(LowScoreNegativeTone),
            Box::new(ScoreDeterioration),
            Box::new(DistressLiquidityConcern),
            Box::new(EarningsToneDivergence),
            Box::new(OperationalEmergency),
        ])
    }
}

impl RedFlagEngine {
    /// Create an engine over `rules`, evaluated in the given order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluate every rule against every year.
    ///
    /// `history` must be sorted by ascending fiscal year. The prior of each
    /// record is the element before it. Flags come back ordered by fiscal
    /// year, then by rule order within a year.
    pub fn evaluate(&self, history: &[AnnualRecord]) -> Vec<RedFlag> {
        let mut flags = Vec::new();
        for (i, current) in history.iter().enumerate() {
            let prior = i.checked_sub(1).map(|p| &history[p]);
            for rule in &self.rules {
                if let Some(flag) = rule.evaluate(current, prior) {
                    tracing::debug!(
                        "{} {} fired {}: {}",
                        current.symbol,
                        current.fiscal_year,
                        flag.rule_id,
                        flag.detail
                    );
                    flags.push(flag);
                }
            }
        }
        flags
    }
}
