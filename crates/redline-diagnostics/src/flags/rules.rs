//! The five red-flag rules.
//!
//! Every threshold is a compile-time constant.

use super::rule::{RedFlag, Rule, RuleId, Severity};
use redline_data::{AnnualRecord, ZScoreVariant};

/// RF-001 fires at or below this F-Score.
pub const LOW_F_SCORE: u8 = 3;

/// RF-001 fires at or below this sentiment score.
pub const NEGATIVE_SENTIMENT: i32 = 4;

/// RF-002 fires when the F-Score falls by at least this many points.
pub const SHARP_F_SCORE_DROP: i32 = 3;

/// RF-003 distress threshold for the standard Z-Score.
pub const STANDARD_DISTRESS_THRESHOLD: f64 = 1.81;

/// RF-003 distress threshold for the Z"-Score.
pub const PRIME_DISTRESS_THRESHOLD: f64 = 1.23;

/// RF-003 keywords, matched case-insensitively as substrings of concern tags.
pub const LIQUIDITY_KEYWORDS: [&str; 4] = ["liquidity", "debt", "credit", "default"];

/// RF-004 fires at or above this sentiment score.
pub const POSITIVE_SENTIMENT: i32 = 7;

/// RF-005 fires below this return on equity.
pub const EMERGENCY_ROE: f64 = -0.10;

/// Characters of the efficiency narrative quoted by RF-005.
pub const EVIDENCE_CHARS: usize = 80;

/// Distress threshold for a Z-Score variant.
pub const fn distress_threshold(variant: ZScoreVariant) -> f64 {
    match variant {
        ZScoreVariant::Standard => STANDARD_DISTRESS_THRESHOLD,
        ZScoreVariant::Prime => PRIME_DISTRESS_THRESHOLD,
    }
}

/// First concern tag mentioning a liquidity keyword, in slot order.
fn liquidity_concern(record: &AnnualRecord) -> Option<&str> {
    record.disclosure.concern_tags().find(|tag| {
        let tag = tag.to_lowercase();
        LIQUIDITY_KEYWORDS.iter().any(|kw| tag.contains(kw))
    })
}

/// RF-001: low F-Score with negative management tone in the same year.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowScoreNegativeTone;

impl Rule for LowScoreNegativeTone {
    fn id(&self) -> RuleId {
        RuleId::Rf001
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn title(&self) -> &'static str {
        "Low F-Score + Negative Management Tone"
    }

    fn description(&self) -> &'static str {
        "F-Score <= 3 and MD&A sentiment <= 4 in the same year"
    }

    fn evaluate(&self, current: &AnnualRecord, _prior: Option<&AnnualRecord>) -> Option<RedFlag> {
        let f_score = current.quant.f_score?;
        let sentiment = current.disclosure.mda_sentiment_score?;
        (f_score <= LOW_F_SCORE && sentiment <= NEGATIVE_SENTIMENT).then(|| {
            self.flag(
                current.fiscal_year,
                format!("F-Score={}, MDA sentiment={}", f_score, sentiment),
            )
        })
    }
}

/// RF-002: F-Score fell sharply from the prior record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreDeterioration;

impl Rule for ScoreDeterioration {
    fn id(&self) -> RuleId {
        RuleId::Rf002
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn title(&self) -> &'static str {
        "Sharp F-Score Deterioration"
    }

    fn description(&self) -> &'static str {
        "F-Score fell by 3 or more points from the prior year"
    }

    fn evaluate(&self, current: &AnnualRecord, prior: Option<&AnnualRecord>) -> Option<RedFlag> {
        let prior = prior?;
        let now = current.quant.f_score?;
        let before = prior.quant.f_score?;
        let drop = i32::from(before) - i32::from(now);
        (drop >= SHARP_F_SCORE_DROP).then(|| {
            self.flag(
                current.fiscal_year,
                format!(
                    "F-Score dropped {} pts: {} ({}) → {} ({})",
                    drop, before, prior.fiscal_year, now, current.fiscal_year
                ),
            )
        })
    }
}

/// RF-003: Z-Score in the distress zone while a liquidity concern is raised.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistressLiquidityConcern;

impl Rule for DistressLiquidityConcern {
    fn id(&self) -> RuleId {
        RuleId::Rf003
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn title(&self) -> &'static str {
        "Z-Score Distress + Liquidity Concern"
    }

    fn description(&self) -> &'static str {
        "Z-Score below 1.81 (standard) or 1.23 (prime) and a macro concern about liquidity, debt, credit or default"
    }

    fn evaluate(&self, current: &AnnualRecord, _prior: Option<&AnnualRecord>) -> Option<RedFlag> {
        let z = current.quant.z_score?;
        let variant = current.quant.z_score_type?;
        let threshold = distress_threshold(variant);
        if z >= threshold {
            return None;
        }
        let concern = liquidity_concern(current)?;
        Some(self.flag(
            current.fiscal_year,
            format!(
                "Z-Score={:.4} ({}, threshold={}). Matching concern: '{}'",
                z, variant, threshold, concern
            ),
        ))
    }
}

/// RF-004: losing money while management sounds upbeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsToneDivergence;

impl Rule for EarningsToneDivergence {
    fn id(&self) -> RuleId {
        RuleId::Rf004
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn title(&self) -> &'static str {
        "Earnings-Tone Divergence"
    }

    fn description(&self) -> &'static str {
        "Negative net margin while MD&A sentiment is 7 or higher"
    }

    fn evaluate(&self, current: &AnnualRecord, _prior: Option<&AnnualRecord>) -> Option<RedFlag> {
        let net_margin = current.quant.net_margin?;
        let sentiment = current.disclosure.mda_sentiment_score?;
        (net_margin < 0.0 && sentiment >= POSITIVE_SENTIMENT).then(|| {
            self.flag(
                current.fiscal_year,
                format!(
                    "Negative net margin ({:.2}%) while management tone is positive (score={})",
                    net_margin * 100.0,
                    sentiment
                ),
            )
        })
    }
}

/// RF-005: deeply negative ROE alongside an efficiency program.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationalEmergency;

impl Rule for OperationalEmergency {
    fn id(&self) -> RuleId {
        RuleId::Rf005
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn title(&self) -> &'static str {
        "Operational Emergency Signal"
    }

    fn description(&self) -> &'static str {
        "ROE below -10% and an efficiency initiative is disclosed"
    }

    fn evaluate(&self, current: &AnnualRecord, _prior: Option<&AnnualRecord>) -> Option<RedFlag> {
        let roe = current.quant.roe?;
        let initiatives = current.disclosure.efficiency_initiatives.as_deref()?;
        (roe < EMERGENCY_ROE).then(|| {
            let snippet: String = initiatives.chars().take(EVIDENCE_CHARS).collect();
            self.flag(
                current.fiscal_year,
                format!("ROE={:.2}%. Efficiency signal: '{}'", roe * 100.0, snippet),
            )
        })
    }
}
