//! Year-over-year diff of qualitative disclosures.
//!
//! Each year is compared with the record immediately before it in the
//! history slice. A gap in fiscal years is not detected; the previous
//! element is simply the prior.

use derive_more::Display;
use redline_data::{AnnualRecord, MacroConcerns};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of resolved sentiment scores in the trend window.
pub const TREND_WINDOW: usize = 3;

/// Direction of management sentiment over the trend window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTrend {
    /// Window rose by at least one point
    #[display("improving")]
    Improving,
    /// Window moved by less than one point
    #[display("stable")]
    Stable,
    /// Window fell by at least one point
    #[display("deteriorating")]
    Deteriorating,
}

/// Qualitative diff for one fiscal year.
///
/// Besides the computed fields, every disclosure field of the year is
/// passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpDiffEntry {
    /// Fiscal year
    pub fiscal_year: i32,
    /// Sentiment score of this year
    pub mda_sentiment_score: Option<i32>,
    /// This year's score minus the prior year's
    pub sentiment_delta: Option<i32>,
    /// Rolling trend over the last resolved scores
    pub sentiment_trend: Option<SentimentTrend>,
    /// This year's concern slots as stored
    pub macro_concerns: MacroConcerns,
    /// Concerns present this year but not last year, sorted
    pub new_macro_concerns: Vec<String>,
    /// Concerns present last year but not this year, sorted
    pub dropped_macro_concerns: Vec<String>,
    /// Capex guidance tone of this year
    pub capex_guidance_tone: Option<String>,
    /// Whether the tone differs from the prior year; unknown without a prior
    pub capex_tone_changed: Option<bool>,
    /// AI investment focus narrative
    pub ai_investment_focus: Option<String>,
    /// AI monetization status narrative
    pub ai_monetization_status: Option<String>,
    /// China exposure narrative
    pub china_exposure_risk: Option<String>,
    /// Supply-chain bottleneck narrative
    pub supply_chain_bottlenecks: Option<String>,
    /// Restructuring plan narrative
    pub restructuring_plans: Option<String>,
    /// Efficiency initiative narrative
    pub efficiency_initiatives: Option<String>,
    /// Segments reported as growing
    pub growing_segments: Option<String>,
    /// Segments reported as shrinking
    pub shrinking_segments: Option<String>,
    /// MD&A character count
    pub mda_char_count: Option<i64>,
    /// Risk-factor character count
    pub risk_char_count: Option<i64>,
}

/// Classify the trend of the resolved scores in `history`.
///
/// Takes the last [`TREND_WINDOW`] resolved scores (skipping unknown years,
/// so the window may span more calendar years) and compares the last with
/// the first. Fewer than two resolved scores, or a difference outside the
/// `i32` range, gives `None`.
pub fn sentiment_trend(history: &[Option<i32>]) -> Option<SentimentTrend> {
    let mut window: Vec<i32> = history
        .iter()
        .rev()
        .flatten()
        .take(TREND_WINDOW)
        .copied()
        .collect();
    window.reverse();

    let (first, last) = match window.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return None,
    };

    let delta = last.checked_sub(first)?;
    Some(if delta >= 1 {
        SentimentTrend::Improving
    } else if delta <= -1 {
        SentimentTrend::Deteriorating
    } else {
        SentimentTrend::Stable
    })
}

fn concern_set(record: Option<&AnnualRecord>) -> BTreeSet<&str> {
    record
        .map(|r| r.disclosure.concern_tags().collect())
        .unwrap_or_default()
}

fn diff_year(
    current: &AnnualRecord,
    prior: Option<&AnnualRecord>,
    scores: &[Option<i32>],
) -> NlpDiffEntry {
    let d = &current.disclosure;

    let sentiment_delta = prior
        .and_then(|p| p.disclosure.mda_sentiment_score)
        .zip(d.mda_sentiment_score)
        .and_then(|(before, now)| now.checked_sub(before));

    let now = concern_set(Some(current));
    let before = concern_set(prior);
    let new_macro_concerns = now.difference(&before).map(|s| s.to_string()).collect();
    let dropped_macro_concerns = before.difference(&now).map(|s| s.to_string()).collect();

    let capex_tone_changed =
        prior.map(|p| p.disclosure.capex_guidance_tone != d.capex_guidance_tone);

    NlpDiffEntry {
        fiscal_year: current.fiscal_year,
        mda_sentiment_score: d.mda_sentiment_score,
        sentiment_delta,
        sentiment_trend: sentiment_trend(scores),
        macro_concerns: d.macro_concerns.clone(),
        new_macro_concerns,
        dropped_macro_concerns,
        capex_guidance_tone: d.capex_guidance_tone.clone(),
        capex_tone_changed,
        ai_investment_focus: d.ai_investment_focus.clone(),
        ai_monetization_status: d.ai_monetization_status.clone(),
        china_exposure_risk: d.china_exposure_risk.clone(),
        supply_chain_bottlenecks: d.supply_chain_bottlenecks.clone(),
        restructuring_plans: d.restructuring_plans.clone(),
        efficiency_initiatives: d.efficiency_initiatives.clone(),
        growing_segments: d.growing_segments.clone(),
        shrinking_segments: d.shrinking_segments.clone(),
        mda_char_count: d.mda_char_count,
        risk_char_count: d.risk_char_count,
    }
}

/// Compute one diff entry per record.
///
/// `history` must be sorted by ascending fiscal year without duplicates.
/// The trend for each year only sees scores up to and including that year.
pub fn compute(history: &[AnnualRecord]) -> Vec<NlpDiffEntry> {
    let scores: Vec<Option<i32>> = history
        .iter()
        .map(|r| r.disclosure.mda_sentiment_score)
        .collect();

    history
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let prior = i.checked_sub(1).map(|p| &history[p]);
            diff_year(current, prior, &scores[..=i])
        })
        .collect()
}
