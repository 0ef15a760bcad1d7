//! Qualitative disclosure fields extracted from annual filings.

use serde::{Deserialize, Serialize};

/// Number of positional macro-concern slots per entity-year.
pub const MACRO_CONCERN_SLOTS: usize = 3;

/// Positionally stored macro-concern tags (absent slots are `None`).
pub type MacroConcerns = [Option<String>; MACRO_CONCERN_SLOTS];

/// The qualitative group of an annual record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    /// Management-discussion sentiment, conventionally 1-10
    pub mda_sentiment_score: Option<i32>,
    /// Up to three macro-concern tags
    pub macro_concerns: MacroConcerns,
    /// Capex guidance tone category
    pub capex_guidance_tone: Option<String>,
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
    /// Character count of the MD&A section
    pub mda_char_count: Option<i64>,
    /// Character count of the risk-factor section
    pub risk_char_count: Option<i64>,
}

impl Disclosure {
    /// Iterate the present macro-concern tags in slot order.
    pub fn concern_tags(&self) -> impl Iterator<Item = &str> {
        self.macro_concerns.iter().filter_map(|c| c.as_deref())
    }
}

/// Disclosure fields for one filing, keyed by entity and fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingInsight {
    /// Entity symbol
    pub symbol: String,
    /// Fiscal year
    pub fiscal_year: i32,
    /// Coverage tier label
    pub tier: Option<String>,
    /// Filing form (e.g. 10-K, 20-F)
    pub filing_type: Option<String>,
    /// Extracted disclosure fields
    pub disclosure: Disclosure,
}

/// Normalise a list of concern tags into exactly three positional slots.
///
/// Extra tags beyond the third are dropped; missing slots are padded with `None`.
pub fn pad_concerns<I>(tags: I) -> MacroConcerns
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut slots: MacroConcerns = Default::default();
    for (slot, tag) in slots.iter_mut().zip(tags) {
        *slot = tag;
    }
    slots
}

/// Parse the JSON list representation of macro concerns used by filing insights.
///
/// Malformed or non-list input yields no concerns rather than an error.
/// Non-string elements keep their slot but leave it empty.
pub fn parse_concerns_json(raw: Option<&str>) -> MacroConcerns {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Default::default();
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(tags) => pad_concerns(tags.into_iter().map(|tag| match tag {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })),
        Err(e) => {
            tracing::debug!("ignoring malformed macro concerns {:?}: {}", raw, e);
            Default::default()
        }
    }
}
