//! CSV ingestion of raw statements, filing insights and market caps.
//!
//! Header names match the field names of the model types. Empty cells are
//! read as absent values.

use crate::error::{DataError, Result};
use crate::model::{Disclosure, FilingInsight, FinancialStatement, parse_concerns_json};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Flat CSV shape of a filing-insight row.
///
/// `macro_concerns` holds a JSON list of tags, as produced by the filing
/// extraction step.
#[derive(Debug, Deserialize)]
struct InsightRow {
    symbol: String,
    fiscal_year: i32,
    #[serde(default)]
    tier: Option<String>,
    #[serde(default)]
    filing_type: Option<String>,
    #[serde(default)]
    mda_sentiment_score: Option<i32>,
    #[serde(default)]
    macro_concerns: Option<String>,
    #[serde(default)]
    capex_guidance_tone: Option<String>,
    #[serde(default)]
    ai_investment_focus: Option<String>,
    #[serde(default)]
    ai_monetization_status: Option<String>,
    #[serde(default)]
    china_exposure_risk: Option<String>,
    #[serde(default)]
    supply_chain_bottlenecks: Option<String>,
    #[serde(default)]
    restructuring_plans: Option<String>,
    #[serde(default)]
    efficiency_initiatives: Option<String>,
    #[serde(default)]
    growing_segments: Option<String>,
    #[serde(default)]
    shrinking_segments: Option<String>,
    #[serde(default)]
    mda_char_count: Option<i64>,
    #[serde(default)]
    risk_char_count: Option<i64>,
}

impl From<InsightRow> for FilingInsight {
    fn from(row: InsightRow) -> Self {
        Self {
            symbol: row.symbol,
            fiscal_year: row.fiscal_year,
            tier: row.tier,
            filing_type: row.filing_type,
            disclosure: Disclosure {
                mda_sentiment_score: row.mda_sentiment_score,
                macro_concerns: parse_concerns_json(row.macro_concerns.as_deref()),
                capex_guidance_tone: row.capex_guidance_tone,
                ai_investment_focus: row.ai_investment_focus,
                ai_monetization_status: row.ai_monetization_status,
                china_exposure_risk: row.china_exposure_risk,
                supply_chain_bottlenecks: row.supply_chain_bottlenecks,
                restructuring_plans: row.restructuring_plans,
                efficiency_initiatives: row.efficiency_initiatives,
                growing_segments: row.growing_segments,
                shrinking_segments: row.shrinking_segments,
                mda_char_count: row.mda_char_count,
                risk_char_count: row.risk_char_count,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarketCapRow {
    symbol: String,
    #[serde(default)]
    market_cap: Option<f64>,
}

fn normalize_symbol(symbol: &str, fiscal_year: i32) -> Result<String> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(DataError::InvalidRecord {
            symbol,
            fiscal_year,
            reason: "empty symbol".to_string(),
        });
    }
    Ok(symbol)
}

/// Read financial statements from any CSV source.
pub fn read_statements<R: Read>(reader: R) -> Result<Vec<FinancialStatement>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut statements = Vec::new();
    for row in rdr.deserialize::<FinancialStatement>() {
        let mut stmt = row?;
        stmt.symbol = normalize_symbol(&stmt.symbol, stmt.fiscal_year)?;
        statements.push(stmt);
    }
    tracing::debug!("read {} statement rows", statements.len());
    Ok(statements)
}

/// Read filing insights from any CSV source.
pub fn read_insights<R: Read>(reader: R) -> Result<Vec<FilingInsight>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut insights = Vec::new();
    for row in rdr.deserialize::<InsightRow>() {
        let mut insight = FilingInsight::from(row?);
        insight.symbol = normalize_symbol(&insight.symbol, insight.fiscal_year)?;
        insights.push(insight);
    }
    tracing::debug!("read {} insight rows", insights.len());
    Ok(insights)
}

/// Read point-in-time market caps (`symbol,market_cap`) from any CSV source.
///
/// Rows with an empty or non-finite market cap are skipped. A later row for the same
/// symbol replaces an earlier one.
pub fn read_market_caps<R: Read>(reader: R) -> Result<HashMap<String, f64>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut caps = HashMap::new();
    for row in rdr.deserialize::<MarketCapRow>() {
        let row = row?;
        let symbol = normalize_symbol(&row.symbol, 0)?;
        match row.market_cap {
            Some(cap) if cap.is_finite() => {
                caps.insert(symbol, cap);
            }
            Some(cap) => tracing::warn!("skipping non-finite market cap for {}: {}", symbol, cap),
            None => {}
        }
    }
    Ok(caps)
}

/// Load financial statements from a CSV file.
pub fn load_statements<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialStatement>> {
    read_statements(std::fs::File::open(path)?)
}

/// Load filing insights from a CSV file.
pub fn load_insights<P: AsRef<Path>>(path: P) -> Result<Vec<FilingInsight>> {
    read_insights(std::fs::File::open(path)?)
}

/// Load market caps from a CSV file.
pub fn load_market_caps<P: AsRef<Path>>(path: P) -> Result<HashMap<String, f64>> {
    read_market_caps(std::fs::File::open(path)?)
}
