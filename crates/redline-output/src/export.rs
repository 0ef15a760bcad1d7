//! Export functionality for Redline results.
//!
//! Every response envelope can be written as JSON, pretty-printed JSON or
//! CSV. CSV output is one row per series element, prefixed with the
//! ticker. Unknown values are empty cells, and list-valued narrative fields
//! are joined with `;`.

use crate::report::Report;
use crate::response::{NlpDiffResponse, QuantScoresResponse, RedFlagsResponse, TickerListResponse};
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(serde_json::to_string(value)?),
    }
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

const QUANT_HEADER: [&str; 19] = [
    "ticker",
    "fiscal_year",
    "f_score",
    "f1",
    "f2",
    "f3",
    "f4",
    "f5",
    "f6",
    "f7",
    "f8",
    "f9",
    "z_score",
    "z_score_type",
    "roe",
    "net_margin",
    "asset_turnover",
    "equity_multiplier",
    "market_cap",
];

impl Exporter for QuantScoresResponse {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(QUANT_HEADER)?;
        for entry in &self.series {
            let m = &entry.metrics;
            let mut row = vec![self.ticker.clone(), entry.fiscal_year.to_string(), cell(m.f_score)];
            row.extend(m.signals().into_iter().map(cell));
            row.extend([
                cell(m.z_score),
                cell(m.z_score_type),
                cell(m.roe),
                cell(m.net_margin),
                cell(m.asset_turnover),
                cell(m.equity_multiplier),
                cell(m.market_cap),
            ]);
            wtr.write_record(&row)?;
        }
        finish(wtr)
    }
}

const NLP_HEADER: [&str; 20] = [
    "ticker",
    "fiscal_year",
    "mda_sentiment_score",
    "sentiment_delta",
    "sentiment_trend",
    "macro_concerns",
    "new_macro_concerns",
    "dropped_macro_concerns",
    "capex_guidance_tone",
    "capex_tone_changed",
    "ai_investment_focus",
    "ai_monetization_status",
    "china_exposure_risk",
    "supply_chain_bottlenecks",
    "restructuring_plans",
    "efficiency_initiatives",
    "growing_segments",
    "shrinking_segments",
    "mda_char_count",
    "risk_char_count",
];

impl Exporter for NlpDiffResponse {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(NLP_HEADER)?;
        for e in &self.series {
            let concerns: Vec<&str> = e.macro_concerns.iter().flatten().map(String::as_str).collect();
            wtr.write_record([
                self.ticker.clone(),
                e.fiscal_year.to_string(),
                cell(e.mda_sentiment_score),
                cell(e.sentiment_delta),
                cell(e.sentiment_trend),
                concerns.join(";"),
                e.new_macro_concerns.join(";"),
                e.dropped_macro_concerns.join(";"),
                cell(e.capex_guidance_tone.as_deref()),
                cell(e.capex_tone_changed),
                cell(e.ai_investment_focus.as_deref()),
                cell(e.ai_monetization_status.as_deref()),
                cell(e.china_exposure_risk.as_deref()),
                cell(e.supply_chain_bottlenecks.as_deref()),
                cell(e.restructuring_plans.as_deref()),
                cell(e.efficiency_initiatives.as_deref()),
                cell(e.growing_segments.as_deref()),
                cell(e.shrinking_segments.as_deref()),
                cell(e.mda_char_count),
                cell(e.risk_char_count),
            ])?;
        }
        finish(wtr)
    }
}

/// CSV writer whose header row is written up front, so empty exports
/// still carry it. Rows must then be serialized in header order.
fn headed_writer(header: &[&str]) -> Result<csv::Writer<Vec<u8>>, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(header)?;
    Ok(wtr)
}

const FLAG_HEADER: [&str; 6] = ["ticker", "fiscal_year", "rule_id", "severity", "title", "detail"];

const TICKER_HEADER: [&str; 3] = ["ticker", "tier", "years_available"];

/// Flattened red flag for CSV export.
#[derive(Debug, Serialize)]
struct RedFlagRow<'a> {
    ticker: &'a str,
    fiscal_year: i32,
    rule_id: String,
    severity: String,
    title: &'a str,
    detail: &'a str,
}

impl Exporter for RedFlagsResponse {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = headed_writer(&FLAG_HEADER)?;
        for flag in &self.flags {
            wtr.serialize(RedFlagRow {
                ticker: &self.ticker,
                fiscal_year: flag.fiscal_year,
                rule_id: flag.rule_id.to_string(),
                severity: flag.severity.to_string(),
                title: &flag.title,
                detail: &flag.detail,
            })?;
        }
        finish(wtr)
    }
}

impl Exporter for TickerListResponse {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        if format != ExportFormat::Csv {
            return to_json(self, format);
        }

        let mut wtr = headed_writer(&TICKER_HEADER)?;
        for meta in &self.tickers {
            wtr.serialize(meta)?;
        }
        finish(wtr)
    }
}

impl Exporter for Report {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => Err(ExportError::InvalidFormat(
                "a full report has no CSV form; export the series individually".to_string(),
            )),
            _ => to_json(self, format),
        }
    }
}
