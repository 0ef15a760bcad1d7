//! Store-backed analysis service.
//!
//! [`Analyzer`] owns a [`SqliteStore`] and wires the pure engines to it:
//! raw statements go in through [`Analyzer::rescore`], and the per-ticker
//! views come out of the joined history as response envelopes.

use crate::universe::classify;
use redline_data::{
    AnnualRecord, DataError, FilingInsight, FinancialStatement, Result, SqliteStore,
};
use redline_diagnostics::{RedFlagEngine, narrative};
use redline_output::{
    NlpDiffResponse, QuantScoresResponse, RedFlagsResponse, Report, TickerListResponse,
};
use redline_scores::QuantScoreCalculator;
use std::collections::HashMap;

/// Quant scoring, narrative diffs and red flags over a record store.
#[derive(Debug)]
pub struct Analyzer {
    store: SqliteStore,
    calculator: QuantScoreCalculator,
    engine: RedFlagEngine,
}

impl Analyzer {
    /// Create an analyzer with the default rule battery.
    pub fn new(store: SqliteStore) -> Self {
        Self::with_engine(store, RedFlagEngine::default())
    }

    /// Create an analyzer with a custom rule battery.
    pub const fn with_engine(store: SqliteStore, engine: RedFlagEngine) -> Self {
        Self {
            store,
            calculator: QuantScoreCalculator::new(),
            engine,
        }
    }

    /// The underlying store.
    pub const fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Store raw statements.
    pub fn ingest_statements(&self, statements: &[FinancialStatement]) -> Result<()> {
        self.store.put_financial_statements_batch(statements)?;
        tracing::info!("stored {} financial statements", statements.len());
        Ok(())
    }

    /// Store filing insights.
    pub fn ingest_insights(&self, insights: &[FilingInsight]) -> Result<()> {
        self.store.put_insights_batch(insights)?;
        tracing::info!("stored {} filing insights", insights.len());
        Ok(())
    }

    /// Store point-in-time market caps, keyed by symbol.
    ///
    /// Non-finite values are unknown and are not stored.
    pub fn ingest_market_caps(&self, market_caps: &HashMap<String, f64>) -> Result<()> {
        let mut stored = 0;
        for (symbol, market_cap) in market_caps {
            if !market_cap.is_finite() {
                tracing::warn!("{}: skipping non-finite market cap {}", symbol, market_cap);
                continue;
            }
            self.store.put_market_cap(symbol, *market_cap)?;
            stored += 1;
        }
        tracing::info!("stored {} market caps", stored);
        Ok(())
    }

    /// Recompute and store quant scores for one symbol.
    ///
    /// Years before `first_year` are not scored, but a statement for the
    /// year just before it still serves as the prior. Returns the number
    /// of years scored.
    pub fn rescore(&self, symbol: &str, first_year: Option<i32>) -> Result<usize> {
        let symbol = symbol.trim().to_uppercase();
        let statements = self.store.get_financial_statements(&symbol)?;
        if statements.is_empty() {
            return Err(DataError::MissingData {
                symbol,
                reason: "no financial statements stored".to_string(),
            });
        }

        for stmt in statements.iter().filter(|s| !s.has_balance_sheet()) {
            tracing::warn!(
                "{} {}: no total assets, asset-based ratios will be unknown",
                symbol,
                stmt.fiscal_year
            );
        }

        let market_cap = self.store.get_market_cap(&symbol)?;
        if market_cap.is_none() {
            tracing::warn!("{}: no market cap stored, Z-Score will be unknown", symbol);
        }

        let class = classify(&symbol);
        let entries = self
            .calculator
            .score_history(&statements, market_cap, class, first_year);
        self.store.put_quant_scores(&symbol, &entries)?;

        tracing::info!("{} ({}): scored {} years", symbol, class, entries.len());
        Ok(entries.len())
    }

    /// Recompute quant scores for every symbol with stored statements.
    ///
    /// `first_years` maps upper-cased symbols to their first scored year.
    /// Returns the total number of years scored.
    pub fn rescore_all(&self, first_years: &HashMap<String, i32>) -> Result<usize> {
        let mut total = 0;
        for symbol in self.store.statement_symbols()? {
            let floor = first_years.get(&symbol.to_uppercase()).copied();
            total += self.rescore(&symbol, floor)?;
        }
        Ok(total)
    }

    /// Joined annual history for a ticker, ascending by fiscal year.
    pub fn history(&self, ticker: &str) -> Result<Vec<AnnualRecord>> {
        self.store.get_annual_records(ticker)
    }

    /// Every covered ticker with tier and year coverage.
    pub fn tickers(&self) -> Result<TickerListResponse> {
        Ok(self.store.list_tickers()?.into_iter().collect())
    }

    /// Quant score series over the joined history.
    pub fn quant_scores(&self, ticker: &str) -> Result<QuantScoresResponse> {
        let history = self.history(ticker)?;
        Ok(QuantScoresResponse::new(
            ticker,
            history.iter().map(AnnualRecord::quant_entry).collect(),
        ))
    }

    /// Quant score series for every scored year, joined or not.
    pub fn scored_years(&self, ticker: &str) -> Result<QuantScoresResponse> {
        Ok(QuantScoresResponse::new(
            ticker,
            self.store.get_quant_scores(ticker)?,
        ))
    }

    /// Year-over-year narrative diff.
    pub fn nlp_diff(&self, ticker: &str) -> Result<NlpDiffResponse> {
        let history = self.history(ticker)?;
        Ok(NlpDiffResponse::new(ticker, narrative::compute(&history)))
    }

    /// Red flags in (fiscal year, rule) order.
    pub fn red_flags(&self, ticker: &str) -> Result<RedFlagsResponse> {
        let history = self.history(ticker)?;
        Ok(RedFlagsResponse::new(ticker, self.engine.evaluate(&history)))
    }

    /// All three views from a single read of the history.
    pub fn report(&self, ticker: &str) -> Result<Report> {
        let history = self.history(ticker)?;
        Ok(Report::new(
            ticker,
            history.iter().map(AnnualRecord::quant_entry).collect(),
            narrative::compute(&history),
            self.engine.evaluate(&history),
        ))
    }
}
