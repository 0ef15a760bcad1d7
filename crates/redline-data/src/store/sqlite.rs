//! SQLite record store.
//!
//! Holds raw statements, point-in-time market caps, computed quant scores and
//! filing insights. Joined [`AnnualRecord`] histories are the inner join of
//! scores and insights on (symbol, fiscal year), always returned ascending by
//! fiscal year.

use crate::error::{DataError, Result};
use crate::model::{
    AnnualRecord, Disclosure, FilingInsight, FinancialStatement, QuantMetrics, QuantScoreEntry,
    ZScoreVariant,
};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const QUANT_COLUMNS: [&str; 17] = [
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

const DISCLOSURE_COLUMNS: [&str; 15] = [
    "mda_sentiment_score",
    "macro_concern_1",
    "macro_concern_2",
    "macro_concern_3",
    "capex_guidance_tone",
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

fn prefixed(alias: &str, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{}.{}", alias, c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quant_from_row(row: &Row<'_>, start: usize) -> rusqlite::Result<QuantMetrics> {
    let z_score_type = row
        .get::<_, Option<String>>(start + 11)?
        .and_then(|s| match ZScoreVariant::from_db_str(&s) {
            Ok(variant) => Some(variant),
            Err(e) => {
                tracing::warn!("treating stored Z-Score variant as unknown: {}", e);
                None
            }
        });

    Ok(QuantMetrics {
        f_score: row.get(start)?,
        f1: row.get(start + 1)?,
        f2: row.get(start + 2)?,
        f3: row.get(start + 3)?,
        f4: row.get(start + 4)?,
        f5: row.get(start + 5)?,
        f6: row.get(start + 6)?,
        f7: row.get(start + 7)?,
        f8: row.get(start + 8)?,
        f9: row.get(start + 9)?,
        z_score: row.get(start + 10)?,
        z_score_type,
        roe: row.get(start + 12)?,
        net_margin: row.get(start + 13)?,
        asset_turnover: row.get(start + 14)?,
        equity_multiplier: row.get(start + 15)?,
        market_cap: row.get(start + 16)?,
    })
}

fn disclosure_from_row(row: &Row<'_>, start: usize) -> rusqlite::Result<Disclosure> {
    Ok(Disclosure {
        mda_sentiment_score: row.get(start)?,
        macro_concerns: [
            row.get(start + 1)?,
            row.get(start + 2)?,
            row.get(start + 3)?,
        ],
        capex_guidance_tone: row.get(start + 4)?,
        ai_investment_focus: row.get(start + 5)?,
        ai_monetization_status: row.get(start + 6)?,
        china_exposure_risk: row.get(start + 7)?,
        supply_chain_bottlenecks: row.get(start + 8)?,
        restructuring_plans: row.get(start + 9)?,
        efficiency_initiatives: row.get(start + 10)?,
        growing_segments: row.get(start + 11)?,
        shrinking_segments: row.get(start + 12)?,
        mda_char_count: row.get(start + 13)?,
        risk_char_count: row.get(start + 14)?,
    })
}

/// SQLite store for Redline records.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS financial_statements (
                symbol TEXT NOT NULL,
                fiscal_year INTEGER NOT NULL,

                total_assets REAL,
                total_liabilities REAL,
                current_assets REAL,
                current_liabilities REAL,
                retained_earnings REAL,
                long_term_debt REAL,
                stockholders_equity REAL,
                shares_outstanding REAL,

                revenue REAL,
                net_income REAL,
                gross_profit REAL,
                ebit REAL,
                operating_income REAL,

                operating_cash_flow REAL,

                cached_at TEXT NOT NULL,
                PRIMARY KEY (symbol, fiscal_year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS market_caps (
                symbol TEXT PRIMARY KEY,
                market_cap REAL NOT NULL,
                cached_at TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS quant_scores (
                symbol TEXT NOT NULL,
                fiscal_year INTEGER NOT NULL,

                f_score INTEGER,
                f1 INTEGER, f2 INTEGER, f3 INTEGER, f4 INTEGER, f5 INTEGER,
                f6 INTEGER, f7 INTEGER, f8 INTEGER, f9 INTEGER,

                z_score REAL,
                z_score_type TEXT,

                roe REAL,
                net_margin REAL,
                asset_turnover REAL,
                equity_multiplier REAL,
                market_cap REAL,

                computed_at TEXT NOT NULL,
                PRIMARY KEY (symbol, fiscal_year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS filing_insights (
                symbol TEXT NOT NULL,
                fiscal_year INTEGER NOT NULL,
                tier TEXT,
                filing_type TEXT,

                mda_sentiment_score INTEGER,
                macro_concern_1 TEXT,
                macro_concern_2 TEXT,
                macro_concern_3 TEXT,
                capex_guidance_tone TEXT,
                ai_investment_focus TEXT,
                ai_monetization_status TEXT,
                china_exposure_risk TEXT,
                supply_chain_bottlenecks TEXT,
                restructuring_plans TEXT,
                efficiency_initiatives TEXT,
                growing_segments TEXT,
                shrinking_segments TEXT,
                mda_char_count INTEGER,
                risk_char_count INTEGER,

                cached_at TEXT NOT NULL,
                PRIMARY KEY (symbol, fiscal_year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_quant_symbol ON quant_scores(symbol)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_insights_symbol ON filing_insights(symbol)",
            [],
        )?;

        Ok(())
    }

    /// Store multiple financial statements in a batch.
    pub fn put_financial_statements_batch(&self, stmts: &[FinancialStatement]) -> Result<()> {
        let cached_at = Utc::now().to_rfc3339();
        let tx = self.conn.unchecked_transaction()?;

        for stmt in stmts {
            tx.execute(
                "INSERT OR REPLACE INTO financial_statements (
                    symbol, fiscal_year,
                    total_assets, total_liabilities, current_assets, current_liabilities,
                    retained_earnings, long_term_debt, stockholders_equity, shares_outstanding,
                    revenue, net_income, gross_profit, ebit, operating_income,
                    operating_cash_flow, cached_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
                params![
                    stmt.symbol,
                    stmt.fiscal_year,
                    stmt.total_assets,
                    stmt.total_liabilities,
                    stmt.current_assets,
                    stmt.current_liabilities,
                    stmt.retained_earnings,
                    stmt.long_term_debt,
                    stmt.stockholders_equity,
                    stmt.shares_outstanding,
                    stmt.revenue,
                    stmt.net_income,
                    stmt.gross_profit,
                    stmt.ebit,
                    stmt.operating_income,
                    stmt.operating_cash_flow,
                    cached_at,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Get all financial statements for a symbol, ascending by fiscal year.
    pub fn get_financial_statements(&self, symbol: &str) -> Result<Vec<FinancialStatement>> {
        let mut stmt = self.conn.prepare(
            "SELECT symbol, fiscal_year,
                    total_assets, total_liabilities, current_assets, current_liabilities,
                    retained_earnings, long_term_debt, stockholders_equity, shares_outstanding,
                    revenue, net_income, gross_profit, ebit, operating_income,
                    operating_cash_flow
             FROM financial_statements
             WHERE UPPER(symbol) = UPPER(?1)
             ORDER BY fiscal_year ASC",
        )?;

        let rows = stmt.query_map(params![symbol], |row| {
            Ok(FinancialStatement {
                symbol: row.get(0)?,
                fiscal_year: row.get(1)?,
                total_assets: row.get(2)?,
                total_liabilities: row.get(3)?,
                current_assets: row.get(4)?,
                current_liabilities: row.get(5)?,
                retained_earnings: row.get(6)?,
                long_term_debt: row.get(7)?,
                stockholders_equity: row.get(8)?,
                shares_outstanding: row.get(9)?,
                revenue: row.get(10)?,
                net_income: row.get(11)?,
                gross_profit: row.get(12)?,
                ebit: row.get(13)?,
                operating_income: row.get(14)?,
                operating_cash_flow: row.get(15)?,
            })
        })?;

        let mut statements = Vec::new();
        for row in rows {
            statements.push(row?);
        }

        Ok(statements)
    }

    /// Symbols that have at least one stored statement, in alphabetical order.
    pub fn statement_symbols(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT symbol FROM financial_statements ORDER BY symbol")?;

        let symbols = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(symbols)
    }

    /// Store the point-in-time market cap for a symbol.
    pub fn put_market_cap(&self, symbol: &str, market_cap: f64) -> Result<()> {
        let cached_at = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT OR REPLACE INTO market_caps (symbol, market_cap, cached_at)
             VALUES (?1, ?2, ?3)",
            params![symbol, market_cap, cached_at],
        )?;

        Ok(())
    }

    /// Get the point-in-time market cap for a symbol.
    pub fn get_market_cap(&self, symbol: &str) -> Result<Option<f64>> {
        let result = self
            .conn
            .query_row(
                "SELECT market_cap FROM market_caps WHERE UPPER(symbol) = UPPER(?1)",
                params![symbol],
                |row| row.get(0),
            )
            .optional()?;

        Ok(result)
    }

    /// Store computed quant scores for one symbol, replacing existing years.
    pub fn put_quant_scores(&self, symbol: &str, entries: &[QuantScoreEntry]) -> Result<()> {
        let computed_at = Utc::now().to_rfc3339();
        let tx = self.conn.unchecked_transaction()?;

        for entry in entries {
            let m = &entry.metrics;
            tx.execute(
                "INSERT OR REPLACE INTO quant_scores (
                    symbol, fiscal_year,
                    f_score, f1, f2, f3, f4, f5, f6, f7, f8, f9,
                    z_score, z_score_type,
                    roe, net_margin, asset_turnover, equity_multiplier, market_cap,
                    computed_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
                params![
                    symbol,
                    entry.fiscal_year,
                    m.f_score,
                    m.f1,
                    m.f2,
                    m.f3,
                    m.f4,
                    m.f5,
                    m.f6,
                    m.f7,
                    m.f8,
                    m.f9,
                    m.z_score,
                    m.z_score_type.map(|v| v.to_db_str()),
                    m.roe,
                    m.net_margin,
                    m.asset_turnover,
                    m.equity_multiplier,
                    m.market_cap,
                    computed_at,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Get stored quant scores for a symbol, ascending by fiscal year.
    ///
    /// Returns [`DataError::TickerNotFound`] when nothing is stored.
    pub fn get_quant_scores(&self, symbol: &str) -> Result<Vec<QuantScoreEntry>> {
        let sql = format!(
            "SELECT q.fiscal_year, {}
             FROM quant_scores q
             WHERE UPPER(q.symbol) = UPPER(?1)
             ORDER BY q.fiscal_year ASC",
            prefixed("q", &QUANT_COLUMNS)
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![symbol], |row| {
            Ok(QuantScoreEntry::new(row.get(0)?, quant_from_row(row, 1)?))
        })?;

        let entries = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        if entries.is_empty() {
            return Err(DataError::TickerNotFound(symbol.to_uppercase()));
        }
        Ok(entries)
    }

    /// Store filing insights in a batch.
    pub fn put_insights_batch(&self, insights: &[FilingInsight]) -> Result<()> {
        let cached_at = Utc::now().to_rfc3339();
        let tx = self.conn.unchecked_transaction()?;

        for insight in insights {
            let d = &insight.disclosure;
            let [c1, c2, c3] = &d.macro_concerns;
            tx.execute(
                "INSERT OR REPLACE INTO filing_insights (
                    symbol, fiscal_year, tier, filing_type,
                    mda_sentiment_score, macro_concern_1, macro_concern_2, macro_concern_3,
                    capex_guidance_tone, ai_investment_focus, ai_monetization_status,
                    china_exposure_risk, supply_chain_bottlenecks, restructuring_plans,
                    efficiency_initiatives, growing_segments, shrinking_segments,
                    mda_char_count, risk_char_count, cached_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
                params![
                    insight.symbol,
                    insight.fiscal_year,
                    insight.tier,
                    insight.filing_type,
                    d.mda_sentiment_score,
                    c1,
                    c2,
                    c3,
                    d.capex_guidance_tone,
                    d.ai_investment_focus,
                    d.ai_monetization_status,
                    d.china_exposure_risk,
                    d.supply_chain_bottlenecks,
                    d.restructuring_plans,
                    d.efficiency_initiatives,
                    d.growing_segments,
                    d.shrinking_segments,
                    d.mda_char_count,
                    d.risk_char_count,
                    cached_at,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Get the joined annual history for a symbol, ascending by fiscal year.
    ///
    /// Only years present in both `quant_scores` and `filing_insights` are
    /// returned. Returns [`DataError::TickerNotFound`] when no year joins.
    pub fn get_annual_records(&self, symbol: &str) -> Result<Vec<AnnualRecord>> {
        let sql = format!(
            "SELECT q.symbol, q.fiscal_year, i.tier, i.filing_type, {}, {}
             FROM quant_scores q
             INNER JOIN filing_insights i
                 ON i.symbol = q.symbol AND i.fiscal_year = q.fiscal_year
             WHERE UPPER(q.symbol) = UPPER(?1)
             ORDER BY q.fiscal_year ASC",
            prefixed("q", &QUANT_COLUMNS),
            prefixed("i", &DISCLOSURE_COLUMNS),
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![symbol], |row| {
            Ok(AnnualRecord {
                symbol: row.get(0)?,
                fiscal_year: row.get(1)?,
                tier: row.get(2)?,
                filing_type: row.get(3)?,
                quant: quant_from_row(row, 4)?,
                disclosure: disclosure_from_row(row, 4 + QUANT_COLUMNS.len())?,
            })
        })?;

        let records = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(DataError::TickerNotFound(symbol.to_uppercase()));
        }
        tracing::debug!("loaded {} joined records for {}", records.len(), symbol);
        Ok(records)
    }

    /// List every symbol with joined records, with tier and year coverage.
    pub fn list_tickers(&self) -> Result<Vec<TickerSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT q.symbol, MAX(i.tier), COUNT(*)
             FROM quant_scores q
             INNER JOIN filing_insights i
                 ON i.symbol = q.symbol AND i.fiscal_year = q.fiscal_year
             GROUP BY q.symbol
             ORDER BY q.symbol ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TickerSummary {
                symbol: row.get(0)?,
                tier: row.get(1)?,
                years_available: row.get::<_, i64>(2)? as usize,
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Clear all stored data.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM financial_statements", [])?;
        self.conn.execute("DELETE FROM market_caps", [])?;
        self.conn.execute("DELETE FROM quant_scores", [])?;
        self.conn.execute("DELETE FROM filing_insights", [])?;
        Ok(())
    }

    /// Clear stored data for a specific symbol.
    pub fn clear_symbol(&self, symbol: &str) -> Result<()> {
        for table in [
            "financial_statements",
            "market_caps",
            "quant_scores",
            "filing_insights",
        ] {
            self.conn.execute(
                &format!("DELETE FROM {} WHERE UPPER(symbol) = UPPER(?1)", table),
                params![symbol],
            )?;
        }
        Ok(())
    }

    /// Get store statistics.
    pub fn get_stats(&self) -> Result<StoreStats> {
        let count = |sql: &str| -> Result<usize> {
            let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
            Ok(n as usize)
        };

        Ok(StoreStats {
            financial_statements: count("SELECT COUNT(*) FROM financial_statements")?,
            market_caps: count("SELECT COUNT(*) FROM market_caps")?,
            quant_scores: count("SELECT COUNT(*) FROM quant_scores")?,
            filing_insights: count("SELECT COUNT(*) FROM filing_insights")?,
            unique_symbols: count(
                "SELECT COUNT(DISTINCT symbol) FROM (
                    SELECT symbol FROM quant_scores UNION SELECT symbol FROM filing_insights
                 )",
            )?,
        })
    }
}

/// One row of the ticker listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSummary {
    /// Entity symbol
    pub symbol: String,
    /// Highest tier label seen across years
    pub tier: Option<String>,
    /// Number of joined fiscal years
    pub years_available: usize,
}

/// Store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of raw financial statements
    pub financial_statements: usize,
    /// Number of market-cap snapshots
    pub market_caps: usize,
    /// Number of computed quant score rows
    pub quant_scores: usize,
    /// Number of filing-insight rows
    pub filing_insights: usize,
    /// Distinct symbols with scores or insights
    pub unique_symbols: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pad_concerns;

    fn statement(symbol: &str, year: i32, assets: f64) -> FinancialStatement {
        FinancialStatement {
            total_assets: Some(assets),
            net_income: Some(assets * 0.1),
            ..FinancialStatement::new(symbol, year)
        }
    }

    fn scores(year: i32, f_score: Option<u8>) -> QuantScoreEntry {
        QuantScoreEntry::new(
            year,
            QuantMetrics {
                f_score,
                z_score: Some(2.1234),
                z_score_type: Some(ZScoreVariant::Standard),
                ..QuantMetrics::default()
            },
        )
    }

    fn insight(symbol: &str, year: i32, sentiment: Option<i32>) -> FilingInsight {
        FilingInsight {
            symbol: symbol.to_string(),
            fiscal_year: year,
            tier: Some("core".to_string()),
            filing_type: Some("10-K".to_string()),
            disclosure: Disclosure {
                mda_sentiment_score: sentiment,
                macro_concerns: pad_concerns([Some("rates".to_string())]),
                ..Disclosure::default()
            },
        }
    }

    #[test]
    fn test_store_initialization() {
        let store = SqliteStore::in_memory().unwrap();
        let stats = store.get_stats().unwrap();
        assert_eq!(stats.financial_statements, 0);
        assert_eq!(stats.unique_symbols, 0);
    }

    #[test]
    fn test_statements_returned_ascending() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .put_financial_statements_batch(&[
                statement("AAPL", 2023, 300.0),
                statement("AAPL", 2021, 100.0),
                statement("AAPL", 2022, 200.0),
            ])
            .unwrap();

        let stmts = store.get_financial_statements("aapl").unwrap();
        let years: Vec<i32> = stmts.iter().map(|s| s.fiscal_year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
        assert_eq!(stmts[2].total_assets, Some(300.0));
        assert_eq!(stmts[0].revenue, None);
        assert_eq!(store.statement_symbols().unwrap(), vec!["AAPL".to_string()]);
    }

    #[test]
    fn test_market_cap_operations() {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.get_market_cap("JPM").unwrap(), None);

        store.put_market_cap("JPM", 5.0e11).unwrap();
        store.put_market_cap("JPM", 6.0e11).unwrap();
        assert_eq!(store.get_market_cap("jpm").unwrap(), Some(6.0e11));
    }

    #[test]
    fn test_quant_scores_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .put_quant_scores("MSFT", &[scores(2023, Some(7)), scores(2022, None)])
            .unwrap();

        let entries = store.get_quant_scores("MSFT").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].fiscal_year, 2022);
        assert_eq!(entries[0].metrics.f_score, None);
        assert_eq!(entries[1].metrics.f_score, Some(7));
        assert_eq!(
            entries[1].metrics.z_score_type,
            Some(ZScoreVariant::Standard)
        );
    }

    #[test]
    fn test_unknown_ticker() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store.get_annual_records("nope").unwrap_err();
        assert!(matches!(err, DataError::TickerNotFound(ref s) if s == "NOPE"));
        assert!(matches!(
            store.get_quant_scores("nope"),
            Err(DataError::TickerNotFound(_))
        ));
    }

    #[test]
    fn test_joined_records_inner_join_ascending() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .put_quant_scores(
                "NVDA",
                &[scores(2024, Some(8)), scores(2022, Some(5)), scores(2023, Some(6))],
            )
            .unwrap();
        // 2022 has no insight row, so it must not appear in the join
        store
            .put_insights_batch(&[insight("NVDA", 2024, Some(9)), insight("NVDA", 2023, None)])
            .unwrap();

        let records = store.get_annual_records("nvda").unwrap();
        let years: Vec<i32> = records.iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2023, 2024]);

        let latest = &records[1];
        assert_eq!(latest.quant.f_score, Some(8));
        assert_eq!(latest.disclosure.mda_sentiment_score, Some(9));
        assert_eq!(latest.disclosure.macro_concerns[0].as_deref(), Some("rates"));
        assert_eq!(latest.disclosure.macro_concerns[1], None);
        assert_eq!(latest.filing_type.as_deref(), Some("10-K"));
        assert_eq!(records[0].disclosure.mda_sentiment_score, None);
    }

    #[test]
    fn test_list_tickers() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .put_quant_scores("ZM", &[scores(2023, Some(4))])
            .unwrap();
        store
            .put_quant_scores("AMD", &[scores(2022, Some(4)), scores(2023, Some(5))])
            .unwrap();
        store
            .put_insights_batch(&[
                insight("ZM", 2023, Some(5)),
                insight("AMD", 2022, Some(5)),
                insight("AMD", 2023, Some(6)),
            ])
            .unwrap();

        let tickers = store.list_tickers().unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].symbol, "AMD");
        assert_eq!(tickers[0].years_available, 2);
        assert_eq!(tickers[1].tier.as_deref(), Some("core"));
    }

    #[test]
    fn test_clear_operations() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .put_financial_statements_batch(&[statement("AAPL", 2023, 1.0), statement("MSFT", 2023, 1.0)])
            .unwrap();
        store.put_quant_scores("AAPL", &[scores(2023, Some(5))]).unwrap();
        store.put_market_cap("AAPL", 1.0).unwrap();

        store.clear_symbol("aapl").unwrap();
        let stats = store.get_stats().unwrap();
        assert_eq!(stats.financial_statements, 1);
        assert_eq!(stats.quant_scores, 0);
        assert_eq!(stats.market_caps, 0);

        store.clear_all().unwrap();
        assert_eq!(store.get_stats().unwrap().financial_statements, 0);
    }
}
