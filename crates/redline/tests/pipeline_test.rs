//! CSV to store to analysis views, end to end

use redline::Analyzer;
use redline::data::SqliteStore;
use redline::data::csv_io::{read_insights, read_market_caps, read_statements};
use redline::data::{DataError, ZScoreVariant};
use redline::diagnostics::{RuleId, SentimentTrend, Severity};
use redline::output::{EntitySummary, ExportFormat, Exporter};
use std::collections::HashMap;

const STATEMENTS: &str = "\
symbol,fiscal_year,total_assets,total_liabilities,current_assets,current_liabilities,retained_earnings,long_term_debt,stockholders_equity,shares_outstanding,revenue,net_income,gross_profit,ebit,operating_cash_flow
ZM,2021,1000,400,500,200,300,100,600,100,900,90,700,110,150
ZM,2022,1100,450,520,210,320,100,650,100,1000,100,780,120,160
ZM,2023,1000,500,400,250,120,150,500,110,800,-200,560,-180,-40
JPM,2023,4000,3600,1500,1200,300,,400,30,300,50,,70,60
";

const INSIGHTS: &str = r#"symbol,fiscal_year,tier,filing_type,mda_sentiment_score,macro_concerns,capex_guidance_tone,efficiency_initiatives
ZM,2022,core,10-K,7,"[""rates""]",increasing,
ZM,2023,core,10-K,3,"[""rates"",""demand slowdown""]",decreasing,Cut workforce by 15% and consolidated offices
JPM,2023,mega,10-K,6,"[""credit""]",stable,
"#;

const MARKET_CAPS: &str = "\
symbol,market_cap
ZM,2000
JPM,0
";

fn loaded() -> Analyzer {
    let analyzer = Analyzer::new(SqliteStore::in_memory().unwrap());
    analyzer
        .ingest_statements(&read_statements(STATEMENTS.as_bytes()).unwrap())
        .unwrap();
    analyzer
        .ingest_insights(&read_insights(INSIGHTS.as_bytes()).unwrap())
        .unwrap();
    analyzer
        .ingest_market_caps(&read_market_caps(MARKET_CAPS.as_bytes()).unwrap())
        .unwrap();
    assert_eq!(analyzer.rescore_all(&HashMap::new()).unwrap(), 4);
    analyzer
}

#[test]
fn test_ticker_listing() {
    let tickers = loaded().tickers().unwrap();
    assert_eq!(tickers.total, 2);
    assert_eq!(tickers.tickers[0].ticker, "JPM");
    assert_eq!(tickers.tickers[0].tier.as_deref(), Some("mega"));
    assert_eq!(tickers.tickers[1].ticker, "ZM");
    assert_eq!(tickers.tickers[1].years_available, 2);
}

#[test]
fn test_quant_views() {
    let analyzer = loaded();

    let zm = analyzer.quant_scores("zm").unwrap();
    assert_eq!(zm.series.len(), 2);
    assert_eq!(zm.series[0].fiscal_year, 2022);
    let latest = &zm.series[1].metrics;
    assert_eq!(latest.z_score_type, Some(ZScoreVariant::Standard));
    assert!(latest.z_score.is_some());
    assert!(latest.roe.is_some_and(|roe| roe < -0.10));

    // Zero market cap is unknown; the prime variant needs none.
    let jpm = analyzer.quant_scores("JPM").unwrap();
    let jpm = &jpm.series[0].metrics;
    assert_eq!(jpm.z_score_type, Some(ZScoreVariant::Prime));
    assert!(jpm.z_score.is_some());
    assert_eq!(jpm.market_cap, None);

    // The unjoined 2021 year is scored but only visible in the raw series.
    assert_eq!(analyzer.scored_years("ZM").unwrap().series.len(), 3);
}

#[test]
fn test_narrative_and_flags() {
    let analyzer = loaded();

    let diff = analyzer.nlp_diff("ZM").unwrap();
    let latest = &diff.series[1];
    assert_eq!(latest.sentiment_delta, Some(-4));
    assert_eq!(latest.sentiment_trend, Some(SentimentTrend::Deteriorating));
    assert_eq!(latest.new_macro_concerns, vec!["demand slowdown"]);
    assert_eq!(latest.capex_tone_changed, Some(true));

    let flags = analyzer.red_flags("ZM").unwrap();
    assert_eq!(flags.total, flags.flags.len());
    let emergency = flags
        .flags
        .iter()
        .find(|f| f.rule_id == RuleId::Rf005)
        .unwrap();
    assert_eq!(emergency.fiscal_year, 2023);
    assert_eq!(emergency.severity, Severity::Medium);
    assert!(emergency.detail.starts_with("ROE=-40.00%"));
}

#[test]
fn test_report_and_summary() {
    let report = loaded().report("zm").unwrap();
    assert_eq!(report.ticker, "ZM");
    assert_eq!(report.years(), Some((2022, 2023)));

    let json = report.export_to_string(ExportFormat::Json).unwrap();
    assert!(json.contains("\"RF-005\""));

    let summary = EntitySummary::from_report(&report);
    assert!(summary.to_markdown().contains("Operational Emergency Signal"));
}

#[test]
fn test_missing_ticker() {
    let analyzer = loaded();
    assert!(matches!(
        analyzer.nlp_diff("NFLX"),
        Err(DataError::TickerNotFound(ref t)) if t == "NFLX"
    ));
    assert!(matches!(
        analyzer.rescore("NFLX", None),
        Err(DataError::MissingData { .. })
    ));
}
