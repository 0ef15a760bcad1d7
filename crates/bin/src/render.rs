//! Text and Markdown tables for command output.

use redline::data::StoreStats;
use redline::diagnostics::RuleInfo;
use redline::output::{NlpDiffResponse, QuantScoresResponse, RedFlagsResponse, TickerListResponse};
use std::fmt::Display;

/// A simple column-aligned table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) const fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub(crate) fn to_text(&self) -> String {
        let widths = self.widths();
        let line = |cells: Vec<&str>| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = w))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };

        let mut output = line(self.headers.clone());
        output.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&line(row.iter().map(String::as_str).collect()));
        }
        output
    }

    pub(crate) fn to_markdown(&self) -> String {
        let escape = |c: &str| c.replace('|', "\\|");
        let mut output = format!("| {} |\n", self.headers.join(" | "));
        output.push_str(&format!(
            "|{}|\n",
            self.headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        ));
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output
    }

    pub(crate) fn render(&self, markdown: bool) -> String {
        if markdown {
            self.to_markdown()
        } else {
            self.to_text()
        }
    }
}

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn fixed(value: Option<f64>, prec: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.*}", prec, v))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0))
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

pub(crate) fn quant_table(response: &QuantScoresResponse) -> Table {
    let mut table = Table::new(vec![
        "Year",
        "F-Score",
        "Z-Score",
        "Variant",
        "ROE",
        "Net Margin",
        "Turnover",
        "Eq. Mult",
    ]);
    for entry in &response.series {
        let m = &entry.metrics;
        table.push(vec![
            entry.fiscal_year.to_string(),
            or_na(m.f_score),
            fixed(m.z_score, 4),
            or_na(m.z_score_type),
            percent(m.roe),
            percent(m.net_margin),
            fixed(m.asset_turnover, 4),
            fixed(m.equity_multiplier, 4),
        ]);
    }
    table
}

pub(crate) fn nlp_table(response: &NlpDiffResponse) -> Table {
    let mut table = Table::new(vec![
        "Year",
        "Sentiment",
        "Delta",
        "Trend",
        "New Concerns",
        "Dropped Concerns",
        "Capex Tone",
        "Tone Changed",
    ]);
    for e in &response.series {
        table.push(vec![
            e.fiscal_year.to_string(),
            or_na(e.mda_sentiment_score),
            e.sentiment_delta
                .map_or_else(|| "n/a".to_string(), |d| format!("{:+}", d)),
            or_na(e.sentiment_trend),
            list(&e.new_macro_concerns),
            list(&e.dropped_macro_concerns),
            or_na(e.capex_guidance_tone.as_deref()),
            or_na(e.capex_tone_changed),
        ]);
    }
    table
}

pub(crate) fn flags_table(response: &RedFlagsResponse) -> Table {
    let mut table = Table::new(vec!["Year", "Rule", "Severity", "Title", "Detail"]);
    for flag in &response.flags {
        table.push(vec![
            flag.fiscal_year.to_string(),
            flag.rule_id.to_string(),
            flag.severity.to_string(),
            flag.title.clone(),
            flag.detail.clone(),
        ]);
    }
    table
}

pub(crate) fn tickers_table(response: &TickerListResponse) -> Table {
    let mut table = Table::new(vec!["Ticker", "Tier", "Years"]);
    for meta in &response.tickers {
        table.push(vec![
            meta.ticker.clone(),
            or_na(meta.tier.as_deref()),
            meta.years_available.to_string(),
        ]);
    }
    table
}

pub(crate) fn rules_table(rules: &[RuleInfo]) -> Table {
    let mut table = Table::new(vec!["Rule", "Severity", "Title", "Condition"]);
    for rule in rules {
        table.push(vec![
            rule.id.to_string(),
            rule.severity.to_string(),
            rule.title.to_string(),
            rule.description.to_string(),
        ]);
    }
    table
}

pub(crate) fn stats_table(stats: &StoreStats) -> Table {
    let mut table = Table::new(vec!["Table", "Rows"]);
    for (name, count) in [
        ("financial_statements", stats.financial_statements),
        ("market_caps", stats.market_caps),
        ("quant_scores", stats.quant_scores),
        ("filing_insights", stats.filing_insights),
        ("unique symbols", stats.unique_symbols),
    ] {
        table.push(vec![name.to_string(), count.to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline::diagnostics::{RuleId, catalogue, rule_info};
    use redline::output::TickerMeta;

    #[test]
    fn test_text_alignment() {
        let mut table = Table::new(vec!["Ticker", "Years"]);
        table.push(vec!["AAPL".to_string(), "5".to_string()]);
        table.push(vec!["C".to_string(), "12".to_string()]);

        let text = table.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ticker  Years");
        assert_eq!(lines[1], "-------------");
        assert_eq!(lines[2], "AAPL    5");
        assert_eq!(lines[3], "C       12");
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut table = Table::new(vec!["A"]);
        table.push(vec!["x|y".to_string()]);
        assert_eq!(table.to_markdown(), "| A |\n|---|\n| x\\|y |\n");
    }

    #[test]
    fn test_tickers_table() {
        let response = TickerListResponse::new(vec![TickerMeta {
            ticker: "GS".to_string(),
            tier: None,
            years_available: 3,
        }]);
        assert!(tickers_table(&response).to_text().contains("GS      n/a   3"));
    }

    #[test]
    fn test_rules_table_lists_battery() {
        let text = rules_table(&catalogue()).render(true);
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("| RF-003 | CRITICAL |"));
    }

    #[test]
    fn test_single_rule_table() {
        let info = rule_info(RuleId::Rf003).unwrap();
        let text = rules_table(&[info]).to_text();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Z-Score Distress + Liquidity Concern"));
    }
}
