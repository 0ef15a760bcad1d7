//! Human-readable entity summaries.
//!
//! Condenses a [`Report`] into the latest year's scores and narrative, plus
//! every red flag ordered by severity and then recency.

use crate::report::Report;
use redline_data::QuantScoreEntry;
use redline_diagnostics::{NlpDiffEntry, RedFlag, Severity};
use std::cmp::Reverse;
use std::fmt;

/// Order flags by severity (CRITICAL first), then most recent year first.
///
/// The sort is stable, so flags of equal severity and year keep rule order.
pub fn prioritize(flags: &mut [RedFlag]) {
    flags.sort_by_key(|f| (Reverse(f.severity), Reverse(f.fiscal_year)));
}

/// Summary of one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySummary {
    /// Upper-cased ticker
    pub ticker: String,
    /// First and last fiscal year scored
    pub years: Option<(i32, i32)>,
    /// Most recent quant scores
    pub latest_scores: Option<QuantScoreEntry>,
    /// Most recent narrative diff
    pub latest_narrative: Option<NlpDiffEntry>,
    /// All flags in priority order
    pub flags: Vec<RedFlag>,
}

impl EntitySummary {
    /// Summarize a report.
    pub fn from_report(report: &Report) -> Self {
        let mut flags = report.red_flags.clone();
        prioritize(&mut flags);
        Self {
            ticker: report.ticker.clone(),
            years: report.years(),
            latest_scores: report.quant_scores.last().cloned(),
            latest_narrative: report.nlp_diff.last().cloned(),
            flags,
        }
    }

    /// Number of flags at a given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.flags.iter().filter(|f| f.severity == severity).count()
    }

    fn score_lines(&self) -> Vec<(&'static str, String)> {
        let Some(entry) = &self.latest_scores else {
            return Vec::new();
        };
        let m = &entry.metrics;
        let pct = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0));
        let num = |v: Option<f64>, prec: usize| {
            v.map_or_else(|| "n/a".to_string(), |v| format!("{:.*}", prec, v))
        };

        vec![
            ("Fiscal Year", entry.fiscal_year.to_string()),
            (
                "F-Score",
                m.f_score
                    .map_or_else(|| "n/a".to_string(), |f| format!("{}/9", f)),
            ),
            (
                "Z-Score",
                format!(
                    "{} ({})",
                    num(m.z_score, 4),
                    m.z_score_type
                        .map_or_else(|| "unknown".to_string(), |v| v.to_string())
                ),
            ),
            ("ROE", pct(m.roe)),
            ("Net Margin", pct(m.net_margin)),
            ("Asset Turnover", num(m.asset_turnover, 4)),
            ("Equity Multiplier", num(m.equity_multiplier, 4)),
        ]
    }

    fn narrative_lines(&self) -> Vec<(&'static str, String)> {
        let Some(n) = &self.latest_narrative else {
            return Vec::new();
        };
        let or_na = |v: Option<String>| v.unwrap_or_else(|| "n/a".to_string());
        let list = |v: &[String]| {
            if v.is_empty() {
                "none".to_string()
            } else {
                v.join(", ")
            }
        };

        vec![
            ("Sentiment", or_na(n.mda_sentiment_score.map(|s| s.to_string()))),
            ("Trend", or_na(n.sentiment_trend.map(|t| t.to_string()))),
            ("New Concerns", list(&n.new_macro_concerns)),
            ("Dropped Concerns", list(&n.dropped_macro_concerns)),
            ("Capex Tone", or_na(n.capex_guidance_tone.clone())),
        ]
    }

    /// Render as a plain-text table.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nRedline Summary: {}\n", self.ticker));
        if let Some((first, last)) = self.years {
            output.push_str(&format!("Fiscal Years: {} to {}\n", first, last));
        }
        output.push_str(&"=".repeat(80));
        output.push('\n');

        let scores = self.score_lines();
        if !scores.is_empty() {
            output.push_str("\nLatest Scores:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for (label, value) in scores {
                output.push_str(&format!("  {:<24}{}\n", format!("{}:", label), value));
            }
        }

        let narrative = self.narrative_lines();
        if !narrative.is_empty() {
            output.push_str("\nManagement Narrative:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for (label, value) in narrative {
                output.push_str(&format!("  {:<24}{}\n", format!("{}:", label), value));
            }
        }

        output.push_str(&format!(
            "\nRed Flags: {} ({} critical, {} high, {} medium)\n",
            self.flags.len(),
            self.count(Severity::Critical),
            self.count(Severity::High),
            self.count(Severity::Medium)
        ));
        if !self.flags.is_empty() {
            output.push_str(&"-".repeat(80));
            output.push('\n');
            output.push_str(&format!(
                "{:<8} {:<6} {:<10} {}\n",
                "Rule", "Year", "Severity", "Title"
            ));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for flag in &self.flags {
                output.push_str(&format!(
                    "{:<8} {:<6} {:<10} {}\n",
                    flag.rule_id.to_string(),
                    flag.fiscal_year,
                    flag.severity.to_string(),
                    flag.title
                ));
                output.push_str(&format!("{:>26}{}\n", "", flag.detail));
            }
        }

        output
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Redline Summary: {}\n\n", self.ticker));
        if let Some((first, last)) = self.years {
            output.push_str(&format!("**Fiscal Years:** {} to {}\n\n", first, last));
        }

        let scores = self.score_lines();
        if !scores.is_empty() {
            output.push_str("## Latest Scores\n\n");
            for (label, value) in scores {
                output.push_str(&format!("- **{}:** {}\n", label, value));
            }
            output.push('\n');
        }

        let narrative = self.narrative_lines();
        if !narrative.is_empty() {
            output.push_str("## Management Narrative\n\n");
            for (label, value) in narrative {
                output.push_str(&format!("- **{}:** {}\n", label, value));
            }
            output.push('\n');
        }

        output.push_str(&format!("## Red Flags ({})\n\n", self.flags.len()));
        if self.flags.is_empty() {
            output.push_str("No red flags.\n");
        } else {
            output.push_str("| Rule | Year | Severity | Title | Detail |\n");
            output.push_str("|------|------|----------|-------|--------|\n");
            for flag in &self.flags {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    flag.rule_id,
                    flag.fiscal_year,
                    flag.severity,
                    flag.title,
                    flag.detail.replace('|', "\\|")
                ));
            }
        }

        output
    }
}

impl fmt::Display for EntitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii_table())
    }
}
