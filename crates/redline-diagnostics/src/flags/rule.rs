//! Rule interface and flag value types.

use derive_more::Display;
use redline_data::AnnualRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of a red-flag rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum RuleId {
    /// Low F-Score with negative management tone
    #[serde(rename = "RF-001")]
    #[display("RF-001")]
    Rf001,
    /// Sharp F-Score deterioration
    #[serde(rename = "RF-002")]
    #[display("RF-002")]
    Rf002,
    /// Z-Score distress with a liquidity concern
    #[serde(rename = "RF-003")]
    #[display("RF-003")]
    Rf003,
    /// Negative earnings with positive tone
    #[serde(rename = "RF-004")]
    #[display("RF-004")]
    Rf004,
    /// Deeply negative ROE with an efficiency program
    #[serde(rename = "RF-005")]
    #[display("RF-005")]
    Rf005,
}

impl RuleId {
    /// Every rule identifier, in evaluation order.
    pub const ALL: [Self; 5] = [Self::Rf001, Self::Rf002, Self::Rf003, Self::Rf004, Self::Rf005];
}

/// A string that names no rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule id '{0}', expected RF-001 to RF-005")]
pub struct ParseRuleIdError(pub String);

impl FromStr for RuleId {
    type Err = ParseRuleIdError;

    /// Parses `RF-003`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseRuleIdError(s.to_string()))
    }
}

/// Flag severity.
///
/// Ordered from least to most severe, so sorting descending puts
/// [`Severity::Critical`] first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Worth a look
    #[display("MEDIUM")]
    Medium,
    /// Likely problem
    #[display("HIGH")]
    High,
    /// Distress signal
    #[display("CRITICAL")]
    Critical,
}

/// A triggered rule for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    /// Rule that fired
    pub rule_id: RuleId,
    /// Fiscal year the rule fired for
    pub fiscal_year: i32,
    /// Rule severity
    pub severity: Severity,
    /// Human-readable rule title
    pub title: String,
    /// Evidence behind the flag
    pub detail: String,
}

/// A named, stateless predicate over a (current, prior) pair of records.
///
/// Implementations must not fire when any input they need is unknown.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Stable rule identifier.
    fn id(&self) -> RuleId;

    /// Severity of flags this rule emits.
    fn severity(&self) -> Severity;

    /// Flag title.
    fn title(&self) -> &'static str;

    /// One-line description of the trigger condition.
    fn description(&self) -> &'static str;

    /// Evaluate the rule for `current`, with the record before it if any.
    fn evaluate(&self, current: &AnnualRecord, prior: Option<&AnnualRecord>) -> Option<RedFlag>;

    /// Build a flag from this rule's metadata.
    fn flag(&self, fiscal_year: i32, detail: String) -> RedFlag {
        RedFlag {
            rule_id: self.id(),
            fiscal_year,
            severity: self.severity(),
            title: self.title().to_string(),
            detail,
        }
    }
}
