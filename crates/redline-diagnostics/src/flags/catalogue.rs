//! Rule catalogue
//!
//! Static metadata for every rule in the default battery, for listings and
//! documentation.

use super::engine::RedFlagEngine;
use super::rule::{RuleId, Severity};

/// Rule metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule identifier
    pub id: RuleId,
    /// Severity of emitted flags
    pub severity: Severity,
    /// Flag title
    pub title: &'static str,
    /// Trigger condition
    pub description: &'static str,
}

/// Metadata for the default rules, in evaluation order.
pub fn catalogue() -> Vec<RuleInfo> {
    RedFlagEngine::default()
        .rules()
        .iter()
        .map(|rule| RuleInfo {
            id: rule.id(),
            severity: rule.severity(),
            title: rule.title(),
            description: rule.description(),
        })
        .collect()
}

/// Look up one rule's metadata.
pub fn rule_info(id: RuleId) -> Option<RuleInfo> {
    catalogue().into_iter().find(|info| info.id == id)
}
