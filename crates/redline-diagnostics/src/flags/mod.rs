//! Red-flag rule engine.
//!
//! | Rule | Trigger | Severity |
//! |---|---|---|
//! | RF-001 | F-Score ≤ 3 and sentiment ≤ 4 | MEDIUM |
//! | RF-002 | F-Score fell ≥ 3 points from the prior record | HIGH |
//! | RF-003 | Z-Score below its variant threshold and a liquidity-type concern | CRITICAL |
//! | RF-004 | Net margin < 0 and sentiment ≥ 7 | HIGH |
//! | RF-005 | ROE < −10% and an efficiency initiative disclosed | MEDIUM |

pub mod catalogue;
pub mod engine;
pub mod rule;
pub mod rules;

pub use catalogue::{RuleInfo, catalogue, rule_info};
pub use engine::RedFlagEngine;
pub use rule::{ParseRuleIdError, RedFlag, Rule, RuleId, Severity};
