#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/redline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod flags;
pub mod narrative;

pub use flags::{
    ParseRuleIdError, RedFlag, RedFlagEngine, Rule, RuleId, RuleInfo, Severity, catalogue, rule_info,
};
pub use narrative::{NlpDiffEntry, SentimentTrend};
