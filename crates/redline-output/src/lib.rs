#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/redline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;
pub mod response;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter};
pub use report::Report;
pub use response::{
    NlpDiffResponse, QuantScoresResponse, RedFlagsResponse, TickerListResponse, TickerMeta,
};
pub use summary::{EntitySummary, prioritize};
