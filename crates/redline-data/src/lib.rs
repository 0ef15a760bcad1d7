#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/redline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod csv_io;
pub mod error;
pub mod model;
pub mod store;

pub use error::{DataError, Result};
pub use model::{
    AnnualRecord, Disclosure, FilingInsight, FinancialStatement, MACRO_CONCERN_SLOTS,
    MacroConcerns, QuantMetrics, QuantScoreEntry, ZScoreVariant, pad_concerns,
};
pub use store::{SqliteStore, StoreStats, TickerSummary};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
