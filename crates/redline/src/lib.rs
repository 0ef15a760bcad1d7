#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/redline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod universe;

// Re-export main types from sub-crates
pub use redline_data as data;
pub use redline_diagnostics as diagnostics;
pub use redline_output as output;
pub use redline_scores as scores;

pub use analysis::Analyzer;
pub use universe::{FinancialUniverse, Universe, classify};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
