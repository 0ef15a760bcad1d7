//! Record model shared across the workspace.

pub mod disclosure;
pub mod quant;
pub mod record;
pub mod statement;

pub use disclosure::{
    Disclosure, FilingInsight, MACRO_CONCERN_SLOTS, MacroConcerns, pad_concerns, parse_concerns_json,
};
pub use quant::{QuantMetrics, QuantScoreEntry, ZScoreVariant};
pub use record::AnnualRecord;
pub use statement::FinancialStatement;
