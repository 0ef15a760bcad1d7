//! Persistent storage for statements, scores and filing insights.

pub mod sqlite;

pub use sqlite::{SqliteStore, StoreStats, TickerSummary};
