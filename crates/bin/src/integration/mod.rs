//! Glue between the command line and the Redline crates.
//!
//! Store location handling and the ingest pipeline live here; the
//! per-command output rendering lives in `render`.

pub(crate) mod ingest;
pub(crate) mod store_manager;
