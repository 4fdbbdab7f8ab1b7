//! zeroprint-tables
//!
//! The flat-table content store: parse/serialize of the comma-separated
//! tips and sponsors tables, language selection, and the read-only file
//! store backing them. Edits never flow back through this crate — curation
//! is an export-and-replace workflow.

pub mod error;
pub mod sponsors;
pub mod store;
pub mod tabular;
pub mod tips;
