//! zeroprint-core
//!
//! Pure domain types shared across the Zeroprint system: lifestyle profiles,
//! emission breakdowns, content rows, and user preferences. No I/O, no HTTP —
//! this is the shared vocabulary of the workspace.

pub mod models;
