//! zeroprint-translate
//!
//! Relay to the Google Translate v2 API. Batched, order-preserving, and
//! fail-open: any upstream problem returns the original texts rather than
//! an error. Without a configured API key the relay is disabled entirely.

pub mod error;
pub mod relay;

pub use relay::Translator;
