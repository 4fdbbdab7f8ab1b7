//! zeroprint-estimator
//!
//! The emission coefficient table and the pure footprint estimator. No I/O —
//! everything here is deterministic arithmetic over a lifestyle profile.

pub mod estimate;
pub mod factors;

pub use estimate::estimate;
pub use factors::{CoefficientTable, default_factors};
