use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unit string reported with every estimate.
pub const EMISSION_UNIT: &str = "kgCO2e/year";

/// Yearly emissions split by category, all values in kg CO2e and rounded to
/// two decimal places. Derived and ephemeral: recomputed on every request,
/// never cached or merged with earlier results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmissionBreakdown {
    pub transport_kg: f64,
    pub energy_kg: f64,
    pub diet_kg: f64,
    pub waste_kg: f64,
    pub total_kg: f64,
    pub unit: String,
}
