use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use zeroprint_core::models::profile::{
    DietProfile, EnergyProfile, LifestyleProfile, TransportProfile, WasteProfile,
};
use zeroprint_estimator::estimate;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateRequest {
    pub profile: ProfileSection,
    pub transport: TransportProfile,
    pub energy: EnergyProfile,
    pub diet: DietProfile,
    pub waste: WasteProfile,
    /// Reserved flag for a country-specific grid-intensity lookup; accepted
    /// for wire compatibility but currently has no effect.
    pub use_external_api: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileSection {
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub unit: String,
    pub total_kg: f64,
    pub breakdown: BreakdownBody,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownBody {
    pub transport_kg: f64,
    pub energy_kg: f64,
    pub diet_kg: f64,
    pub waste_kg: f64,
}

/// Run the footprint estimator over the submitted lifestyle data. Every
/// request gets an answer: unknown enum values and missing numbers were
/// already replaced with defaults during deserialization.
pub async fn post_estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Json<EstimateResponse> {
    if req.use_external_api {
        tracing::debug!("useExternalApi requested; external factor lookup is not implemented");
    }

    let profile = LifestyleProfile {
        country: req.profile.country,
        transport: req.transport,
        energy: req.energy,
        diet: req.diet,
        waste: req.waste,
    };
    let breakdown = estimate(&profile, state.factors);

    Json(EstimateResponse {
        unit: breakdown.unit,
        total_kg: breakdown.total_kg,
        breakdown: BreakdownBody {
            transport_kg: breakdown.transport_kg,
            energy_kg: breakdown.energy_kg,
            diet_kg: breakdown.diet_kg,
            waste_kg: breakdown.waste_kg,
        },
    })
}
