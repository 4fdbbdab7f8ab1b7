use axum::Json;
use axum::extract::State;
use serde::Serialize;

use zeroprint_estimator::CoefficientTable;

use crate::state::AppState;

#[derive(Serialize)]
pub struct FactorsResponse {
    pub factors: CoefficientTable,
}

/// The read-only coefficient table, for clients that want to show the
/// numbers behind an estimate.
pub async fn get_factors(State(state): State<AppState>) -> Json<FactorsResponse> {
    Json(FactorsResponse {
        factors: state.factors.clone(),
    })
}
