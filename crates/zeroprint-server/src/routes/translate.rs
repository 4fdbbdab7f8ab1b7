use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

fn default_source() -> String {
    "en".to_string()
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    /// Client-side request generation, echoed back verbatim so overlapping
    /// loads (e.g. rapid language switches) can discard stale responses.
    #[serde(default)]
    pub generation: Option<u64>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
}

/// Relay a batch of strings to the translation provider. The response is
/// always index-aligned with the input; provider failures degrade to the
/// original texts rather than an error.
pub async fn post_translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let (Some(texts), Some(target)) = (req.texts, req.target.filter(|t| !t.is_empty())) else {
        return Err(ApiError::BadRequest(
            "texts[] and target are required".to_string(),
        ));
    };

    let translations = state
        .translator
        .translate_batch(&texts, &target, &req.source)
        .await;

    Ok(Json(TranslateResponse {
        translations,
        generation: req.generation,
    }))
}
