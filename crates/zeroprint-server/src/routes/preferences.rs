use axum::Json;

use zeroprint_core::models::preferences::Preferences;

/// Default preference object for first-time visitors. The frontend persists
/// its own copy in browser storage; there is no account to load from.
pub async fn default_preferences() -> Json<Preferences> {
    Json(Preferences::default())
}
