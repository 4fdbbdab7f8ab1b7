use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use zeroprint_core::models::content::{SponsorRow, TipRow};
use zeroprint_tables::sponsors::{parse_sponsors, serialize_sponsors};
use zeroprint_tables::store::TableName;
use zeroprint_tables::tips::{FALLBACK_LANGUAGE, parse_tips, serialize_tips, tips_for_language};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct TipsResponse {
    pub lang: String,
    pub tips: Vec<String>,
}

#[derive(Serialize)]
pub struct SponsorsResponse {
    pub sponsors: Vec<SponsorRow>,
}

/// Read and parse a table, degrading to an empty row set when the backing
/// file is missing or unreadable. The page renders its section empty rather
/// than erroring.
async fn load_rows<T>(state: &AppState, name: TableName, parse: fn(&str) -> Vec<T>) -> Vec<T> {
    match state.store.read(name).await {
        Ok(text) => parse(&text),
        Err(e) => {
            tracing::warn!(table = name.file_name(), error = %e, "table unavailable, serving empty set");
            Vec::new()
        }
    }
}

fn requested_language(query: &ContentQuery) -> String {
    query
        .lang
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Tips for the requested language. When only the English subset exists and
/// the relay is configured, it is machine-translated into the target.
pub async fn get_tips(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Json<TipsResponse> {
    let target = requested_language(&query);
    let rows = load_rows(&state, TableName::Tips, parse_tips).await;
    let selection = tips_for_language(&rows, &target);

    if selection.lang != target && state.translator.is_enabled() {
        let tips = state
            .translator
            .translate_batch(&selection.texts, &target, FALLBACK_LANGUAGE)
            .await;
        return Json(TipsResponse { lang: target, tips });
    }

    Json(TipsResponse {
        lang: selection.lang,
        tips: selection.texts,
    })
}

/// Sponsor cards; titles are machine-translated when a non-English language
/// is requested and the relay is configured.
pub async fn get_sponsors(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Json<SponsorsResponse> {
    let target = requested_language(&query);
    let mut sponsors = load_rows(&state, TableName::Sponsors, parse_sponsors).await;

    if target != FALLBACK_LANGUAGE && state.translator.is_enabled() && !sponsors.is_empty() {
        let titles: Vec<String> = sponsors.iter().map(|s| s.title.clone()).collect();
        let translated = state
            .translator
            .translate_batch(&titles, &target, FALLBACK_LANGUAGE)
            .await;
        for (sponsor, title) in sponsors.iter_mut().zip(translated) {
            sponsor.title = title;
        }
    }

    Json(SponsorsResponse { sponsors })
}

async fn raw_table(state: &AppState, name: TableName) -> Result<Response, ApiError> {
    let text = state.store.read(name).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            // Editors re-fetch right after replacing a file; never cache.
            (header::CACHE_CONTROL, "no-store"),
        ],
        text,
    )
        .into_response())
}

pub async fn raw_tips(State(state): State<AppState>) -> Result<Response, ApiError> {
    raw_table(&state, TableName::Tips).await
}

pub async fn raw_sponsors(State(state): State<AppState>) -> Result<Response, ApiError> {
    raw_table(&state, TableName::Sponsors).await
}

fn attachment(file_name: &str, body: String) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// Serialize edited tip rows into downloadable table text. Nothing is
/// written server-side: the operator replaces the backing file out-of-band.
pub async fn export_tips(Json(rows): Json<Vec<TipRow>>) -> Response {
    attachment(TableName::Tips.file_name(), serialize_tips(&rows))
}

pub async fn export_sponsors(Json(rows): Json<Vec<SponsorRow>>) -> Response {
    attachment(TableName::Sponsors.file_name(), serialize_sponsors(&rows))
}
