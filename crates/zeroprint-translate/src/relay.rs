use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::TranslateError;

pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct ApiResponse {
    data: ApiData,
}

#[derive(Deserialize)]
struct ApiData {
    translations: Vec<ApiTranslation>,
}

#[derive(Deserialize)]
struct ApiTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for the upstream translation provider.
///
/// Built once at startup and shared. The API key comes from operator
/// configuration only; when it is absent every call passes the input
/// through unchanged.
pub struct Translator {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl Translator {
    pub fn new(api_key: Option<String>) -> Result<Self, TranslateError> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Same as [`Translator::new`] with an overridable endpoint, for tests
    /// and self-hosted proxies.
    pub fn with_endpoint(
        api_key: Option<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Translate `texts` into `target`, preserving order and length.
    ///
    /// Never fails. When `target` equals `source` no request is made; when
    /// the relay is disabled or the upstream call fails in any way, the
    /// originals are returned unchanged.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target: &str,
        source: &str,
    ) -> Vec<String> {
        if texts.is_empty() || target == source {
            return texts.to_vec();
        }
        let Some(key) = self.api_key.as_deref() else {
            tracing::debug!(target, "translation relay disabled, passing texts through");
            return texts.to_vec();
        };

        match self.request_translations(key, texts, target, source).await {
            Ok(translated) => align_to_input(texts, translated),
            Err(e) => {
                tracing::warn!(target, error = %e, "translation failed, falling back to originals");
                texts.to_vec()
            }
        }
    }

    async fn request_translations(
        &self,
        key: &str,
        texts: &[String],
        target: &str,
        source: &str,
    ) -> Result<Vec<String>, TranslateError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&json!({
                "q": texts,
                "source": source,
                "target": target,
                "format": "text",
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::UpstreamStatus(status));
        }

        let body: ApiResponse = response.json().await?;
        Ok(body
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect())
    }
}

/// Force the provider's answer back onto the input's shape: one output per
/// input, in order. Short answers are padded with the corresponding
/// originals, empty entries are replaced by them, and excess entries are
/// dropped.
pub fn align_to_input(originals: &[String], translated: Vec<String>) -> Vec<String> {
    originals
        .iter()
        .enumerate()
        .map(|(i, original)| match translated.get(i) {
            Some(t) if !t.is_empty() => t.clone(),
            _ => original.clone(),
        })
        .collect()
}
