use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation provider returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
}
