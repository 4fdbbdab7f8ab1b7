use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use zeroprint_estimator::default_factors;
use zeroprint_server::state::AppState;
use zeroprint_tables::store::TableStore;
use zeroprint_translate::Translator;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = env::var("ZEROPRINT_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let data_dir = env::var("ZEROPRINT_DATA_DIR").unwrap_or_else(|_| "data".to_string());

    // No baked-in fallback key: without operator configuration the relay
    // stays off and content is served in its source language.
    let api_key = env::var("GOOGLE_TRANSLATE_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());
    if api_key.is_none() {
        tracing::warn!("GOOGLE_TRANSLATE_API_KEY not set; translation relay disabled");
    }

    let state = AppState {
        factors: default_factors(),
        store: TableStore::new(&data_dir),
        translator: Arc::new(Translator::new(api_key)?),
    };

    let app = zeroprint_server::app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %data_dir, "zeroprint listening");
    axum::serve(listener, app).await?;
    Ok(())
}
