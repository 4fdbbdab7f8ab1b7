use std::sync::Arc;

use zeroprint_estimator::CoefficientTable;
use zeroprint_tables::store::TableStore;
use zeroprint_translate::Translator;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub factors: &'static CoefficientTable,
    pub store: TableStore,
    pub translator: Arc<Translator>,
}
