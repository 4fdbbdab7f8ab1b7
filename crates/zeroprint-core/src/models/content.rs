use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One tip line from the tips table: a lowercase ISO-639-1-like language
/// code plus the tip text. Row order is the only key; duplicate languages
/// are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipRow {
    pub lang: String,
    pub tip: String,
}

/// One sponsor card from the sponsors table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SponsorRow {
    pub title: String,
    pub url: String,
    pub image: String,
}
