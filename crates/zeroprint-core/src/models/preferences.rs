use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-visitor preferences the frontend persists in browser storage.
///
/// The original UI read these keys ad hoc wherever it needed them; modelling
/// them as one object gives the load/save lifecycle a single shape. The
/// server only ever hands out the defaults — there are no accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Preferences {
    /// Display language; "auto" means follow the browser locale.
    pub language: String,
    /// Chosen mascot character, if any.
    pub character: Option<String>,
    /// Count of tips the visitor has marked as tried.
    pub saved_tips: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            character: None,
            saved_tips: 0,
        }
    }
}
