use zeroprint_core::models::content::TipRow;

use crate::tabular;

pub const TIPS_COLUMNS: [&str; 2] = ["lang", "tip"];

/// Language served when the requested one has no rows.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Parse the tips table. The tip text is everything after the first comma,
/// so tips may themselves contain commas. Lines without a delimiter or with
/// an empty tip are dropped; language codes are lowercased.
pub fn parse_tips(text: &str) -> Vec<TipRow> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1) // header
        .filter_map(|line| {
            let (lang, tip) = line.split_once(',')?;
            let tip = tip.trim();
            if tip.is_empty() {
                return None;
            }
            Some(TipRow {
                lang: lang.trim().to_ascii_lowercase(),
                tip: tip.to_string(),
            })
        })
        .collect()
}

pub fn serialize_tips(rows: &[TipRow]) -> String {
    let records: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.lang.clone(), r.tip.clone()])
        .collect();
    tabular::serialize(&TIPS_COLUMNS, &records)
}

/// The tip texts chosen for display, with the language actually served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipSelection {
    pub lang: String,
    pub texts: Vec<String>,
}

/// Pick tips for `target`: exact language match wins; when there is none,
/// fall back to the English subset (which the caller may then pass through
/// the translation relay).
pub fn tips_for_language(rows: &[TipRow], target: &str) -> TipSelection {
    let target = target.to_ascii_lowercase();
    let texts: Vec<String> = rows
        .iter()
        .filter(|r| r.lang == target)
        .map(|r| r.tip.clone())
        .collect();
    if !texts.is_empty() {
        return TipSelection {
            lang: target,
            texts,
        };
    }

    let texts = rows
        .iter()
        .filter(|r| r.lang == FALLBACK_LANGUAGE)
        .map(|r| r.tip.clone())
        .collect();
    TipSelection {
        lang: FALLBACK_LANGUAGE.to_string(),
        texts,
    }
}
