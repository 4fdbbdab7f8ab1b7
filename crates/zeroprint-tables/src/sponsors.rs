use zeroprint_core::models::content::SponsorRow;

use crate::tabular::{self, Table};

pub const SPONSORS_COLUMNS: [&str; 3] = ["title", "url", "image"];

/// Parse the sponsors table. Rows with an empty title are dropped; a missing
/// url or image stays an empty string and the card renders without it.
pub fn parse_sponsors(text: &str) -> Vec<SponsorRow> {
    let table = Table::parse(text);
    table
        .rows
        .iter()
        .filter_map(|row| {
            let title = table.value(row, "title");
            if title.is_empty() {
                return None;
            }
            Some(SponsorRow {
                title: title.to_string(),
                url: table.value(row, "url").to_string(),
                image: table.value(row, "image").to_string(),
            })
        })
        .collect()
}

pub fn serialize_sponsors(rows: &[SponsorRow]) -> String {
    let records: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.title.clone(), r.url.clone(), r.image.clone()])
        .collect();
    tabular::serialize(&SPONSORS_COLUMNS, &records)
}
