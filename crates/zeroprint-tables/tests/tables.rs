use zeroprint_core::models::content::{SponsorRow, TipRow};
use zeroprint_tables::error::TableError;
use zeroprint_tables::sponsors::{parse_sponsors, serialize_sponsors};
use zeroprint_tables::store::{TableName, TableStore};
use zeroprint_tables::tabular::{self, Table};
use zeroprint_tables::tips::{parse_tips, serialize_tips, tips_for_language};

#[test]
fn parse_zips_rows_onto_header_columns() {
    let table = Table::parse("title,url,image\nAcme,https://acme.test,logo.png\n");
    assert_eq!(table.columns, vec!["title", "url", "image"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.value(&table.rows[0], "url"), "https://acme.test");
}

#[test]
fn parse_pads_short_rows_and_drops_excess_values() {
    let table = Table::parse("a,b,c\n1,2\n1,2,3,4\n");
    assert_eq!(table.rows[0], vec!["1", "2", ""]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
}

#[test]
fn parse_skips_blank_lines_and_trims_values() {
    let table = Table::parse("a,b\r\n\r\n x , y \n\n");
    assert_eq!(table.rows, vec![vec!["x", "y"]]);
}

#[test]
fn parse_of_empty_input_yields_empty_table() {
    let table = Table::parse("");
    assert!(table.columns.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn unknown_column_reads_as_empty() {
    let table = Table::parse("a,b\n1,2\n");
    assert_eq!(table.value(&table.rows[0], "missing"), "");
    assert_eq!(table.column_index("missing"), None);
}

#[test]
fn serialize_then_parse_round_trips_delimiter_free_values() {
    let rows = vec![
        vec!["Acme".to_string(), "https://acme.test".to_string()],
        vec!["Globex".to_string(), String::new()],
    ];
    let text = tabular::serialize(&["title", "url"], &rows);
    let table = Table::parse(&text);
    assert_eq!(table.columns, vec!["title", "url"]);
    assert_eq!(table.rows, rows);
}

#[test]
fn serialize_collapses_embedded_line_breaks() {
    let rows = vec![vec!["line one\r\nline two\n\nline three".to_string()]];
    let text = tabular::serialize(&["note"], &rows);
    assert_eq!(text, "note\nline one line two line three");
}

#[test]
fn tips_parse_splits_on_first_comma_only() {
    let rows = parse_tips("lang,tip\nEN,Reduce, reuse, recycle\nde,Weniger ist mehr\n");
    assert_eq!(
        rows,
        vec![
            TipRow {
                lang: "en".to_string(),
                tip: "Reduce, reuse, recycle".to_string(),
            },
            TipRow {
                lang: "de".to_string(),
                tip: "Weniger ist mehr".to_string(),
            },
        ]
    );
}

#[test]
fn tips_parse_drops_rows_without_tip_text() {
    let rows = parse_tips("lang,tip\nen,\nen\nen,Keep it\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tip, "Keep it");
}

#[test]
fn tips_round_trip_preserves_commas_in_tip_text() {
    let rows = vec![TipRow {
        lang: "en".to_string(),
        tip: "Reduce, reuse, recycle".to_string(),
    }];
    let reparsed = parse_tips(&serialize_tips(&rows));
    assert_eq!(reparsed, rows);
}

#[test]
fn tips_for_language_prefers_exact_match() {
    let rows = parse_tips("lang,tip\nen,english tip\nde,deutscher Tipp\n");
    let selection = tips_for_language(&rows, "DE");
    assert_eq!(selection.lang, "de");
    assert_eq!(selection.texts, vec!["deutscher Tipp"]);
}

#[test]
fn tips_for_language_falls_back_to_english_subset() {
    let rows = parse_tips("lang,tip\nen,first\nen,second\n");
    let selection = tips_for_language(&rows, "fr");
    assert_eq!(selection.lang, "en");
    assert_eq!(selection.texts, vec!["first", "second"]);
}

#[test]
fn tips_for_language_with_no_rows_is_empty() {
    let selection = tips_for_language(&[], "fr");
    assert_eq!(selection.lang, "en");
    assert!(selection.texts.is_empty());
}

#[test]
fn sponsors_parse_drops_rows_without_title() {
    let rows = parse_sponsors("title,url,image\nAcme,https://acme.test,logo.png\n,https://ghost.test,\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Acme");
    assert_eq!(rows[0].image, "logo.png");
}

#[test]
fn sponsors_tolerate_missing_trailing_columns() {
    let rows = parse_sponsors("title,url,image\nAcme\n");
    assert_eq!(
        rows,
        vec![SponsorRow {
            title: "Acme".to_string(),
            url: String::new(),
            image: String::new(),
        }]
    );
}

#[test]
fn sponsors_round_trip() {
    let rows = vec![SponsorRow {
        title: "Acme".to_string(),
        url: "https://acme.test".to_string(),
        image: "logo.png".to_string(),
    }];
    assert_eq!(parse_sponsors(&serialize_sponsors(&rows)), rows);
}

#[tokio::test]
async fn store_reads_table_from_data_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("tips.csv"), "lang,tip\nen,hello\n").expect("seed tips");

    let store = TableStore::new(dir.path());
    let text = store.read(TableName::Tips).await.expect("read tips");
    assert_eq!(parse_tips(&text).len(), 1);
}

#[tokio::test]
async fn store_maps_missing_file_to_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TableStore::new(dir.path());
    match store.read(TableName::Sponsors).await {
        Err(TableError::NotFound { file }) => assert_eq!(file, "sponsors.csv"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
