//! Relay behavior tests. Everything here runs offline; the one test that
//! calls the real provider is `#[ignore]`d and needs
//! `GOOGLE_TRANSLATE_API_KEY` in the environment:
//! `cargo test -p zeroprint-translate --test relay -- --ignored`

use zeroprint_translate::Translator;
use zeroprint_translate::relay::align_to_input;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn same_language_short_circuits_without_a_request() {
    // The endpoint is unroutable; a request attempt would error and fall
    // back, but the short-circuit must not even get that far.
    let translator =
        Translator::with_endpoint(Some("key".to_string()), "http://192.0.2.1/translate")
            .expect("translator");
    let input = texts(&["hello", "world"]);
    let out = translator.translate_batch(&input, "en", "en").await;
    assert_eq!(out, input);
}

#[tokio::test]
async fn disabled_relay_passes_texts_through() {
    let translator = Translator::new(None).expect("translator");
    assert!(!translator.is_enabled());
    let input = texts(&["merhaba"]);
    let out = translator.translate_batch(&input, "de", "en").await;
    assert_eq!(out, input);
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let translator = Translator::new(None).expect("translator");
    let out = translator.translate_batch(&[], "de", "en").await;
    assert!(out.is_empty());
}

#[tokio::test]
async fn upstream_failure_falls_back_to_originals() {
    // Connection refused on a closed local port.
    let translator =
        Translator::with_endpoint(Some("key".to_string()), "http://127.0.0.1:1/translate")
            .expect("translator");
    let input = texts(&["eins", "zwei"]);
    let out = translator.translate_batch(&input, "en", "de").await;
    assert_eq!(out, input);
}

#[test]
fn align_pads_short_answers_with_originals() {
    let originals = texts(&["a", "b", "c"]);
    let out = align_to_input(&originals, texts(&["x"]));
    assert_eq!(out, texts(&["x", "b", "c"]));
}

#[test]
fn align_drops_excess_answers() {
    let originals = texts(&["a"]);
    let out = align_to_input(&originals, texts(&["x", "y", "z"]));
    assert_eq!(out, texts(&["x"]));
}

#[test]
fn align_replaces_empty_answers_with_originals() {
    let originals = texts(&["a", "b"]);
    let out = align_to_input(&originals, texts(&["", "y"]));
    assert_eq!(out, texts(&["a", "y"]));
}

#[tokio::test]
#[ignore]
async fn real_provider_translates_a_batch() {
    let key = std::env::var("GOOGLE_TRANSLATE_API_KEY").expect("GOOGLE_TRANSLATE_API_KEY");
    let translator = Translator::new(Some(key)).expect("translator");
    let input = texts(&["hello"]);
    let out = translator.translate_batch(&input, "de", "en").await;
    assert_eq!(out.len(), 1);
    assert_ne!(out[0], "hello");
}
