use summary_core::document::{Document, DocumentError, Language};

#[test]
fn invariant_utf8_rejection() {
    // Invalid UTF-8 sequence
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = Document::ingest(invalid_bytes, Language::English);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}

#[test]
fn invariant_same_content_same_version() {
    let doc1 = Document::ingest("Hello world".as_bytes().to_vec(), Language::English).unwrap();
    let doc2 = Document::from_text("Hello world", Language::Arabic);

    assert_eq!(doc1.version, doc2.version);
    assert!(doc1.version.as_str().starts_with("sha256:"));
    assert_eq!(doc1.version.short().len(), 12);
}

#[test]
fn invariant_different_content_different_version() {
    let doc1 = Document::from_text("Hello world", Language::English);
    let doc2 = Document::from_text("Hello world.", Language::English);

    assert_ne!(doc1.version, doc2.version);
}

#[test]
fn language_tags_are_exact() {
    assert_eq!(Language::from_tag("en"), Some(Language::English));
    assert_eq!(Language::from_tag("ar"), Some(Language::Arabic));
    assert_eq!(Language::from_tag("fr"), None);
    assert_eq!(Language::from_tag("EN"), None);
    assert_eq!(Language::from_tag(""), None);

    assert_eq!(Language::English.code(), "en");
    assert_eq!(Language::Arabic.to_string(), "ar");
}

#[test]
fn language_serializes_as_tag() {
    let json = serde_json::to_string(&Language::Arabic).unwrap();
    assert_eq!(json, "\"ar\"");

    let parsed: Language = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Language::English);
}
