use summary_core::summary::{
    clean_response, sentence_quota, summarize, SummaryOutcome, SummaryRatio, WordCounts,
    WordFrequencyTable,
};

fn ratio(r: f64) -> SummaryRatio {
    SummaryRatio::new(r).unwrap()
}

fn numbered_sentences(n: usize) -> String {
    (0..n)
        .map(|i| format!("Glim{i} blorp."))
        .collect::<Vec<_>>()
        .join(" ")
}

fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn invariant_quota_floor_with_minimum_one() {
    assert_eq!(sentence_quota(10, ratio(0.3)), 3);
    assert_eq!(sentence_quota(2, ratio(0.3)), 1);
    assert_eq!(sentence_quota(3, ratio(0.34)), 1);
    assert_eq!(sentence_quota(0, ratio(0.3)), 1);
    assert_eq!(sentence_quota(7, SummaryRatio::full()), 7);
}

#[test]
fn invariant_ten_sentences_keep_three() {
    let text = numbered_sentences(10);
    let result = summarize(&text, "en", ratio(0.3)).into_result().unwrap();

    assert_eq!(result.selection.sentences_considered, 10);
    assert_eq!(result.selection.sentences_selected, 3);

    // Equal scores: the sentences seen first win.
    let positions: Vec<usize> = result.sentences.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(result.render(), "Glim0 blorp. Glim1 blorp. Glim2 blorp.");
}

#[test]
fn invariant_two_sentences_keep_one() {
    let text = numbered_sentences(2);
    let result = summarize(&text, "en", ratio(0.3)).into_result().unwrap();
    assert_eq!(result.sentences.len(), 1);
}

#[test]
fn invariant_empty_vocabulary_yields_empty_summary() {
    for text in ["", "   \n ", "The and of. Is it?", "... !!! ,"] {
        let outcome = summarize(text, "en", SummaryRatio::default());
        assert_eq!(outcome.render(), "", "text {text:?} should summarize to nothing");
    }
    assert_eq!(summarize("", "ar", SummaryRatio::default()).render(), "");
}

#[test]
fn invariant_summary_never_longer_than_text() {
    let texts = [
        "The cat sat. The cat sat on the mat. Cats are great pets.",
        "Zorblat quixes flonk.   Zorblat vexes drimp.\n\nPlover wugs snarf.",
        "الكتاب مفيد. الكتاب جميل والكتاب مفيد. السماء زرقاء.",
    ];
    for (text, tag) in texts.iter().zip(["en", "en", "ar"]) {
        for r in [0.1, 0.3, 0.5, 1.0] {
            let summary = summarize(text, tag, ratio(r)).render();
            assert!(
                squash_whitespace(&summary).len() <= squash_whitespace(text).len(),
                "summary longer than text for ratio {r}"
            );
        }
    }
}

#[test]
fn invariant_max_weight_is_exactly_one() {
    let table = WordFrequencyTable::from_words(["flonk", "drimp", "flonk", "snarf", "flonk"]);
    assert_eq!(table.max_weight(), Some(1.0));
    assert_eq!(table.weight("flonk"), Some(1.0));
    assert_eq!(table.weight("drimp"), Some(1.0 / 3.0));
    assert_eq!(table.weight("missing"), None);

    for (_, weight) in table.iter() {
        assert!((0.0..=1.0).contains(weight));
    }
}

#[test]
fn invariant_empty_counts_normalize_to_empty_table() {
    let counts = WordCounts::count(Vec::<String>::new());
    assert!(counts.is_empty());
    assert_eq!(counts.max_count(), 0);

    let table = counts.normalize();
    assert!(table.is_empty());
    assert_eq!(table.max_weight(), None);
}

#[test]
fn invariant_resummarizing_at_full_ratio_is_idempotent() {
    let text = "Ships sail. Ships carry cargo across oceans. Ships ships ships dominate trade. \
                Harbors stay calm. Storms delay ships.";
    let summary = summarize(text, "en", ratio(0.5)).into_result().unwrap();
    assert_eq!(summary.sentences.len(), 2);

    let rendered = summary.render();
    let again = summarize(&rendered, "en", SummaryRatio::full())
        .into_result()
        .unwrap();

    let before: Vec<&str> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
    let after: Vec<&str> = again.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(before, after);
    assert_eq!(again.render(), rendered);
}

#[test]
fn invariant_unsupported_language_is_not_an_error() {
    let outcome = summarize("Bonjour le monde.", "fr", SummaryRatio::default());
    assert_eq!(outcome, SummaryOutcome::UnsupportedLanguage("fr".to_string()));
    assert!(!outcome.is_supported());
    assert_eq!(outcome.render(), "Language not supported");
    assert_eq!(outcome.to_string(), "Language not supported");
}

#[test]
fn invariant_cleaning_strips_line_breaks_and_quotes() {
    assert_eq!(clean_response("Hello\nWorld\""), "HelloWorld");
    assert_eq!(clean_response("a\r\nb \"c\""), "ab c");
    assert_eq!(clean_response("untouched"), "untouched");
}

#[test]
fn invariant_ratio_bounds() {
    assert!(SummaryRatio::new(0.3).is_ok());
    assert!(SummaryRatio::new(1.0).is_ok());
    assert!(SummaryRatio::new(0.0).is_err());
    assert!(SummaryRatio::new(-0.1).is_err());
    assert!(SummaryRatio::new(1.01).is_err());
    assert!(SummaryRatio::new(f64::NAN).is_err());
    assert!(SummaryRatio::new(f64::INFINITY).is_err());
    assert_eq!(SummaryRatio::default().get(), 0.3);
}
