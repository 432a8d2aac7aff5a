use summary_core::summary::{summarize, SummaryRatio};
use summary_core::types::SummaryResult;

const ENGLISH: &str = "Zorblat quixes flonk. Zorblat vexes drimp. Plover wugs snarf.";

#[test]
fn golden_summary_result_serialization() {
    let ratio = SummaryRatio::new(0.34).unwrap();

    let result1 = summarize(ENGLISH, "en", ratio).into_result().unwrap();
    let result2 = summarize(ENGLISH, "en", ratio).into_result().unwrap();

    let json1 = serde_json::to_string_pretty(&result1).unwrap();
    let json2 = serde_json::to_string_pretty(&result2).unwrap();

    // Byte-for-byte determinism check
    assert_eq!(json1, json2, "Summary output is not deterministic");

    // Snapshot assertion (freeze contract)
    let expected = r#"{
  "sentences": [
    {
      "position": 0,
      "text": "Zorblat quixes flonk.",
      "score": 2.0
    }
  ],
  "selection": {
    "language": "en",
    "ratio": 0.34,
    "sentences_considered": 3,
    "sentences_scored": 3,
    "sentences_selected": 1
  }
}"#;

    assert_eq!(json1.trim(), expected.trim(), "Golden snapshot mismatch");

    let roundtrip: SummaryResult = serde_json::from_str(&json1).unwrap();
    assert_eq!(roundtrip, result1);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let inputs = [
        (ENGLISH, "en"),
        ("The cat sat. The cat sat on the mat. Cats are great pets.", "en"),
        ("الكتاب مفيد. الكتاب جميل والكتاب مفيد. السماء زرقاء.", "ar"),
        ("", "en"),
        ("Bonjour.", "fr"),
    ];

    for (text, tag) in inputs {
        for r in [0.1, 0.3, 0.7, 1.0] {
            let ratio = SummaryRatio::new(r).unwrap();
            let first = summarize(text, tag, ratio).render();
            for _ in 0..5 {
                assert_eq!(summarize(text, tag, ratio).render().as_bytes(), first.as_bytes());
            }
        }
    }
}

#[test]
fn parallel_runs_agree() {
    let ratio = SummaryRatio::default();
    let expected = summarize(ENGLISH, "en", ratio).render();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || summarize(ENGLISH, "en", ratio).render()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
