use whatlang::Lang;

/// Guesses the language tag of a text.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram detector backed by `whatlang`.
///
/// Answers `en` or `ar` for the two summarizable languages. Any other
/// language, and text too short to guess, yields `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        match info.lang() {
            Lang::Eng => Some("en".to_string()),
            Lang::Ara => Some("ar".to_string()),
            other => {
                tracing::debug!(
                    detected = other.code(),
                    confidence = info.confidence(),
                    "no pipeline for detected language"
                );
                None
            }
        }
    }
}
