use unicode_segmentation::UnicodeSegmentation;

use super::{is_punctuation, trim_span, Segmentation, Sentence, Token};

/// Arabic diacritics removed before counting: tanween, short vowels, shadda,
/// sukun, superscript alef, and the tatweel.
const DIACRITICS: &[char] = &[
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}',
    '\u{0652}', '\u{0670}', '\u{0640}',
];

pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

/// Split Arabic text into sentences.
///
/// Diacritics are stripped first. Sentences are the pieces between literal
/// periods; `؟`, `!` and abbreviations do not end a sentence. Text without
/// any period is one sentence.
///
/// Every piece counts toward `sentence_count`, including the blank one after
/// a final period, but only pieces with text become sentences.
pub fn segment(text: &str) -> Segmentation {
    let stripped = strip_diacritics(text);
    if stripped.trim().is_empty() {
        return Segmentation::new(stripped, Vec::new());
    }

    let mut sentences = Vec::new();
    let mut pieces = 0;
    let mut offset = 0;
    for piece in stripped.split('.') {
        pieces += 1;
        let span = offset..offset + piece.len();
        offset = span.end + '.'.len_utf8();

        let Some(span) = trim_span(&stripped, span) else {
            continue;
        };
        let surface = &stripped[span.clone()];
        sentences.push(Sentence {
            position: sentences.len(),
            span,
            text: surface.to_string(),
            tokens: tokenize(surface),
        });
    }

    Segmentation {
        text: stripped,
        sentences,
        sentence_count: pieces,
    }
}

/// Script-aware word tokenizer.
///
/// Words follow Unicode word boundaries, which treat Arabic letters as word
/// characters. Every punctuation or symbol character becomes its own token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.trim().is_empty() {
            continue;
        }
        if is_punctuation(segment) {
            tokens.extend(
                segment
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| Token::new(c.to_string())),
            );
        } else {
            tokens.push(Token::new(segment));
        }
    }
    tokens
}
