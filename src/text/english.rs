use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use super::resources::EnglishResources;
use super::{trim_span, Segmentation, Sentence, Token};

/// Split English text into sentences.
///
/// Boundaries come from the Unicode sentence rules, which keep decimals and
/// lowercase continuations together. A boundary is then undone when it
/// follows a known abbreviation or a name initial, or when it is only a
/// line wrap: a single line break after text with no terminal punctuation.
pub fn segment(text: &str, resources: &EnglishResources) -> Segmentation {
    let mut spans: Vec<Range<usize>> = Vec::new();

    for (start, segment) in text.split_sentence_bound_indices() {
        let end = start + segment.len();
        match spans.last_mut() {
            Some(prev) if continues_into_next(&text[prev.clone()], resources) => {
                prev.end = end;
            }
            _ => spans.push(start..end),
        }
    }

    let sentences = spans
        .into_iter()
        .filter_map(|span| trim_span(text, span))
        .enumerate()
        .map(|(position, span)| {
            let surface = &text[span.clone()];
            Sentence {
                position,
                span,
                text: surface.to_string(),
                tokens: tokenize(surface),
            }
        })
        .collect();

    Segmentation::new(text.to_string(), sentences)
}

/// Word tokens of `text`, whitespace dropped, punctuation flagged.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .map(Token::new)
        .collect()
}

const TERMINALS: &[char] = &['.', '?', '!', '\u{2026}'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];

fn continues_into_next(segment: &str, resources: &EnglishResources) -> bool {
    is_line_wrap(segment) || ends_with_abbreviation(segment, resources)
}

/// The segment stops at a single line break without ending a sentence.
/// Blank lines still separate paragraphs and headings.
fn is_line_wrap(segment: &str) -> bool {
    let body = segment.trim_end();
    if body.is_empty() {
        return false;
    }
    let line_breaks = segment[body.len()..].matches('\n').count();
    let ends_sentence = body.trim_end_matches(CLOSERS).ends_with(TERMINALS);
    line_breaks <= 1 && !ends_sentence
}

fn ends_with_abbreviation(segment: &str, resources: &EnglishResources) -> bool {
    let Some(body) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let mut words = body.split_whitespace().rev();
    let Some(last) = words.next() else {
        return false;
    };
    let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return is_name_initial(first, words.next());
    }

    resources.is_abbreviation(&word.to_lowercase())
}

/// A capital letter reads as an initial when it opens the segment or follows
/// a capitalized word or another initial: "J. Smith", "John F. Kennedy".
/// The pronoun "I" and "plan B." or "World War I." end sentences.
fn is_name_initial(letter: char, preceding: Option<&str>) -> bool {
    if !letter.is_uppercase() || letter == 'I' {
        return false;
    }
    match preceding {
        None => true,
        Some(word) => word
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .starts_with(char::is_uppercase),
    }
}
