/// Remove carriage returns, newlines and double quotes from a rendered summary.
///
/// Applied to the final string only; segmentation and scoring see the raw text.
pub fn clean_response(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '"'))
        .collect()
}
