//! Extraction of generated text from an assembled response body.

use crate::wire::GenerateResponse;

/// Extract the generated text at `candidates[0].content.parts[0].text`.
///
/// Returns `None` when the body is not valid JSON or the path is absent; the
/// gateway then falls back to the raw body rather than raising an error.
pub fn extract_text(body: &str) -> Option<String> {
    let response: GenerateResponse = serde_json::from_str(body).ok()?;
    response
        .candidates
        .first()?
        .content
        .parts
        .first()?
        .text
        .clone()
}
