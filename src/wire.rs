//! Wire format for the remote generative-language API.

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
}

/// One entry of the request `contents` array.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

/// Part of a request content.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateRequest {
    /// Wrap a single prompt in the provider's nested request schema.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Response body of a `generateContent` call.
///
/// Only the fields on the extraction path are modeled; everything else the
/// provider sends (safety ratings, usage metadata, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// Part of a candidate's content. Non-text parts deserialize with
/// `text: None`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::from_prompt("What is the capital of France?");
        let body = serde_json::to_string(&request).unwrap();

        assert_eq!(
            body,
            r#"{"contents":[{"parts":[{"text":"What is the capital of France?"}]}]}"#
        );
    }

    #[test]
    fn test_prompt_with_quotes_and_backslashes_stays_valid_json() {
        let request = GenerateRequest::from_prompt(r#"say "hi" and print C:\tmp"#);
        let body = serde_json::to_string(&request).unwrap();

        // Must parse back; naive interpolation would emit malformed JSON here.
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            parsed["contents"][0]["parts"][0]["text"],
            r#"say "hi" and print C:\tmp"#
        );
    }

    #[test]
    fn test_response_parses_with_extra_fields() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Paris"}]},
                "finishReason": "STOP",
                "safetyRatings": []
            }],
            "usageMetadata": {"promptTokenCount": 5, "totalTokenCount": 12}
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(
            response.candidates[0].content.parts[0].text.as_deref(),
            Some("Paris")
        );
    }

    #[test]
    fn test_response_without_candidates_parses_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
