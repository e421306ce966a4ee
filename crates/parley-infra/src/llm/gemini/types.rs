//! Gemini generateContent API wire types.
//!
//! Request and response structures for
//! `/v1beta/models/{model}:generateContent`. The response nests the reply
//! text three levels deep: `candidates[0].content.parts[0].text`.

use serde::{Deserialize, Serialize};

use parley_types::llm::{CompletionReply, LlmError};

/// Request body for generateContent.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

/// One content block in a request.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

/// A text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Response body for generateContent.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiCandidateContent>,
}

/// The content block inside a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiRequest {
    /// Build the single-prompt request this API expects.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

impl GeminiResponse {
    /// Extract the reply text from the first candidate's first part.
    pub fn into_reply(self) -> Result<CompletionReply, LlmError> {
        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            LlmError::MalformedResponse("response contained no candidates".to_string())
        })?;
        let content = candidate.content.ok_or_else(|| {
            LlmError::MalformedResponse("first candidate had no content".to_string())
        })?;
        let part = content.parts.into_iter().next().ok_or_else(|| {
            LlmError::MalformedResponse("candidate content had no parts".to_string())
        })?;
        Ok(CompletionReply { content: part.text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_reply_extracts_nested_text() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hi there!"}],"role":"model"}}]}"#,
        )
        .unwrap();
        let reply = response.into_reply().unwrap();
        assert_eq!(reply.content, "Hi there!");
    }

    #[test]
    fn test_into_reply_rejects_empty_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            response.into_reply(),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_into_reply_rejects_candidate_without_parts() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            response.into_reply(),
            Err(LlmError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_from_prompt_shape() {
        let request = GeminiRequest::from_prompt("Hello");
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }
}
