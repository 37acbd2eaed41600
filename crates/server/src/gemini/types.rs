//! Types for the Gemini API.
//!
//! These types match the `generateContent` REST wire format.

use serde::{Deserialize, Serialize};

/// Wire role for a shopper turn.
pub const ROLE_USER: &str = "user";
/// Wire role for a model turn.
pub const ROLE_MODEL: &str = "model";

/// A single text part within a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text content.
    pub text: String,
}

/// A conversation entry: an optional role plus its text parts.
///
/// The role is omitted for system instructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; absent on system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered text parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn holding a single text part.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(ROLE_USER.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A model turn holding a single text part.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some(ROLE_MODEL.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A role-less system instruction.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Ordered conversation turns, oldest first.
    pub contents: Vec<Content>,
    /// Optional system instruction steering the model.
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

/// Response body from the `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Generated candidates; normally exactly one.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage information.
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A single generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content; may be absent when generation was blocked.
    pub content: Option<Content>,
    /// Reason generation stopped (e.g., "STOP", "MAX_TOKENS", "SAFETY").
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageMetadata {
    /// Number of prompt tokens.
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: Option<u32>,
    /// Number of generated tokens.
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: Option<u32>,
    /// Total tokens billed.
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<u32>,
}
