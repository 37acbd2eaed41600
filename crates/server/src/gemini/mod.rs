//! Gemini API integration.
//!
//! Thin typed wrapper over the `generateContent` REST endpoint. Higher-level
//! behavior (prompts, fallback strings) lives in
//! [`crate::services::assistant`].

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{Content, GenerateRequest, GenerateResponse, Part};
