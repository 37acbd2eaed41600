//! Domain models for the server.

pub mod chat;

pub use chat::{ChatMessage, Transcript};
