//! Chat roles for the shopping assistant transcript.

use serde::{Deserialize, Serialize};

/// Role of a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// A message typed by the shopper.
    User,
    /// A reply produced by the assistant.
    Assistant,
}
