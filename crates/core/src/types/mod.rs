//! Core types for Lumina.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod chat;
pub mod id;
pub mod price;
pub mod product;

pub use chat::ChatRole;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{CartLine, Product};
