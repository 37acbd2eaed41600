//! Shopping-assistant service over the Gemini client.
//!
//! Both operations are best-effort: a missing credential short-circuits to a
//! fixed placeholder without touching the network, and any transport or API
//! failure is converted to a fixed fallback string. Callers never see an
//! error.

use tracing::{instrument, warn};

use lumina_core::{ChatRole, Product};

use crate::config::GeminiConfig;
use crate::gemini::{Content, GeminiClient, GeminiError};
use crate::models::chat::ChatMessage;

/// Returned for description generation when no credential is configured.
pub const DESCRIPTION_UNAVAILABLE: &str = "AI Description unavailable (Missing API Key).";
/// Returned when the description request fails.
pub const DESCRIPTION_FAILED: &str = "Failed to generate description.";
/// Returned when the model produced no description text.
pub const DESCRIPTION_EMPTY: &str = "No description generated.";

/// Returned for chat when no credential is configured.
pub const ASSISTANT_UNAVAILABLE: &str = "I'm sorry, I can't help right now (Missing API Key).";
/// Returned when the chat request fails.
pub const ASSISTANT_FAILED: &str = "I'm having trouble connecting to my brain right now.";
/// Returned when the model produced no reply text.
pub const ASSISTANT_EMPTY: &str = "I didn't catch that.";

/// AI text service for product descriptions and the shopping assistant.
pub struct AssistantService {
    client: Option<GeminiClient>,
}

impl AssistantService {
    /// Build the service; `None` config puts it in degraded mode.
    #[must_use]
    pub fn from_config(config: Option<&GeminiConfig>) -> Self {
        Self {
            client: config.map(GeminiClient::new),
        }
    }

    /// Whether a Gemini credential is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Generate an e-commerce product description (about 80 words).
    #[instrument(skip(self, features))]
    pub async fn generate_product_description(
        &self,
        name: &str,
        category: &str,
        features: &str,
    ) -> String {
        let Some(client) = &self.client else {
            return DESCRIPTION_UNAVAILABLE.to_string();
        };

        let prompt = description_prompt(name, category, features);
        match client.generate(vec![Content::user(prompt)], None).await {
            Ok(text) => text,
            Err(GeminiError::Empty) => DESCRIPTION_EMPTY.to_string(),
            Err(e) => {
                warn!("description generation failed: {e}");
                DESCRIPTION_FAILED.to_string()
            }
        }
    }

    /// Produce an assistant reply to `user_message`, given the running
    /// transcript and the current inventory.
    #[instrument(skip(self, history, user_message, inventory))]
    pub async fn shopping_assistant_reply(
        &self,
        history: &[ChatMessage],
        user_message: &str,
        inventory: &[Product],
    ) -> String {
        let Some(client) = &self.client else {
            return ASSISTANT_UNAVAILABLE.to_string();
        };

        let mut contents: Vec<Content> = history.iter().map(to_content).collect();
        contents.push(Content::user(user_message));

        let system = system_instruction(inventory);
        match client.generate(contents, Some(system)).await {
            Ok(text) => text,
            Err(GeminiError::Empty) => ASSISTANT_EMPTY.to_string(),
            Err(e) => {
                warn!("assistant reply failed: {e}");
                ASSISTANT_FAILED.to_string()
            }
        }
    }
}

/// Map a transcript turn onto the wire format.
fn to_content(message: &ChatMessage) -> Content {
    match message.role {
        ChatRole::User => Content::user(message.text.clone()),
        ChatRole::Assistant => Content::model(message.text.clone()),
    }
}

/// Prompt for one-shot description generation.
fn description_prompt(name: &str, category: &str, features: &str) -> String {
    format!(
        "Write a compelling, SEO-friendly e-commerce product description (max 80 words) \
         for a product named \"{name}\" in the category \"{category}\". \
         Key features: {features}. Return only the description text."
    )
}

/// Flatten the inventory into the `name ($price, category)` listing the
/// assistant is briefed with.
fn inventory_context(inventory: &[Product]) -> String {
    inventory
        .iter()
        .map(|p| format!("{} (${}, {})", p.name, p.price.amount, p.category))
        .collect::<Vec<_>>()
        .join(", ")
}

/// System instruction embedding the current inventory.
fn system_instruction(inventory: &[Product]) -> String {
    format!(
        "You are Lumina, a helpful AI shopping assistant for an e-commerce store.\n\
         You have access to the current store inventory: [{}].\n\
         Always be polite, concise, and helpful.\n\
         If a user asks for a product, recommend specific items from the inventory list provided.\n\
         If the user asks about something not in stock, suggest the closest alternative or say we don't have it.\n\
         Keep responses under 50 words unless detail is requested.",
        inventory_context(inventory)
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use lumina_core::{Price, ProductId};

    use super::*;

    fn product(name: &str, cents: i64, category: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            description: String::new(),
            price: Price::usd(Decimal::new(cents, 2)),
            category: category.to_string(),
            image: String::new(),
            stock: 5,
            rating: Decimal::ZERO,
        }
    }

    #[test]
    fn test_description_prompt_embeds_inputs_and_length_cap() {
        let prompt = description_prompt("Trail Lantern", "Outdoors", "solar, collapsible");
        assert!(prompt.contains("\"Trail Lantern\""));
        assert!(prompt.contains("\"Outdoors\""));
        assert!(prompt.contains("solar, collapsible"));
        assert!(prompt.contains("max 80 words"));
    }

    #[test]
    fn test_inventory_context_format() {
        let inventory = vec![
            product("Minimalist Leather Watch", 12999, "Accessories"),
            product("Ceramic Pour-Over Set", 4500, "Home"),
        ];
        assert_eq!(
            inventory_context(&inventory),
            "Minimalist Leather Watch ($129.99, Accessories), Ceramic Pour-Over Set ($45.00, Home)"
        );
    }

    #[test]
    fn test_system_instruction_embeds_inventory_and_persona() {
        let instruction = system_instruction(&[product("Canvas Weekender Bag", 11000, "Travel")]);
        assert!(instruction.starts_with("You are Lumina"));
        assert!(instruction.contains("[Canvas Weekender Bag ($110.00, Travel)]"));
        assert!(instruction.contains("under 50 words"));
    }

    #[test]
    fn test_history_maps_assistant_to_model_role() {
        let message = ChatMessage::new(ChatRole::Assistant, "We do.");
        let content = to_content(&message);
        assert_eq!(content.role.as_deref(), Some("model"));
        assert_eq!(content.text(), "We do.");

        let message = ChatMessage::new(ChatRole::User, "Any headphones?");
        assert_eq!(to_content(&message).role.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn test_degraded_description_returns_placeholder() {
        let service = AssistantService::from_config(None);
        assert!(!service.is_configured());

        let text = service
            .generate_product_description("Trail Lantern", "Outdoors", "solar")
            .await;
        assert_eq!(text, DESCRIPTION_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_degraded_assistant_returns_placeholder() {
        let service = AssistantService::from_config(None);

        let reply = service
            .shopping_assistant_reply(&[], "Do you have any watches?", &[])
            .await;
        assert_eq!(reply, ASSISTANT_UNAVAILABLE);
    }
}
