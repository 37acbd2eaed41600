//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ServerConfig;
use crate::models::chat::Transcript;
use crate::services::assistant::AssistantService;
use crate::store::cart::CartStore;
use crate::store::catalog::CatalogStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The shop stores live behind
/// `RwLock`s: every mutation is synchronous and completes before the guard
/// drops, and a guard is never held across an `.await` (handlers snapshot
/// state before calling the assistant).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    assistant: AssistantService,
    catalog: RwLock<CatalogStore>,
    cart: RwLock<CartStore>,
    transcript: RwLock<Transcript>,
}

impl AppState {
    /// Create a new application state with the seeded demo catalog, an empty
    /// cart, and a fresh chat transcript.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let assistant = AssistantService::from_config(config.gemini());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                assistant,
                catalog: RwLock::new(CatalogStore::seeded()),
                cart: RwLock::new(CartStore::new()),
                transcript: RwLock::new(Transcript::new()),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the assistant service.
    #[must_use]
    pub fn assistant(&self) -> &AssistantService {
        &self.inner.assistant
    }

    /// Read access to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the product catalog.
    #[must_use]
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the shopping cart.
    #[must_use]
    pub fn cart(&self) -> RwLockReadGuard<'_, CartStore> {
        self.inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the shopping cart.
    #[must_use]
    pub fn cart_mut(&self) -> RwLockWriteGuard<'_, CartStore> {
        self.inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the chat transcript.
    #[must_use]
    pub fn transcript(&self) -> RwLockReadGuard<'_, Transcript> {
        self.inner
            .transcript
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the chat transcript.
    #[must_use]
    pub fn transcript_mut(&self) -> RwLockWriteGuard<'_, Transcript> {
        self.inner
            .transcript
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
