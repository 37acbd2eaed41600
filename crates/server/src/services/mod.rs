//! Services for the server.

pub mod assistant;

pub use assistant::AssistantService;
