//! # Recovery Seed
//!
//! Reply service for the "회복의 씨앗" (Seed of Recovery) self-compassion
//! chat demo. Each request is one independent classify-then-respond
//! transaction: the orchestrator builds a prompt from the message and its
//! conversation context, walks an ordered list of Gemini models until one
//! returns text, and degrades to a scripted, rule-classified reply when
//! generation is unavailable or every candidate fails.

pub mod chat;
pub mod config;
pub mod errors;
pub mod llm;
pub mod server;
pub mod types;

pub use chat::{ReplyOrchestrator, ResponseCategory};
pub use config::BackendConfig;
pub use errors::{GenerationError, ReplyError};
pub use llm::{GeminiClient, GenerativeBackend};
pub use types::{ChatMessage, ConversationContext, ReplyResult, Sender};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
