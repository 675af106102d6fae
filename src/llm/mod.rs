//! Generative backend abstraction and the ordered model fallback.
//!
//! - [`GenerativeBackend`] — the seam between the orchestrator and a
//!   concrete completion client
//! - [`gemini`] — the Gemini `generateContent` implementation
//! - [`fallback`] — one attempt per candidate model, first non-empty
//!   success wins

pub mod fallback;
pub mod gemini;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::GenerationError;

/// Seam between the orchestrator and a concrete generative backend.
///
/// Implementations perform one completion call against one model
/// identifier. Returning an empty text payload is an error
/// ([`GenerationError::EmptyResponse`]); the fallback chain treats it
/// like any other per-attempt failure.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate a completion for `prompt` with the given model.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Generate a unique id for one fallback-chain invocation, used to
/// correlate log lines across candidate attempts.
pub fn generate_call_id() -> String {
    Uuid::new_v4().to_string()
}

pub use fallback::{generate_with_fallback, Exhausted};
pub use gemini::GeminiClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_call_id_is_unique() {
        let a = generate_call_id();
        let b = generate_call_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
