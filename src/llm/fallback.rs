//! Ordered model fallback over a generative backend.
//!
//! Each candidate gets exactly one attempt, strictly in configuration
//! order. Any error (transport, API, quota, unsupported model) and
//! any empty payload is a soft failure that advances the chain. The
//! first success ends the iteration; remaining candidates are not
//! tried, and the chain is never re-run within a request. Exhaustion is
//! reported as a value, not a panic.

use crate::errors::GenerationError;

use super::{generate_call_id, GenerativeBackend};

/// Outcome of an exhausted fallback chain: every candidate failed.
#[derive(Debug)]
pub struct Exhausted {
    /// Per-candidate failure reasons, in attempt order.
    pub attempts: Vec<(String, GenerationError)>,
}

/// Try `candidates` in order against `backend`, returning the first
/// successful non-empty text.
pub async fn generate_with_fallback(
    backend: &dyn GenerativeBackend,
    candidates: &[String],
    prompt: &str,
) -> Result<String, Exhausted> {
    let call_id = generate_call_id();
    let mut attempts = Vec::new();

    for model in candidates {
        match backend.generate(model, prompt).await {
            // Success requires a non-empty payload, whatever the backend
            // implementation claims.
            Ok(text) if text.trim().is_empty() => {
                log::warn!(
                    "generation attempt returned empty text: model={}, call_id={}",
                    model,
                    call_id
                );
                attempts.push((model.clone(), GenerationError::EmptyResponse));
            }
            Ok(text) => {
                log::debug!("generation succeeded: model={}, call_id={}", model, call_id);
                return Ok(text);
            }
            Err(err) => {
                log::warn!(
                    "generation attempt failed: model={}, call_id={}, error={}",
                    model,
                    call_id,
                    err
                );
                attempts.push((model.clone(), err));
            }
        }
    }

    Err(Exhausted { attempts })
}
