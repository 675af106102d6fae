//! Reply orchestration: validate the message, choose generative or
//! degraded mode, and produce the final reply payload.
//!
//! One instance is shared across requests. The backend handle and the
//! candidate list are fixed at construction; a request runs to
//! completion with no cross-request state.

use std::sync::Arc;

use crate::errors::ReplyError;
use crate::llm::{generate_with_fallback, GenerativeBackend};
use crate::types::{ConversationContext, ReplyResult};

use super::intent;
use super::prompt;
use super::scripted;

/// Prefix on scripted output when no backend was ever configured.
pub const SCRIPTED_MARKER: &str = "[모의 응답] ";

/// Prefix on scripted output after every candidate model failed.
pub const EXHAUSTED_MARKER: &str = "[API 오류로 인해 모의 응답입니다] ";

/// Top-level reply engine.
pub struct ReplyOrchestrator {
    backend: Option<Arc<dyn GenerativeBackend>>,
    candidates: Vec<String>,
}

impl ReplyOrchestrator {
    /// Orchestrator with a generative backend and its fallback order.
    pub fn new(backend: Arc<dyn GenerativeBackend>, candidates: Vec<String>) -> Self {
        Self {
            backend: Some(backend),
            candidates,
        }
    }

    /// Orchestrator without a backend: every reply is scripted.
    pub fn degraded() -> Self {
        Self {
            backend: None,
            candidates: Vec::new(),
        }
    }

    /// Whether a generative backend is configured.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Produce exactly one reply for `message` under `context`.
    ///
    /// Empty messages fail with [`ReplyError::EmptyMessage`] before any
    /// classification happens. Otherwise the result always carries
    /// non-empty text: generated on success, scripted with a mode
    /// marker on exhaustion or when no backend is configured.
    pub async fn handle(
        &self,
        message: &str,
        context: &ConversationContext,
    ) -> Result<ReplyResult, ReplyError> {
        if message.is_empty() {
            return Err(ReplyError::EmptyMessage);
        }

        if let Some(backend) = &self.backend {
            let prompt = prompt::build_prompt(message, context);
            match generate_with_fallback(backend.as_ref(), &self.candidates, &prompt).await {
                Ok(text) => {
                    return Ok(ReplyResult {
                        text,
                        degraded: false,
                    })
                }
                Err(exhausted) => {
                    log::warn!(
                        "all {} candidate models failed, degrading to scripted reply",
                        exhausted.attempts.len()
                    );
                    return Ok(self.scripted_reply(message, EXHAUSTED_MARKER));
                }
            }
        }

        Ok(self.scripted_reply(message, SCRIPTED_MARKER))
    }

    /// Classify the message and answer from the scripted library.
    fn scripted_reply(&self, message: &str, marker: &str) -> ReplyResult {
        let category = intent::classify(message);
        let text = scripted::library().respond(category);
        ReplyResult {
            text: format!("{}{}", marker, text),
            degraded: true,
        }
    }
}
