//! Reply pipeline: intent classification, scripted responses, prompt
//! assembly, and the orchestrator that composes them.
//!
//! - [`intent`] — message text → response category (pure, deterministic)
//! - [`scripted`] — per-category utterance sets with injected randomness
//! - [`prompt`] — fixed-order prompt assembly for the generative backend
//! - [`orchestrator`] — top-level entry point deciding generative vs.
//!   degraded mode

pub mod intent;
pub mod orchestrator;
pub mod prompt;
pub mod scripted;

pub use intent::{classify, ResponseCategory};
pub use orchestrator::{ReplyOrchestrator, EXHAUSTED_MARKER, SCRIPTED_MARKER};
