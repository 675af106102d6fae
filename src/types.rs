//! Core data types shared between the web layer and the reply pipeline.
//!
//! Wire shapes match the demo front-end: senders serialize as
//! `"user"`/`"bot"` and each history entry carries its text under
//! `message`.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, message: impl Into<String>) -> Self {
        Self {
            sender,
            message: message.into(),
        }
    }
}

/// Per-request conversation context supplied by the caller.
///
/// History is ordered oldest-first; insertion order is chronological
/// order. The orchestrator borrows this for one request and never
/// stores it.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    /// Free-text scenario context, if the front-end provided one.
    pub context: Option<String>,
    /// Prior messages of this conversation.
    pub history: Vec<ChatMessage>,
}

/// Final output of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyResult {
    /// The reply text, never empty.
    pub text: String,
    /// True when the text came from the scripted library rather than
    /// the generative backend, so callers can annotate it.
    pub degraded: bool,
}
