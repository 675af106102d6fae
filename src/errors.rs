//! Error types for the reply pipeline.

use thiserror::Error;

/// Errors surfaced to the caller of the orchestrator.
///
/// Everything else that can go wrong during a request (backend
/// failures, empty generations) is absorbed by the fallback chain and
/// the degraded mode before it reaches this boundary.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The incoming message was empty or missing. Maps to a 400 at the
    /// web boundary.
    #[error("사용자 메시지가 없습니다.")]
    EmptyMessage,

    /// Any other internal failure. The detail stays in the logs; the
    /// boundary serializes a generic message.
    #[error("서버 오류가 발생했습니다.")]
    Internal(String),
}

/// Per-attempt failures from the generative backend.
///
/// Every variant is a soft failure to the fallback chain: it is logged
/// and the next candidate model is tried.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport-level failure reaching the backend, including the
    /// per-attempt timeout.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status or an error payload
    /// (quota, unsupported model, bad request).
    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The call succeeded but carried no text.
    #[error("empty text payload")]
    EmptyResponse,
}
