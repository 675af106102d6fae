//! HTTP surface for the reply service.
//!
//! # Endpoints
//!
//! - `GET  /health`      — liveness probe
//! - `POST /api/gemini`  — one classify-then-respond chat transaction
//! - `GET  /`            — redirect to the demo page
//! - `GET  /:filename`   — serve a demo asset from the static directory

pub mod routes;

pub use routes::{app_router, AppState, ChatRequest};
