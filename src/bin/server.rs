//! recovery-seed HTTP server binary.
//!
//! # Environment Variables
//!
//! - `GOOGLE_API_KEY` / `GEMINI_API_KEY` — Gemini credential; when absent
//!   the server runs in scripted demo mode
//! - `GEMINI_MODELS` — comma-separated fallback order override
//! - `PORT` — HTTP port (default: 5000)
//! - `STATIC_DIR` — demo asset directory (default: "static")
//! - `RUST_LOG` — tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use std::sync::Arc;

use recovery_seed::chat::ReplyOrchestrator;
use recovery_seed::config::BackendConfig;
use recovery_seed::llm::GeminiClient;
use recovery_seed::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recovery_seed=debug".into()),
        )
        .init();

    let config = BackendConfig::from_env();

    let orchestrator = match &config.api_key {
        Some(key) => {
            let prefix: String = key.chars().take(10).collect();
            tracing::info!("Gemini API key loaded: {}...", prefix);
            tracing::info!("generative mode enabled, candidates: {:?}", config.candidates);
            let client = GeminiClient::new(key.clone())?;
            ReplyOrchestrator::new(Arc::new(client), config.candidates.clone())
        }
        None => {
            tracing::warn!("GOOGLE_API_KEY is not set");
            tracing::warn!(
                "running in scripted demo mode; set GOOGLE_API_KEY in .env for real generation"
            );
            ReplyOrchestrator::degraded()
        }
    };

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        static_dir: config.static_dir.clone(),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let app = app_router(state);

    tracing::info!("recovery-seed server starting on {}", bind_addr);
    tracing::info!(
        "open http://localhost:{} in a browser for the demo page",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
