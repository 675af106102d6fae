//! Process-wide configuration, resolved once at startup.
//!
//! Nothing outside `main` reads environment variables; the resolved
//! config is passed into the orchestrator and the server.

use std::env;

/// Fixed model fallback order: higher-capability model first, lighter
/// fallback second.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["gemini-1.5-pro", "gemini-1.5-flash"];

/// Default HTTP port of the demo server.
pub const DEFAULT_PORT: u16 = 5000;

/// Startup configuration for the server binary.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Gemini API key. `None` runs the service in scripted demo mode.
    pub api_key: Option<String>,
    /// Ordered model fallback candidates. Never mutated after startup.
    pub candidates: Vec<String>,
    /// HTTP port.
    pub port: u16,
    /// Directory the demo page and assets are served from.
    pub static_dir: String,
}

impl BackendConfig {
    /// Load from environment variables.
    ///
    /// - `GOOGLE_API_KEY` / `GEMINI_API_KEY` — credential (first wins)
    /// - `GEMINI_MODELS` — comma-separated candidate override
    /// - `PORT` — HTTP port (default: 5000)
    /// - `STATIC_DIR` — demo asset directory (default: "static")
    pub fn from_env() -> Self {
        let api_key = env::var("GOOGLE_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());

        let candidates = env::var("GEMINI_MODELS")
            .ok()
            .map(|raw| parse_candidates(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_candidates);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Self {
            api_key,
            candidates,
            port,
            static_dir,
        }
    }
}

/// The built-in candidate order as owned strings.
pub fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|m| m.to_string()).collect()
}

/// Parse a comma-separated model list, dropping empty segments.
fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_order() {
        let candidates = default_candidates();
        assert_eq!(candidates, vec!["gemini-1.5-pro", "gemini-1.5-flash"]);
    }

    #[test]
    fn test_parse_candidates() {
        assert_eq!(
            parse_candidates("gemini-1.5-pro, gemini-1.5-flash"),
            vec!["gemini-1.5-pro", "gemini-1.5-flash"]
        );
        assert_eq!(parse_candidates("solo-model"), vec!["solo-model"]);
    }

    #[test]
    fn test_parse_candidates_drops_empty_segments() {
        assert_eq!(parse_candidates("a,,b,"), vec!["a", "b"]);
        assert!(parse_candidates(" , ").is_empty());
    }
}
