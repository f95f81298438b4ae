use crate::analysis::analyzer::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the process-wide model client; read-only after startup.
    pub analyzer: Analyzer,
    pub config: Config,
}
