use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelApi;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable state, so concurrent requests do not interfere.
#[derive(Clone)]
pub struct AppState {
    /// Model API seam. Production wiring installs `LlmClient`; tests
    /// substitute a counting double.
    pub model: Arc<dyn ModelApi>,
    pub config: Config,
}
