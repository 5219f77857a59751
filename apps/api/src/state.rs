use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
/// Everything here is request-independent; no handler mutates it.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
