use std::sync::Arc;

use crate::genai_client::GenerationService;
use crate::storage::ImageStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Hosted text/image generation. Default: `OpenAiClient`; tests swap in a stub.
    pub genai: Arc<dyn GenerationService>,
    pub storage: ImageStore,
}
