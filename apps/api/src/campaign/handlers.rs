//! Axum route handlers for the campaign API.

use axum::{extract::State, Json};
use tracing::info;

use crate::campaign::generator::generate_campaign;
use crate::campaign::models::{CampaignRequest, GenerationResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate
///
/// Generates campaign images and/or captions. Returns only the keys for the
/// output types that were requested.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CampaignRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    info!(
        "Generate request from {} (platform={:?}, images={}, captions={})",
        request.username, request.platform, request.want_images, request.want_captions
    );

    let result = generate_campaign(&request, state.genai.as_ref(), &state.storage).await?;

    Ok(Json(result))
}
