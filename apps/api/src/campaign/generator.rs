//! Campaign generation: validates a request and runs the requested branches.
//!
//! Flow: validate → image branch (prompt → service → save files) →
//!       caption branch (prompt → service → split) → merged result.
//!
//! Branches run sequentially. An image failure aborts the request before the
//! caption branch is attempted; there is no partial result.

use tracing::info;

use crate::campaign::captions::split_captions;
use crate::campaign::models::{CampaignRequest, CaptionOutput, GenerationResult, ImageOutput};
use crate::campaign::platform::Platform;
use crate::campaign::prompts::{build_caption_prompt, build_image_prompt};
use crate::errors::AppError;
use crate::genai_client::GenerationService;
use crate::storage::ImageStore;

pub const NO_OUTPUT_SELECTED: &str =
    "Select at least one output type: want_images or want_captions";

/// Rejects requests that ask for nothing.
pub fn validate(request: &CampaignRequest) -> Result<(), AppError> {
    if !request.want_images && !request.want_captions {
        return Err(AppError::Validation(NO_OUTPUT_SELECTED.to_string()));
    }
    Ok(())
}

/// Image branch: builds the prompt, asks the service for images at the
/// platform size and writes them under the user's output directory.
pub async fn generate_images(
    request: &CampaignRequest,
    genai: &dyn GenerationService,
    store: &ImageStore,
) -> Result<ImageOutput, AppError> {
    // Fail on an unusable username before spending a generation call.
    ImageStore::user_dir_name(&request.username)?;

    let image_prompt = build_image_prompt(request);
    let size = Platform::parse(&request.platform).image_size();

    info!(
        "Generating {} images ({size}) for {}",
        request.num_images, request.username
    );
    let payloads = genai
        .generate_images(&image_prompt, request.num_images, size)
        .await?;
    let images = store.save_images(&request.username, &payloads).await?;

    Ok(ImageOutput {
        images,
        image_prompt,
        size: size.to_string(),
    })
}

/// Caption branch: builds the prompt, asks the service for one text block and
/// splits it into at most `num_captions` captions.
pub async fn generate_captions(
    request: &CampaignRequest,
    genai: &dyn GenerationService,
) -> Result<CaptionOutput, AppError> {
    let caption_prompt = build_caption_prompt(
        &request.platform,
        &request.company,
        &request.event,
        &request.title,
        &request.product_description,
        request.num_captions,
        request.target_audience.as_deref(),
        request.product_name.as_deref(),
        request.call_to_action.as_deref(),
    );

    info!(
        "Generating {} captions for {}",
        request.num_captions, request.username
    );
    let raw = genai.generate_text(&caption_prompt).await?;
    let captions = split_captions(&raw, request.num_captions);

    if captions.len() < request.num_captions as usize {
        info!(
            "Caption split yielded {} of {} requested",
            captions.len(),
            request.num_captions
        );
    }

    Ok(CaptionOutput {
        captions,
        caption_prompt,
    })
}

/// Validates the request, then runs the image branch followed by the caption
/// branch for whichever outputs were requested.
pub async fn generate_campaign(
    request: &CampaignRequest,
    genai: &dyn GenerationService,
    store: &ImageStore,
) -> Result<GenerationResult, AppError> {
    validate(request)?;

    let image = if request.want_images {
        Some(generate_images(request, genai, store).await?)
    } else {
        None
    };

    let caption = if request.want_captions {
        Some(generate_captions(request, genai).await?)
    } else {
        None
    };

    Ok(GenerationResult { image, caption })
}
