use serde::{Deserialize, Serialize};

fn default_num_images() -> u32 {
    2
}

fn default_num_captions() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

/// Request body for `POST /generate`.
///
/// `Target_audience`, `Product` and `Style` are the keys the web form sends;
/// they are accepted alongside the snake_case names.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignRequest {
    pub username: String,
    pub platform: String,
    pub company: String,
    pub event: String,
    pub title: String,
    pub product_description: String,

    #[serde(default = "default_num_images")]
    pub num_images: u32,
    #[serde(default = "default_num_captions")]
    pub num_captions: u32,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default = "default_true")]
    pub want_images: bool,
    #[serde(default)]
    pub want_captions: bool,

    #[serde(default, alias = "Target_audience")]
    pub target_audience: Option<String>,
    #[serde(default, alias = "Product")]
    pub product_name: Option<String>,
    #[serde(default, alias = "Style")]
    pub style: Option<String>,
    #[serde(default)]
    pub campaign_message: Option<String>,

    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
}

/// Image half of a generation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOutput {
    /// References relative to the output root, e.g. `acme_generated_images/image_1.png`.
    pub images: Vec<String>,
    pub image_prompt: String,
    pub size: String,
}

/// Caption half of a generation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionOutput {
    pub captions: Vec<String>,
    pub caption_prompt: String,
}

/// Response body for `POST /generate`. Only the requested halves are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationResult {
    #[serde(flatten)]
    pub image: Option<ImageOutput>,
    #[serde(flatten)]
    pub caption: Option<CaptionOutput>,
}

/// Returns the value when it is present and not blank.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
