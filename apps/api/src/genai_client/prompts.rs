// Shared prompt fragments for the generation service.
// Campaign-specific templates live in campaign::prompts.

/// System prompt for caption generation. Reinforces the blank-line separator
/// that `campaign::captions::split_captions` relies on.
pub const CAPTION_SYSTEM: &str = "You are an expert social media copywriter. \
    Write ready-to-post captions only. \
    Do NOT number the captions or add headings. \
    Do NOT include explanations or commentary. \
    Separate consecutive captions with exactly one blank line.";
