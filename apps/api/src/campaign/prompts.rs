//! Prompt builders for campaign images and captions.
//!
//! Both builders are pure: the same input always renders the same string.

use crate::campaign::models::{non_empty, CampaignRequest};
use crate::campaign::platform::Platform;

// Fallbacks used when an image-prompt field is absent or blank.
pub const DEFAULT_COMPANY: &str = "the brand";
pub const DEFAULT_EVENT: &str = "a promotional campaign";
pub const DEFAULT_TITLE: &str = "Marketing Campaign";
pub const DEFAULT_DESCRIPTION: &str = "a modern digital product";
pub const DEFAULT_AUDIENCE: &str = "modern digital users";
pub const DEFAULT_CALL_TO_ACTION: &str = "Engage with our latest offering!";
pub const DEFAULT_STYLE: &str = "modern digital illustration";
pub const DEFAULT_MOOD: &str = "bold, innovative, premium";
pub const DEFAULT_COLOR: &str = "dynamic gradient tones";
pub const DEFAULT_PRODUCT_NAME: &str = "the featured product";
pub const DEFAULT_MESSAGE: &str = "a clear, memorable brand story";
pub const DEFAULT_FEATURES: &str = "signature product strengths";
pub const DEFAULT_LAYOUT: &str = "balanced layout with a clear focal point";

/// Appended to every image prompt.
pub const CREATIVE_VARIATION_RULES: &str = "Creative variation rules:
- Each generated image must use a different concept and layout
- Vary camera angle (close-up, wide, top-down, dramatic side)
- Vary lighting (soft glow, dramatic contrast, ambient, neon accent)
- Use abstract, symbolic, or lifestyle-based interpretations where suitable
- Explore depth, shadows, reflections, motion blur, or subtle 3D feel
Generate premium-quality, original artwork suitable for social media marketing.";

/// Appended to every image prompt, after the variation rules.
pub const AVOID_RULES: &str = "Avoid if not mentioned:
- Text overlays, logos, or watermarks
- If a logo is given, use it exactly as it is; never modify, redraw, or restyle it";

fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    non_empty(Some(value)).unwrap_or(fallback)
}

fn opt_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    non_empty(value.as_deref()).unwrap_or(fallback)
}

fn features_or_default(features: &Option<Vec<String>>) -> String {
    let listed: Vec<&str> = features
        .iter()
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();

    if listed.is_empty() {
        DEFAULT_FEATURES.to_string()
    } else {
        listed.join("; ")
    }
}

/// Builds the image-generation prompt for a campaign request.
pub fn build_image_prompt(req: &CampaignRequest) -> String {
    let company = non_empty(Some(req.company.as_str()))
        .or(non_empty(req.brand_name.as_deref()))
        .unwrap_or(DEFAULT_COMPANY);
    let event = text_or(&req.event, DEFAULT_EVENT);
    let title = text_or(&req.title, DEFAULT_TITLE);
    let description = text_or(&req.product_description, DEFAULT_DESCRIPTION);
    let product = opt_or(&req.product_name, DEFAULT_PRODUCT_NAME);
    let message = opt_or(&req.campaign_message, DEFAULT_MESSAGE);
    let features = features_or_default(&req.features);
    let audience = opt_or(&req.target_audience, DEFAULT_AUDIENCE);
    let call_to_action = opt_or(&req.call_to_action, DEFAULT_CALL_TO_ACTION);
    let style = opt_or(&req.style, DEFAULT_STYLE);
    let mood = opt_or(&req.mood, DEFAULT_MOOD);
    let color = opt_or(&req.color, DEFAULT_COLOR);
    let layout = opt_or(&req.layout, DEFAULT_LAYOUT);

    let base = format!(
        "Create a high-impact, visually striking social media campaign image.

Brand context:
Company: {company}
Campaign/Event: {event}
Theme: {title}
Key message: {message}

Product essence:
{product}: {description}
Key features: {features}

Target audience:
{audience}

Call to action:
{call_to_action}

Art direction:
- Style: {style}
- Mood: {mood}
- Color palette inspiration: {color}
- Layout: {layout}
- Cinematic lighting and strong depth
- Clear focal point with dynamic composition
- Layered background elements for richness
- Avoid flat generic stock-photo look

{CREATIVE_VARIATION_RULES}

{AVOID_RULES}"
    );

    let suffix = Platform::parse(&req.platform).profile().image_suffix;
    format!("{base} {suffix}")
}

/// Builds the caption-generation prompt.
///
/// Optional clauses are appended to the context sentence in a fixed order
/// (target audience, product, call to action), each only when non-empty.
#[allow(clippy::too_many_arguments)]
pub fn build_caption_prompt(
    platform: &str,
    company: &str,
    event: &str,
    title: &str,
    details: &str,
    n: u32,
    target_audience: Option<&str>,
    product: Option<&str>,
    call_to_action: Option<&str>,
) -> String {
    let mut context = format!("{company} — {event}. Title: {title}. Details: {details}.");

    if let Some(audience) = non_empty(target_audience) {
        context.push_str(&format!(" Target audience: {audience}"));
    }
    if let Some(product) = non_empty(product) {
        context.push_str(&format!(" Product: {product}"));
    }
    if let Some(cta) = non_empty(call_to_action) {
        context.push_str(&format!(" Call to action: {cta}"));
    }

    let format = Platform::parse(platform).profile().caption;
    let rules: String = format
        .rules
        .iter()
        .map(|rule| format!("- {rule}\n"))
        .collect();

    format!(
        "Write {n} {label} for: {context}\n{rules}Return each {unit} separated by a blank line.",
        label = format.label,
        unit = format.unit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(platform: &str) -> CampaignRequest {
        serde_json::from_value(serde_json::json!({
            "username": "acme",
            "platform": platform,
            "company": "Acme",
            "event": "Launch",
            "title": "New App",
            "product_description": "A calendar that plans itself",
        }))
        .unwrap()
    }

    fn bare_request() -> CampaignRequest {
        serde_json::from_value(serde_json::json!({
            "username": "acme",
            "platform": "",
            "company": "",
            "event": "",
            "title": "",
            "product_description": "",
        }))
        .unwrap()
    }

    #[test]
    fn test_image_prompt_is_pure() {
        let req = request("instagram");
        assert_eq!(build_image_prompt(&req), build_image_prompt(&req));
    }

    #[test]
    fn test_image_prompt_fallbacks_when_fields_absent() {
        let prompt = build_image_prompt(&bare_request());
        for default in [
            DEFAULT_COMPANY,
            DEFAULT_EVENT,
            DEFAULT_TITLE,
            DEFAULT_DESCRIPTION,
            DEFAULT_AUDIENCE,
            DEFAULT_CALL_TO_ACTION,
            DEFAULT_STYLE,
            DEFAULT_MOOD,
            DEFAULT_COLOR,
            DEFAULT_PRODUCT_NAME,
            DEFAULT_MESSAGE,
            DEFAULT_FEATURES,
            DEFAULT_LAYOUT,
        ] {
            assert!(prompt.contains(default), "missing default {default:?}");
        }
        assert!(prompt.ends_with(Platform::Other.profile().image_suffix));
    }

    #[test]
    fn test_image_prompt_uses_brand_name_when_company_blank() {
        let mut req = bare_request();
        req.brand_name = Some("Globex".to_string());
        let prompt = build_image_prompt(&req);
        assert!(prompt.contains("Company: Globex"));
        assert!(!prompt.contains("Company: the brand"));
    }

    #[test]
    fn test_image_prompt_uses_supplied_fields() {
        let mut req = request("linkedin");
        req.style = Some("isometric 3D".to_string());
        req.features = Some(vec!["offline sync".to_string(), " ".to_string(), "AI agenda".to_string()]);
        let prompt = build_image_prompt(&req);
        assert!(prompt.contains("Company: Acme"));
        assert!(prompt.contains("- Style: isometric 3D"));
        assert!(prompt.contains("Key features: offline sync; AI agenda"));
        assert!(!prompt.contains(DEFAULT_STYLE));
    }

    #[test]
    fn test_image_prompt_always_has_fixed_blocks() {
        for platform in ["linkedin", "instagram", "x", "other"] {
            let prompt = build_image_prompt(&request(platform));
            assert!(prompt.contains(CREATIVE_VARIATION_RULES));
            assert!(prompt.contains(AVOID_RULES));
        }
    }

    #[test]
    fn test_image_prompt_platform_suffix_branches() {
        let cases = [
            ("LinkedIn", "Professional corporate design"),
            ("INSTAGRAM", "Modern vibrant aesthetic"),
            ("twitter", "optimized for fast scrolling"),
            ("X", "optimized for fast scrolling"),
            ("", "Clean modern design"),
            ("threads", "Clean modern design"),
        ];
        for (platform, marker) in cases {
            let prompt = build_image_prompt(&request(platform));
            assert!(prompt.contains(marker), "{platform:?} should contain {marker:?}");
        }
    }

    #[test]
    fn test_caption_context_clause() {
        let prompt = build_caption_prompt("linkedin", "Acme", "Launch", "New App", "...", 3, None, None, None);
        assert!(prompt.contains("Acme — Launch. Title: New App. Details: ...."));
        assert!(prompt.starts_with("Write 3 professional LinkedIn captions for: "));
        assert!(!prompt.contains("Target audience:"));
        assert!(!prompt.contains("Product:"));
        assert!(!prompt.contains("Call to action:"));
    }

    #[test]
    fn test_caption_optional_clauses_in_order() {
        let prompt = build_caption_prompt(
            "instagram",
            "Acme",
            "Launch",
            "New App",
            "Plans itself",
            4,
            Some("Founders"),
            Some("Acme Planner"),
            Some("Try it free"),
        );
        let audience = prompt.find(" Target audience: Founders").unwrap();
        let product = prompt.find(" Product: Acme Planner").unwrap();
        let cta = prompt.find(" Call to action: Try it free").unwrap();
        assert!(audience < product && product < cta);
    }

    #[test]
    fn test_caption_empty_optional_clauses_are_skipped() {
        let prompt = build_caption_prompt("x", "Acme", "Launch", "New App", "d", 2, Some(""), Some("  "), None);
        assert!(!prompt.contains("Target audience:"));
        assert!(!prompt.contains("Product:"));
    }

    #[test]
    fn test_caption_platform_format_branches() {
        let render = |p: &str| build_caption_prompt(p, "A", "B", "C", "D", 2, None, None, None);

        let linkedin = render("LINKEDIN");
        assert!(linkedin.contains("- 3–5 lines each\n"));
        assert!(linkedin.contains("- include 3–8 relevant hashtags\n"));

        let instagram = render("Instagram");
        assert!(instagram.contains("- include 8–15 hashtags\n"));
        assert!(instagram.contains("- 1–3 short paragraphs\n"));

        let twitter = render("x");
        assert!(twitter.starts_with("Write 2 X (Twitter) posts for: "));
        assert!(twitter.contains("- max ~200 characters each\n"));
        assert!(twitter.ends_with("Return each post separated by a blank line."));

        let other = render("");
        assert!(other.starts_with("Write 2 captions for: "));
        assert!(other.contains("- include hashtags\n"));
    }

    #[test]
    fn test_caption_default_variant_matches_template() {
        let prompt = build_caption_prompt("myspace", "A", "B", "C", "D", 5, None, None, None);
        assert_eq!(
            prompt,
            "Write 5 captions for: A — B. Title: C. Details: D.\n\
             - include hashtags\n\
             Return each caption separated by a blank line."
        );
    }

    #[test]
    fn test_every_caption_variant_requests_blank_line_separator() {
        for platform in ["linkedin", "instagram", "twitter", "x", "", "other"] {
            let prompt = build_caption_prompt(platform, "A", "B", "C", "D", 1, None, None, None);
            assert!(prompt.ends_with("separated by a blank line."), "{platform:?}");
        }
    }
}
