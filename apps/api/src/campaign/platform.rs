//! Platform table: one place that decides how each social platform shapes
//! image prompts, caption instructions and image dimensions.

/// Target social platform. Anything unrecognised falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    Instagram,
    Twitter,
    Other,
}

/// Caption instructions for a platform.
#[derive(Debug, Clone, Copy)]
pub struct CaptionFormat {
    /// What to ask for, e.g. "professional LinkedIn captions".
    pub label: &'static str,
    /// Singular noun used in the separator instruction ("caption" or "post").
    pub unit: &'static str,
    /// Bullet rules, rendered one per line with a leading "- ".
    pub rules: &'static [&'static str],
}

/// Everything that varies by platform.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    pub image_suffix: &'static str,
    pub image_size: &'static str,
    pub caption: CaptionFormat,
}

const LINKEDIN: PlatformProfile = PlatformProfile {
    image_suffix: "Professional corporate design, clean minimal layout, ample whitespace, \
        subtle gradients, premium look, safe margins (keep key elements within center 70%).",
    image_size: "1024x1536",
    caption: CaptionFormat {
        label: "professional LinkedIn captions",
        unit: "caption",
        rules: &[
            "3–5 lines each",
            "confident, business-friendly",
            "include 3–8 relevant hashtags",
            "avoid excessive emojis",
        ],
    },
};

const INSTAGRAM: PlatformProfile = PlatformProfile {
    image_suffix: "Modern vibrant aesthetic, bold composition, lifestyle-friendly look, \
        rich visuals, high contrast, trendy but clean, safe margins.",
    image_size: "1024x1536",
    caption: CaptionFormat {
        label: "Instagram captions",
        unit: "caption",
        rules: &[
            "friendly and catchy",
            "1–3 short paragraphs",
            "can use a few emojis",
            "include 8–15 hashtags",
        ],
    },
};

const TWITTER: PlatformProfile = PlatformProfile {
    image_suffix: "Bold, simple, high-contrast design, minimal elements, clear focal point, \
        optimized for fast scrolling, safe margins.",
    image_size: "1536x1024",
    caption: CaptionFormat {
        label: "X (Twitter) posts",
        unit: "post",
        rules: &["max ~200 characters each", "punchy", "1–3 hashtags"],
    },
};

const OTHER: PlatformProfile = PlatformProfile {
    image_suffix: "Clean modern design, safe margins, high quality.",
    image_size: "1024x1024",
    caption: CaptionFormat {
        label: "captions",
        unit: "caption",
        rules: &["include hashtags"],
    },
};

impl Platform {
    /// Case-insensitive exact match. Surrounding whitespace is not stripped,
    /// so `" linkedin"` is `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "linkedin" => Platform::LinkedIn,
            "instagram" => Platform::Instagram,
            "twitter" | "x" => Platform::Twitter,
            _ => Platform::Other,
        }
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::LinkedIn => &LINKEDIN,
            Platform::Instagram => &INSTAGRAM,
            Platform::Twitter => &TWITTER,
            Platform::Other => &OTHER,
        }
    }

    /// Image dimensions requested from the generation service.
    pub fn image_size(self) -> &'static str {
        self.profile().image_size
    }
}
