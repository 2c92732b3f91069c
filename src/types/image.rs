use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Display;
use validator::{Validate, ValidationError};

use super::{
    shared::{ImageResponseFormat, ImageSize, SharedImageFields},
    wire::WireRequest,
    DALL_E_2, DALL_E_3,
};
use crate::error::field_violation;

const DALL_E_2_PROMPT_LIMIT: usize = 1000;
const DALL_E_3_PROMPT_LIMIT: usize = 4000;

/// Request body for the classic DALL·E image generation models.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_image_request"))]
pub struct ImageRequest {
    /// A text description of the desired image(s). The maximum length is 1000 characters
    /// for dall-e-2 and 4000 characters for dall-e-3.
    #[validate(length(min = 1))]
    pub prompt: String,
    /// `hd` creates images with finer details and greater consistency across the image.
    /// Only supported by dall-e-3.
    pub quality: Option<ImageQuality>,
    /// Only supported by dall-e-3.
    pub style: Option<ImageStyle>,
    #[serde(flatten)]
    #[validate(nested)]
    pub shared: SharedImageFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageQuality {
    #[serde(rename = "standard")]
    SD,
    #[serde(rename = "hd")]
    HD,
}

impl Display for ImageQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageQuality::SD => write!(f, "standard"),
            ImageQuality::HD => write!(f, "hd"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStyle {
    /// Leans towards hyper-real and dramatic images.
    Vivid,
    /// Produces more natural, less hyper-real looking images.
    Natural,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            quality: None,
            style: None,
            shared: SharedImageFields::default(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.shared.model = Some(model.into());
        self
    }

    pub fn with_n(mut self, n: u8) -> Self {
        self.shared.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.shared.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, response_format: ImageResponseFormat) -> Self {
        self.shared.response_format = Some(response_format);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.shared.user = Some(user.into());
        self
    }
}

impl WireRequest for ImageRequest {
    const WIRE_FIELDS: &'static [&'static str] = &[
        "prompt",
        "quality",
        "style",
        "model",
        "n",
        "size",
        "response_format",
        "user",
    ];
}

// The server treats a missing model as dall-e-2. Unknown models only get the field checks.
fn validate_image_request(it: &ImageRequest) -> Result<(), ValidationError> {
    let prompt_len = it.prompt.chars().count();
    match it.shared.model.as_deref().unwrap_or(DALL_E_2) {
        DALL_E_2 => {
            if prompt_len > DALL_E_2_PROMPT_LIMIT {
                return Err(field_violation("prompt", "length"));
            }
            if it.quality.is_some() {
                return Err(field_violation("quality", "unsupported_by_model"));
            }
            if it.style.is_some() {
                return Err(field_violation("style", "unsupported_by_model"));
            }
        }
        DALL_E_3 => {
            if prompt_len > DALL_E_3_PROMPT_LIMIT {
                return Err(field_violation("prompt", "length"));
            }
            if it.shared.n.is_some_and(|n| n != 1) {
                return Err(field_violation("n", "unsupported_by_model"));
            }
        }
        _ => {}
    }
    Ok(())
}
