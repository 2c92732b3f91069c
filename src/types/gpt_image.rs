use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::{Validate, ValidationError};

use super::{shared::ImageSize, wire::WireRequest, GPT_IMAGE_1};
use crate::{config::RequestDefaults, error::field_violation};

/// Request body for `gpt-image-1` style models.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_gpt_image_request"))]
pub struct GptImageRequest {
    #[serde(default = "default_model")]
    pub model: String,
    #[validate(length(min = 1, max = 32000))]
    pub prompt: String,
    pub output_format: ImageOutputFormat,
    pub quality: Option<GptImageQuality>,
    /// The server picks `auto` when unset. `transparent` needs a format with an alpha channel.
    pub background: Option<ImageBackground>,
    #[serde(default)]
    pub moderation: ImageModeration,
    /// Compression level (0-100%) of the generated images. Only honoured for
    /// `jpeg` and `webp`; the server defaults to 100.
    #[validate(range(max = 100))]
    pub output_compression: Option<u32>,
    pub size: Option<ImageSize>,
    #[validate(range(min = 1, max = 10))]
    pub n: Option<u8>,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageOutputFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageOutputFormat {
    pub fn supports_compression(&self) -> bool {
        matches!(self, ImageOutputFormat::Jpeg | ImageOutputFormat::Webp)
    }

    pub fn supports_transparency(&self) -> bool {
        matches!(self, ImageOutputFormat::Png | ImageOutputFormat::Webp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GptImageQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageBackground {
    Transparent,
    Opaque,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageModeration {
    /// Less restrictive filtering.
    Low,
    #[default]
    Auto,
}

fn default_model() -> String {
    GPT_IMAGE_1.to_string()
}

impl GptImageRequest {
    pub fn new(prompt: impl Into<String>, output_format: ImageOutputFormat) -> Self {
        RequestDefaults::default().gpt_image_request(prompt, output_format)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_output_format(mut self, output_format: ImageOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_quality(mut self, quality: GptImageQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_background(mut self, background: ImageBackground) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_moderation(mut self, moderation: ImageModeration) -> Self {
        self.moderation = moderation;
        self
    }

    pub fn with_output_compression(mut self, output_compression: u32) -> Self {
        self.output_compression = Some(output_compression);
        self
    }

    /// `None` drops the size from the wire form so the server decides.
    pub fn with_size(mut self, size: Option<ImageSize>) -> Self {
        self.size = size;
        self
    }

    pub fn with_n(mut self, n: u8) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

impl WireRequest for GptImageRequest {
    const WIRE_FIELDS: &'static [&'static str] = &[
        "model",
        "prompt",
        "output_format",
        "quality",
        "background",
        "moderation",
        "output_compression",
        "size",
        "n",
        "user",
    ];
}

fn validate_gpt_image_request(it: &GptImageRequest) -> Result<(), ValidationError> {
    if it.output_compression.is_some() && !it.output_format.supports_compression() {
        return Err(field_violation(
            "output_compression",
            "requires_lossy_format",
        ));
    }
    if it.background == Some(ImageBackground::Transparent)
        && !it.output_format.supports_transparency()
    {
        return Err(field_violation("background", "requires_alpha_format"));
    }
    Ok(())
}
