use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    types::{
        gpt_image::{GptImageRequest, ImageModeration, ImageOutputFormat},
        image::ImageRequest,
        shared::{ImageResponseFormat, ImageSize, SharedImageFields},
        GPT_IMAGE_1,
    },
    RequestResult,
};

/// Defaults applied when building requests from only their mandatory fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RequestDefaults {
    pub image_model: Option<String>,
    pub gpt_image_model: String,
    /// `None` leaves the size to the server.
    pub gpt_image_size: Option<ImageSize>,
    pub moderation: ImageModeration,
    pub response_format: Option<ImageResponseFormat>,
    pub user: Option<String>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            image_model: None,
            gpt_image_model: GPT_IMAGE_1.to_string(),
            gpt_image_size: Some(ImageSize::Size1024x1024),
            moderation: ImageModeration::Auto,
            response_format: None,
            user: None,
        }
    }
}

impl RequestDefaults {
    /// Reads defaults from a YAML file. A missing file yields the built-in defaults.
    pub fn load<P: AsRef<Path>>(config_path: P) -> RequestResult<Self> {
        let config_path = config_path.as_ref();
        match std::fs::File::open(config_path) {
            Ok(f) => {
                let defaults: Self = serde_yaml::from_reader(f)?;
                tracing::debug!(path = %config_path.display(), "Loaded image request defaults");
                Ok(defaults)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> RequestResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn image_request(&self, prompt: impl Into<String>) -> ImageRequest {
        ImageRequest {
            shared: SharedImageFields {
                model: self.image_model.clone(),
                response_format: self.response_format,
                user: self.user.clone(),
                ..Default::default()
            },
            ..ImageRequest::new(prompt)
        }
    }

    pub fn gpt_image_request(
        &self,
        prompt: impl Into<String>,
        output_format: ImageOutputFormat,
    ) -> GptImageRequest {
        GptImageRequest {
            model: self.gpt_image_model.clone(),
            prompt: prompt.into(),
            output_format,
            quality: None,
            background: None,
            moderation: self.moderation,
            output_compression: None,
            size: self.gpt_image_size,
            n: None,
            user: self.user.clone(),
        }
    }
}
