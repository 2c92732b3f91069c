pub mod config;
pub mod error;
pub mod types;

pub use crate::config::RequestDefaults;
pub use crate::error::RequestError;
pub use crate::types::{
    gpt_image::{
        GptImageQuality, GptImageRequest, ImageBackground, ImageModeration, ImageOutputFormat,
    },
    image::{ImageQuality, ImageRequest, ImageStyle},
    shared::{ImageResponseFormat, ImageSize, SharedImageFields},
    wire::{WireRequest, IMAGE_GENERATIONS_PATH},
};

pub type RequestResult<T> = Result<T, RequestError>;
