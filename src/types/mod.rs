pub mod gpt_image;
pub mod image;
pub mod shared;
pub mod wire;

pub const DALL_E_2: &str = "dall-e-2";
pub const DALL_E_3: &str = "dall-e-3";
pub const GPT_IMAGE_1: &str = "gpt-image-1";
