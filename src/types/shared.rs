use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use validator::Validate;

/// Fields common to every image request variant. Flattened into the parent on the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SharedImageFields {
    /// The model to use for image generation. The server falls back to `dall-e-2`.
    pub model: Option<String>,
    /// The number of images to generate. Must be between 1 and 10.
    #[validate(range(min = 1, max = 10))]
    pub n: Option<u8>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    /// A unique identifier representing the end-user, used by the provider to detect abuse.
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

#[derive(Debug, Clone, Copy)]
pub enum ImageSize {
    Size256x256,
    Size512x512,
    Size1024x1024,
    Size1536x1024,
    Size1024x1536,
    Size1792x1024,
    Size1024x1792,
    Auto,
    Other((u32, u32)),
}

impl ImageSize {
    /// Maps dimensions onto the named variant when one exists.
    pub fn new(width: u32, height: u32) -> Self {
        match (width, height) {
            (256, 256) => ImageSize::Size256x256,
            (512, 512) => ImageSize::Size512x512,
            (1024, 1024) => ImageSize::Size1024x1024,
            (1536, 1024) => ImageSize::Size1536x1024,
            (1024, 1536) => ImageSize::Size1024x1536,
            (1792, 1024) => ImageSize::Size1792x1024,
            (1024, 1792) => ImageSize::Size1024x1792,
            size => ImageSize::Other(size),
        }
    }

    /// Pixel dimensions, `None` when the server picks the size.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ImageSize::Size256x256 => Some((256, 256)),
            ImageSize::Size512x512 => Some((512, 512)),
            ImageSize::Size1024x1024 => Some((1024, 1024)),
            ImageSize::Size1536x1024 => Some((1536, 1024)),
            ImageSize::Size1024x1536 => Some((1024, 1536)),
            ImageSize::Size1792x1024 => Some((1792, 1024)),
            ImageSize::Size1024x1792 => Some((1024, 1792)),
            ImageSize::Auto => None,
            ImageSize::Other(size) => Some(*size),
        }
    }
}

// `Other((1024, 1024))` and `Size1024x1024` put the same string on the wire, so they are equal.
impl PartialEq for ImageSize {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
    }
}

impl Eq for ImageSize {}

impl Hash for ImageSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimensions().hash(state);
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dimensions() {
            Some((width, height)) => write!(f, "{}x{}", width, height),
            None => write!(f, "auto"),
        }
    }
}

impl Serialize for ImageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let str = self.to_string();
        serializer.serialize_str(&str)
    }
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "auto" {
            return Ok(ImageSize::Auto);
        }
        let Some((width, height)) = s.split_once('x') else {
            return Err(serde::de::Error::custom(
                "Invalid image size format. Expected {width}x{height}",
            ));
        };
        let width = width
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom("Invalid width value"))?;
        let height = height
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom("Invalid height value"))?;
        Ok(ImageSize::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_size_serialization() {
        assert_eq!(
            serde_json::to_string(&ImageSize::Size1536x1024).unwrap(),
            r#""1536x1024""#
        );
        assert_eq!(serde_json::to_string(&ImageSize::Auto).unwrap(), r#""auto""#);
        assert_eq!(
            serde_json::to_string(&ImageSize::Other((800, 600))).unwrap(),
            r#""800x600""#
        );
    }

    #[test]
    fn test_image_size_deserialization() {
        assert_eq!(
            serde_json::from_str::<ImageSize>(r#""1024x1536""#).unwrap(),
            ImageSize::Size1024x1536
        );
        assert_eq!(
            serde_json::from_str::<ImageSize>(r#""auto""#).unwrap(),
            ImageSize::Auto
        );
        assert_eq!(
            serde_json::from_str::<ImageSize>(r#""800x600""#).unwrap(),
            ImageSize::Other((800, 600))
        );

        assert!(serde_json::from_str::<ImageSize>(r#""invalid""#).is_err());
        assert!(serde_json::from_str::<ImageSize>(r#""800x""#).is_err());
        assert!(serde_json::from_str::<ImageSize>(r#""x600""#).is_err());
        assert!(serde_json::from_str::<ImageSize>(r#""800x600x2""#).is_err());
    }

    #[test]
    fn custom_size_matching_a_known_size_round_trips() {
        for size in [
            ImageSize::Other((1024, 1024)),
            ImageSize::Other((256, 256)),
            ImageSize::Other((1024, 1792)),
        ] {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(serde_json::from_str::<ImageSize>(&json).unwrap(), size);
        }

        let fields = SharedImageFields {
            size: Some(ImageSize::Other((512, 512))),
            ..Default::default()
        };
        let restored: SharedImageFields =
            serde_json::from_value(serde_json::to_value(&fields).unwrap()).unwrap();
        assert_eq!(restored, fields);
    }

    #[test]
    fn size_equality_and_hash_follow_dimensions() {
        use std::collections::HashSet;

        assert_eq!(ImageSize::new(1536, 1024), ImageSize::Size1536x1024);
        assert!(matches!(ImageSize::new(1536, 1024), ImageSize::Size1536x1024));
        assert!(matches!(ImageSize::new(800, 600), ImageSize::Other((800, 600))));
        assert_ne!(ImageSize::Other((800, 600)), ImageSize::Auto);

        let sizes: HashSet<ImageSize> = [
            ImageSize::Size1024x1024,
            ImageSize::Other((1024, 1024)),
            ImageSize::Auto,
        ]
        .into_iter()
        .collect();
        assert_eq!(sizes.len(), 2);
    }

    #[test]
    fn unset_shared_fields_are_omitted() {
        let fields = SharedImageFields {
            n: Some(2),
            response_format: Some(ImageResponseFormat::B64Json),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"n": 2, "response_format": "b64_json"})
        );
    }

    #[test]
    fn n_out_of_range_fails_validation() {
        let fields = SharedImageFields {
            n: Some(11),
            ..Default::default()
        };
        assert!(fields.validate().is_err());

        let fields = SharedImageFields {
            n: Some(10),
            ..Default::default()
        };
        assert!(fields.validate().is_ok());
    }
}
