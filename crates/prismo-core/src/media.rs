//! # Media Attachments

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::PrismoError;
use crate::identity::MediaId;

/// Kind of a media attachment.
///
/// Animated images travel as `"gif"` on the wire; `"animated_image"` is
/// accepted on input as well.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum MediaKind {
    /// Still image.
    #[serde(rename = "image")]
    Image,
    /// Video clip.
    #[serde(rename = "video")]
    Video,
    /// Animated image (GIF and equivalents).
    #[serde(rename = "gif", alias = "animated_image")]
    AnimatedImage,
}

impl MediaKind {
    /// Returns every media kind in canonical order.
    pub fn all() -> &'static [MediaKind] {
        &[Self::Image, Self::Video, Self::AnimatedImage]
    }

    /// Wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::AnimatedImage => "gif",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = PrismoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "gif" | "animated_image" => Ok(Self::AnimatedImage),
            other => Err(PrismoError::UnknownMediaKind(other.to_string())),
        }
    }
}

/// A media attachment referenced by a post.
///
/// Field rules (URL shape, non-empty name, positive size and dimensions)
/// are declared with `validator` attributes; platform rules live in the
/// constraint table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Attachment identifier. Generated when absent from the input.
    #[serde(default)]
    pub id: MediaId,
    /// Location of the asset.
    #[validate(url(message = "Invalid media URL"))]
    pub url: String,
    /// Kind of asset.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Original file name.
    #[validate(length(min = 1, message = "Filename is required"))]
    pub filename: String,
    /// Size of the asset in bytes.
    #[validate(range(min = 1, message = "File size must be positive"))]
    pub size: u64,
    /// Pixel width, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Width must be positive"))]
    pub width: Option<u32>,
    /// Pixel height, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Height must be positive"))]
    pub height: Option<u32>,
}

impl MediaItem {
    /// Build an attachment without pixel dimensions.
    pub fn new(url: impl Into<String>, kind: MediaKind, filename: impl Into<String>, size: u64) -> Self {
        Self {
            id: MediaId::new(),
            url: url.into(),
            kind,
            filename: filename.into(),
            size,
            width: None,
            height: None,
        }
    }

    /// Attach pixel dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animated_image_uses_gif_on_the_wire() {
        assert_eq!(serde_json::to_string(&MediaKind::AnimatedImage).unwrap(), "\"gif\"");
        let alias: MediaKind = serde_json::from_str("\"animated_image\"").unwrap();
        assert_eq!(alias, MediaKind::AnimatedImage);
    }

    #[test]
    fn from_str_rejects_unknown_kinds() {
        assert_eq!("video".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert!("audio".parse::<MediaKind>().is_err());
    }

    #[test]
    fn media_item_deserializes_dashboard_shape() {
        let item: MediaItem = serde_json::from_value(serde_json::json!({
            "id": "1",
            "url": "https://example.com/image.jpg",
            "type": "image",
            "filename": "image.jpg",
            "size": 1000
        }))
        .unwrap();
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.width, None);
    }

    #[test]
    fn well_formed_item_passes_field_rules() {
        let item = MediaItem::new("https://example.com/a.png", MediaKind::Image, "a.png", 10)
            .with_dimensions(640, 480);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let item = MediaItem::new("https://example.com/a.png", MediaKind::Image, "a.png", 10)
            .with_dimensions(0, 0);
        let errors = item.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("width"));
        assert!(fields.contains_key("height"));
        assert!(!fields.contains_key("size"));
    }

    #[test]
    fn missing_id_is_generated() {
        let item: MediaItem = serde_json::from_value(serde_json::json!({
            "url": "https://example.com/clip.mp4",
            "type": "video",
            "filename": "clip.mp4",
            "size": 5
        }))
        .unwrap();
        assert!(!item.id.as_str().is_empty());
    }
}
