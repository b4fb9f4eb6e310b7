//! # Post Content
//!
//! The composed body of a post, independent of any one platform. Content is
//! validated, not persisted, by this workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::media::MediaItem;
use crate::platform::SocialPlatform;

/// Longest post text any request may carry, in characters.
///
/// Platform limits are tighter and are checked separately.
pub const MAX_POST_TEXT_LENGTH: usize = 2000;

/// Content of a post as composed in the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    /// Post text.
    #[validate(length(max = 2000, message = "Post text too long"))]
    pub text: String,
    /// Ordered media attachments.
    #[serde(default)]
    #[validate(nested)]
    pub media: Vec<MediaItem>,
    /// Hashtags, without the leading `#`.
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Mentioned handles.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Opaque per-platform extension data (polls, links, locations, ...).
    #[serde(default)]
    #[schema(value_type = Object)]
    pub platform_specific: BTreeMap<SocialPlatform, serde_json::Value>,
}

impl PostContent {
    /// Content with text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Append a media item.
    pub fn with_media(mut self, item: MediaItem) -> Self {
        self.media.push(item);
        self
    }

    /// Length of the text in Unicode scalar values.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn minimal_content_defaults_collections() {
        let content: PostContent = serde_json::from_str(r#"{"text":"Test post"}"#).unwrap();
        assert!(content.media.is_empty());
        assert!(content.hashtags.is_empty());
        assert!(content.mentions.is_empty());
        assert!(content.platform_specific.is_empty());
    }

    #[test]
    fn platform_specific_is_keyed_by_platform() {
        let content: PostContent = serde_json::from_value(serde_json::json!({
            "text": "poll time",
            "platformSpecific": { "TWITTER": { "poll": { "options": ["a", "b"], "duration": 60 } } }
        }))
        .unwrap();
        assert!(content.platform_specific.contains_key(&SocialPlatform::Twitter));
    }

    #[test]
    fn text_limit_counts_characters() {
        assert!(PostContent::text("a".repeat(MAX_POST_TEXT_LENGTH)).validate().is_ok());
        assert!(PostContent::text("é".repeat(MAX_POST_TEXT_LENGTH)).validate().is_ok());
        let errors = PostContent::text("a".repeat(MAX_POST_TEXT_LENGTH + 1))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn text_len_counts_characters_not_bytes() {
        assert_eq!(PostContent::text("héllo").text_len(), 5);
    }

    #[test]
    fn builder_appends_media_in_order() {
        let content = PostContent::text("x")
            .with_media(MediaItem::new("https://a/1.png", MediaKind::Image, "1.png", 1))
            .with_media(MediaItem::new("https://a/2.mp4", MediaKind::Video, "2.mp4", 2));
        assert_eq!(content.media[0].filename, "1.png");
        assert_eq!(content.media[1].filename, "2.mp4");
    }
}
