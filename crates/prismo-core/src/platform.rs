//! # Social Platform: Single Source of Truth
//!
//! Defines the `SocialPlatform` enum with all five supported networks.
//! This is the ONE definition used across the workspace: persistence wire
//! values, request bodies, the constraint table, and CLI flags all go
//! through it. Every `match` on `SocialPlatform` must be exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::PrismoError;

/// All social networks the dashboard can publish to.
///
/// The wire representation is SCREAMING_SNAKE_CASE (`"TWITTER"`), matching
/// the values stored by the persistence layer. Lowercase identifiers are
/// accepted on input, the same as [`FromStr`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialPlatform {
    /// Twitter / X.
    #[serde(alias = "twitter")]
    Twitter,
    /// Facebook pages and profiles.
    #[serde(alias = "facebook")]
    Facebook,
    /// Instagram feed posts.
    #[serde(alias = "instagram")]
    Instagram,
    /// LinkedIn member and company posts.
    #[serde(alias = "linkedin")]
    Linkedin,
    /// TikTok video posts.
    #[serde(alias = "tiktok")]
    Tiktok,
}

/// Total number of supported platforms.
pub const PLATFORM_COUNT: usize = 5;

impl SocialPlatform {
    /// Returns every platform in canonical order.
    pub fn all() -> &'static [SocialPlatform] {
        &[
            Self::Twitter,
            Self::Facebook,
            Self::Instagram,
            Self::Linkedin,
            Self::Tiktok,
        ]
    }

    /// Wire identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "TWITTER",
            Self::Facebook => "FACEBOOK",
            Self::Instagram => "INSTAGRAM",
            Self::Linkedin => "LINKEDIN",
            Self::Tiktok => "TIKTOK",
        }
    }

    /// Human-facing brand name used in violation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Linkedin => "LinkedIn",
            Self::Tiktok => "TikTok",
        }
    }

    /// What the platform calls the text body of a post.
    pub fn text_noun(&self) -> &'static str {
        match self {
            Self::Instagram | Self::Tiktok => "captions",
            Self::Twitter | Self::Facebook | Self::Linkedin => "posts",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = PrismoError;

    /// Parse a platform from its wire identifier.
    ///
    /// Matching is case-insensitive so that CLI flags (`--platform twitter`)
    /// and stored values (`TWITTER`) both resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TWITTER" => Ok(Self::Twitter),
            "FACEBOOK" => Ok(Self::Facebook),
            "INSTAGRAM" => Ok(Self::Instagram),
            "LINKEDIN" => Ok(Self::Linkedin),
            "TIKTOK" => Ok(Self::Tiktok),
            _ => Err(PrismoError::UnknownPlatform(s.to_string())),
        }
    }
}
