//! # Platform Constraint Table
//!
//! The single authoritative record of what each platform accepts: text
//! length, media count, media kinds, and whether media is mandatory.
//! Validation messages elsewhere in the workspace are derived from these
//! values; no other copy of the limits exists.
//!
//! ## Invariants
//!
//! - [`ConstraintTable::standard`] holds exactly one record per
//!   [`SocialPlatform`]. It is built by an exhaustive `match`, so a new
//!   platform variant does not compile until it has a record.
//! - Every `max_text_length` and `max_media_count` is a positive integer.
//! - Looking up a platform that has no record is a [`ConfigurationError`],
//!   never an implicit pass.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::media::MediaKind;
use crate::platform::SocialPlatform;

/// Static content rules for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConstraints {
    /// Maximum text length in characters.
    pub max_text_length: usize,
    /// Maximum number of media attachments.
    pub max_media_count: usize,
    /// Media kinds the platform accepts.
    pub allowed_media_kinds: BTreeSet<MediaKind>,
    /// Whether at least one media item is mandatory.
    pub requires_media: bool,
    /// Whether the platform supports native polls.
    pub supports_polls: bool,
    /// Whether the platform renders link previews.
    pub supports_links: bool,
}

impl PlatformConstraints {
    /// Whether `kind` may be attached on this platform.
    pub fn allows(&self, kind: MediaKind) -> bool {
        self.allowed_media_kinds.contains(&kind)
    }

    fn check(&self, platform: SocialPlatform) -> Result<(), ConfigurationError> {
        if self.max_text_length == 0 {
            return Err(ConfigurationError::NonPositiveLimit {
                platform,
                field: "max_text_length",
            });
        }
        if self.max_media_count == 0 {
            return Err(ConfigurationError::NonPositiveLimit {
                platform,
                field: "max_media_count",
            });
        }
        if self.requires_media && self.allowed_media_kinds.is_empty() {
            return Err(ConfigurationError::UnsatisfiableMediaRule(platform));
        }
        Ok(())
    }
}

/// Built-in rules for a platform.
fn standard_record(platform: SocialPlatform) -> PlatformConstraints {
    use MediaKind::{AnimatedImage, Image, Video};

    let (max_text_length, max_media_count, kinds, requires_media, supports_polls, supports_links) =
        match platform {
            SocialPlatform::Twitter => (280, 4, vec![Image, Video, AnimatedImage], false, true, true),
            SocialPlatform::Facebook => (63_206, 10, vec![Image, Video], false, false, true),
            SocialPlatform::Instagram => (2_200, 10, vec![Image, Video], true, false, false),
            SocialPlatform::Linkedin => (3_000, 9, vec![Image, Video], false, false, true),
            SocialPlatform::Tiktok => (2_200, 1, vec![Video], true, false, false),
        };

    PlatformConstraints {
        max_text_length,
        max_media_count,
        allowed_media_kinds: kinds.into_iter().collect(),
        requires_media,
        supports_polls,
        supports_links,
    }
}

/// Partial replacement for a platform's built-in record.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintOverride {
    /// New text limit in characters.
    #[serde(default, alias = "maxTextLength", skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,
    /// New attachment count limit.
    #[serde(default, alias = "maxMediaCount", skip_serializing_if = "Option::is_none")]
    pub max_media_count: Option<usize>,
    /// Replaces the allowed kinds as a whole; kinds are not merged.
    #[serde(default, alias = "allowedMediaKinds", skip_serializing_if = "Option::is_none")]
    pub allowed_media_kinds: Option<BTreeSet<MediaKind>>,
    /// Whether a post must carry at least one attachment.
    #[serde(default, alias = "requiresMedia", skip_serializing_if = "Option::is_none")]
    pub requires_media: Option<bool>,
    /// Informational; not enforced by the validator.
    #[serde(default, alias = "supportsPolls", skip_serializing_if = "Option::is_none")]
    pub supports_polls: Option<bool>,
    /// Informational; not enforced by the validator.
    #[serde(default, alias = "supportsLinks", skip_serializing_if = "Option::is_none")]
    pub supports_links: Option<bool>,
}

impl ConstraintOverride {
    fn apply_to(&self, record: &mut PlatformConstraints) {
        if let Some(v) = self.max_text_length {
            record.max_text_length = v;
        }
        if let Some(v) = self.max_media_count {
            record.max_media_count = v;
        }
        if let Some(v) = &self.allowed_media_kinds {
            record.allowed_media_kinds = v.clone();
        }
        if let Some(v) = self.requires_media {
            record.requires_media = v;
        }
        if let Some(v) = self.supports_polls {
            record.supports_polls = v;
        }
        if let Some(v) = self.supports_links {
            record.supports_links = v;
        }
    }
}

/// Mapping from platform to its constraint record.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConstraintTable {
    records: BTreeMap<SocialPlatform, PlatformConstraints>,
}

impl ConstraintTable {
    /// The built-in table covering every supported platform.
    pub fn standard() -> Self {
        let records = SocialPlatform::all()
            .iter()
            .map(|p| (*p, standard_record(*p)))
            .collect();
        Self { records }
    }

    /// Build a table from explicit records.
    ///
    /// The result need not cover every platform; lookups for missing ones
    /// fail with [`ConfigurationError::UnknownPlatform`].
    ///
    /// # Errors
    ///
    /// Rejects duplicate platforms and records with non-positive limits.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (SocialPlatform, PlatformConstraints)>,
    ) -> Result<Self, ConfigurationError> {
        let mut records = BTreeMap::new();
        for (platform, record) in entries {
            record.check(platform)?;
            if records.insert(platform, record).is_some() {
                return Err(ConfigurationError::DuplicatePlatform(platform));
            }
        }
        Ok(Self { records })
    }

    /// Return a copy of this table with `overrides` merged in.
    ///
    /// Overrides for platforms absent from the table start from the
    /// built-in record.
    ///
    /// # Errors
    ///
    /// Fails if any merged record violates the positive-limit rules.
    pub fn with_overrides(
        &self,
        overrides: &BTreeMap<SocialPlatform, ConstraintOverride>,
    ) -> Result<Self, ConfigurationError> {
        let mut records = self.records.clone();
        for (platform, patch) in overrides {
            let record = records
                .entry(*platform)
                .or_insert_with(|| standard_record(*platform));
            patch.apply_to(record);
            record.check(*platform)?;
        }
        Ok(Self { records })
    }

    /// Constraint record for `platform`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnknownPlatform`] if the table has no record.
    pub fn get(&self, platform: SocialPlatform) -> Result<&PlatformConstraints, ConfigurationError> {
        self.records
            .get(&platform)
            .ok_or(ConfigurationError::UnknownPlatform(platform))
    }

    /// Platforms with no record, in canonical order.
    pub fn missing_platforms(&self) -> Vec<SocialPlatform> {
        SocialPlatform::all()
            .iter()
            .copied()
            .filter(|p| !self.records.contains_key(p))
            .collect()
    }

    /// Whether every supported platform has a record.
    pub fn is_total(&self) -> bool {
        self.missing_platforms().is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in canonical platform order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &PlatformConstraints)> {
        self.records.iter().map(|(p, c)| (*p, c))
    }
}

impl Default for ConstraintTable {
    fn default() -> Self {
        Self::standard()
    }
}
