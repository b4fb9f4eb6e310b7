//! # Platform Content Validation
//!
//! Checks one [`PostContent`] against the constraint record of every
//! requested platform and reports violations grouped by platform.
//!
//! ## Contract
//!
//! - Platforms are evaluated in the order given. The result preserves that
//!   order; clean platforms produce no entry.
//! - Every requested platform is evaluated independently. A violation on
//!   one platform never stops evaluation of the next.
//! - A platform with no constraint record aborts the whole call with a
//!   [`ConfigurationError`]. No partial result is returned.
//! - Pure over immutable inputs. A [`ContentValidator`] is `Send + Sync`
//!   and can be shared without synchronization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use prismo_core::{
    ConfigurationError, ConstraintTable, MediaKind, PlatformConstraints, PostContent,
    SocialPlatform,
};

/// Violations of one platform's constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationOutcome {
    /// The platform the messages apply to.
    pub platform: SocialPlatform,
    /// Human-readable violation messages, in check order.
    pub errors: Vec<String>,
}

/// Validates post content against a constraint table.
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    table: ConstraintTable,
}

impl ContentValidator {
    /// Validator driven by `table`.
    pub fn new(table: ConstraintTable) -> Self {
        Self { table }
    }

    /// Validator over the built-in table.
    pub fn standard() -> Self {
        Self::new(ConstraintTable::standard())
    }

    /// The table this validator reads.
    pub fn table(&self) -> &ConstraintTable {
        &self.table
    }

    /// Validate `content` for each of `platforms`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnknownPlatform`] if any requested platform has
    /// no record in the table.
    pub fn validate(
        &self,
        content: &PostContent,
        platforms: &[SocialPlatform],
    ) -> Result<Vec<ValidationOutcome>, ConfigurationError> {
        let mut outcomes = Vec::new();

        for &platform in platforms {
            let constraints = self.table.get(platform)?;
            let errors = check_platform(platform, constraints, content);
            if !errors.is_empty() {
                tracing::debug!(
                    platform = %platform,
                    violations = errors.len(),
                    "content rejected for platform"
                );
                outcomes.push(ValidationOutcome { platform, errors });
            }
        }

        Ok(outcomes)
    }
}

/// Validate `content` against the built-in table.
///
/// The built-in table is total over [`SocialPlatform`], so the configuration
/// error path is unreachable here; it is still surfaced rather than hidden.
///
/// # Errors
///
/// See [`ContentValidator::validate`].
pub fn validate_content_for_platforms(
    content: &PostContent,
    platforms: &[SocialPlatform],
) -> Result<Vec<ValidationOutcome>, ConfigurationError> {
    ContentValidator::standard().validate(content, platforms)
}

fn check_platform(
    platform: SocialPlatform,
    constraints: &PlatformConstraints,
    content: &PostContent,
) -> Vec<String> {
    let name = platform.display_name();
    let mut errors = Vec::new();

    if content.text_len() > constraints.max_text_length {
        errors.push(format!(
            "{name} {} cannot exceed {} characters",
            platform.text_noun(),
            group_thousands(constraints.max_text_length)
        ));
    }

    if content.media.len() > constraints.max_media_count {
        let noun = if constraints.max_media_count == 1 { "item" } else { "items" };
        errors.push(format!(
            "{name} allows maximum {} media {noun}",
            constraints.max_media_count
        ));
    }

    if constraints.requires_media && content.media.is_empty() {
        errors.push(format!("{name} posts require at least one media item"));
    }

    for item in &content.media {
        if !constraints.allows(item.kind) {
            errors.push(format!(
                "{name} does not support {} media ({})",
                kind_label(item.kind),
                item.filename
            ));
        }
    }

    errors
}

fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Video => "video",
        MediaKind::AnimatedImage => "animated image",
    }
}

/// `63206` → `"63,206"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
