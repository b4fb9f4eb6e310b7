//! # Error Types
//!
//! Two families of errors live here:
//!
//! - [`PrismoError`] covers parsing of wire identifiers (platform names,
//!   media kinds, status strings) coming from untrusted input.
//! - [`ConfigurationError`] covers defects in the constraint table itself.
//!   These are programmer or deployment errors and are always fatal to the
//!   operation that hit them.
//!
//! Content violations (text too long, too many media items) are not errors
//! at all; they are returned as data by the validator.

use thiserror::Error;

use crate::platform::SocialPlatform;

/// Top-level error type for parsing domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrismoError {
    /// A platform identifier did not name any supported platform.
    #[error("unknown social platform: {0:?}")]
    UnknownPlatform(String),

    /// A media kind identifier was not recognized.
    #[error("unknown media kind: {0:?}")]
    UnknownMediaKind(String),

    /// A status or role identifier was not recognized.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// Name of the enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Defect in the platform constraint table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Validation was requested for a platform the table has no record for.
    #[error("no constraint record configured for platform {0}")]
    UnknownPlatform(SocialPlatform),

    /// The same platform was supplied twice when building a table.
    #[error("duplicate constraint record for platform {0}")]
    DuplicatePlatform(SocialPlatform),

    /// A numeric limit was zero.
    #[error("constraint {field} for platform {platform} must be a positive integer")]
    NonPositiveLimit {
        /// The platform whose record is invalid.
        platform: SocialPlatform,
        /// The offending field name.
        field: &'static str,
    },

    /// A platform allows no media kinds at all but requires media.
    #[error("platform {0} requires media but allows no media kinds")]
    UnsatisfiableMediaRule(SocialPlatform),
}
