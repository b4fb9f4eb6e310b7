//! # prismo-schema: Content & Request Validation
//!
//! ## Platform Validation (`platform`)
//!
//! [`ContentValidator::validate`] checks a post's content against the
//! constraint record of each target platform (text length, media count,
//! required media, allowed media kinds) and returns the violations grouped
//! by platform. Platforms with no violations are absent from the result.
//!
//! ## Request Validation (`request`)
//!
//! Request shapes declare their value rules with `validator` derive
//! attributes. [`validate_fields`] runs them and reports every failing
//! field as a [`Violation`] with a dotted wire path.
//!
//! ## Constraint Overrides (`config`)
//!
//! [`load_constraint_table`] merges a YAML/JSON override file onto the
//! built-in table.
//!
//! ## Crate Policy
//!
//! - Depends only on `prismo-core` internally.
//! - Content violations are data. Only constraint-table defects are errors.

pub mod config;
pub mod platform;
pub mod request;
pub mod violation;

pub use config::{load_constraint_table, resolve_constraint_table, ConstraintLoadError};
pub use platform::{validate_content_for_platforms, ContentValidator, ValidationOutcome};
pub use request::{
    CreateEngagementRequest, CreatePostRequest, CreateSocialAccountRequest, CreateTeamRequest,
    CreateUserRequest, PostAnalyticsInput, UpdateEngagementRequest, UpdatePostRequest,
    UpdateSocialAccountRequest, UpdateTeamRequest, UpdateUserRequest, MAX_NAME_LENGTH,
};
pub use validator::Validate;
pub use violation::{validate_fields, ValidationViolations, Violation};
