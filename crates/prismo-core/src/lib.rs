//! # prismo-core: Foundational Types for the Prismo Dashboard
//!
//! Defines the domain model shared by every other crate in the workspace:
//! the closed set of social platforms, media attachments, post content,
//! workflow enumerations, and the per-platform constraint table that the
//! content validator is driven by.
//!
//! ## Key Design Principles
//!
//! 1. **Single `SocialPlatform` enum.** One definition, five variants,
//!    exhaustive `match` everywhere. Adding a platform forces every consumer
//!    (including the constraint table) to handle it at compile time.
//!
//! 2. **One authoritative constraint table.** [`ConstraintTable::standard`]
//!    is the only place platform limits are written down. Validation messages
//!    are derived from it, never maintained in parallel.
//!
//! 3. **Configuration errors are not content violations.** Table lookups
//!    return [`ConfigurationError`]; content problems are plain data.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `prismo-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod constraints;
pub mod content;
pub mod error;
pub mod identity;
pub mod media;
pub mod platform;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use constraints::{ConstraintOverride, ConstraintTable, PlatformConstraints};
pub use content::{PostContent, MAX_POST_TEXT_LENGTH};
pub use error::{ConfigurationError, PrismoError};
pub use identity::{MediaId, TeamId};
pub use media::{MediaItem, MediaKind};
pub use platform::{SocialPlatform, PLATFORM_COUNT};
pub use status::{ApprovalStatus, EngagementStatus, EngagementType, UserRole};
