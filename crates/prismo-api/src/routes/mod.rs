//! # API Route Modules
//!
//! - `platforms`: read-only view of the effective platform constraint table.
//! - `posts`: post validation: request value rules, then per-platform
//!   content constraints.

pub mod platforms;
pub mod posts;
