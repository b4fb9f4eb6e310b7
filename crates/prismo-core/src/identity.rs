//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the record identifiers that appear in validated
//! request bodies. You cannot pass a `MediaId` where a `TeamId` is expected.
//!
//! Persisted identifiers are opaque strings assigned by the storage layer,
//! so the wrappers hold a `String` rather than a parsed UUID. Freshly
//! generated identifiers use UUID v4 text.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Access the inner identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a team that owns users and posts.
    TeamId,
    "team"
);
string_id!(
    /// Identifier of a media attachment.
    MediaId,
    "media"
);
