//! # Workflow Enumerations
//!
//! Roles and review/inbox states carried by user, post, and engagement
//! request bodies. Wire values are SCREAMING_SNAKE_CASE and match the
//! persistence layer exactly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::PrismoError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Wire identifier, identical to the serde representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PrismoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(PrismoError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum!(
    /// Permission level of a team member.
    UserRole, "user role" {
        /// Full control over the team.
        Admin => "ADMIN",
        /// May compose and schedule posts.
        Editor => "EDITOR",
        /// Read-only access.
        Viewer => "VIEWER",
    }
);

wire_enum!(
    /// Review state of a post that may need sign-off.
    ApprovalStatus, "approval status" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        NotRequired => "NOT_REQUIRED",
    }
);

wire_enum!(
    /// Kind of inbound interaction with a published post.
    EngagementType, "engagement type" {
        Like => "LIKE",
        Comment => "COMMENT",
        Share => "SHARE",
        Mention => "MENTION",
        DirectMessage => "DIRECT_MESSAGE",
    }
);

wire_enum!(
    /// Inbox state of an engagement.
    EngagementStatus, "engagement status" {
        Unread => "UNREAD",
        Read => "READ",
        Responded => "RESPONDED",
        Archived => "ARCHIVED",
    }
);

impl Default for UserRole {
    fn default() -> Self {
        Self::Viewer
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::NotRequired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&ApprovalStatus::NotRequired).unwrap();
        assert_eq!(json, format!("\"{}\"", ApprovalStatus::NotRequired.as_str()));
        let json = serde_json::to_string(&EngagementType::DirectMessage).unwrap();
        assert_eq!(json, "\"DIRECT_MESSAGE\"");
    }

    #[test]
    fn from_str_reports_enum_kind() {
        let err = "OWNER".parse::<UserRole>().unwrap_err();
        assert_eq!(
            err,
            PrismoError::UnknownVariant {
                kind: "user role",
                value: "OWNER".to_string()
            }
        );
    }

    #[test]
    fn defaults_match_dashboard_behavior() {
        assert_eq!(UserRole::default(), UserRole::Viewer);
        assert_eq!(ApprovalStatus::default(), ApprovalStatus::NotRequired);
    }

    #[test]
    fn round_trips_through_from_str() {
        for s in ["UNREAD", "READ", "RESPONDED", "ARCHIVED"] {
            assert_eq!(s.parse::<EngagementStatus>().unwrap().as_str(), s);
        }
    }
}
