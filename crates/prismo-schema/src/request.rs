//! # Request Validation
//!
//! Structural validation of the inbound shapes the dashboard accepts:
//! post creation/update, users, teams, social accounts, analytics
//! snapshots, and engagements. Media and post content rules are declared
//! on the `prismo-core` types themselves.
//!
//! Deserialization enforces types and applies defaults (timezone `UTC`,
//! role `VIEWER`, plan `free`, approval `NOT_REQUIRED`, empty collections).
//! Value rules are `validator` derive attributes; run them with
//! [`validate_fields`] to get every violation as a dotted wire path.
//!
//! Update shapes make every field optional and check only the fields that
//! are present.
//!
//! Platform-specific limits are not checked here; see [`crate::platform`].

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use prismo_core::{
    ApprovalStatus, EngagementStatus, EngagementType, PostContent, SocialPlatform, TeamId,
    UserRole,
};

/// Upper bound on user and team names, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

fn name_limit(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn user_name_limit(value: &str) -> Result<(), ValidationError> {
    name_limit(value, "Name too long")
}

fn team_name_limit(value: &str) -> Result<(), ValidationError> {
    name_limit(value, "Team name too long")
}

/// Body of a post-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(nested)]
    pub content: PostContent,
    /// Target platforms; at least one.
    #[validate(length(min = 1, message = "At least one platform required"))]
    pub platforms: Vec<SocialPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

/// Body of a post-update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub content: Option<PostContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "At least one platform required"))]
    pub platforms: Option<Vec<SocialPlatform>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Body of a user-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "Name is required"),
        custom(function = "user_name_limit")
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

/// Body of a user-update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "Name is required"),
        custom(function = "user_name_limit")
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}

fn default_plan() -> String {
    "free".to_string()
}

/// Body of a team-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(
        length(min = 1, message = "Team name is required"),
        custom(function = "team_name_limit")
    )]
    pub name: String,
    #[serde(default = "default_plan")]
    pub plan: String,
    /// Free-form team settings (auto-approval, brand colors, schedules).
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// Body of a team-update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "Team name is required"),
        custom(function = "team_name_limit")
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Replaces the stored settings object as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Body of a request connecting a social account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialAccountRequest {
    pub platform: SocialPlatform,
    #[validate(length(min = 1, message = "Platform user ID is required"))]
    pub platform_user_id: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: String,
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
}

/// Body of a social-account update (token refresh, profile changes).
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSocialAccountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<SocialPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Platform user ID is required"))]
    pub platform_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
}

/// Snapshot of a published post's metrics on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostAnalyticsInput {
    #[validate(length(min = 1, message = "Platform post ID is required"))]
    pub platform_post_id: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reach: u64,
    #[serde(default)]
    pub impressions: u64,
    /// Fraction of reach that engaged, in `[0, 1]`.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "Engagement rate must be between 0 and 1"))]
    pub engagement_rate: f64,
}

/// Inbound interaction captured from a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEngagementRequest {
    #[serde(rename = "type")]
    pub engagement_type: EngagementType,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Sentiment score in `[-1, 1]`.
    #[serde(default)]
    #[validate(range(min = -1.0, max = 1.0, message = "Sentiment must be between -1 and 1"))]
    pub sentiment: f64,
    #[validate(length(min = 1, message = "Platform engagement ID is required"))]
    pub platform_engagement_id: String,
}

/// Inbox state change for an engagement. Fully checked by deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEngagementRequest {
    pub status: EngagementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
}
