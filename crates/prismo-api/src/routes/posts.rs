//! # Post Validation API
//!
//! - `POST /v1/posts/validate`: validate a draft post for its target
//!   platforms before it is saved or scheduled.
//!
//! A body that fails to parse or breaks a request value rule is rejected
//! with 422. A well-formed request always yields 200, with `valid: false`
//! and the per-platform outcomes when any platform rejects the content.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use prismo_schema::{validate_fields, CreatePostRequest, ValidationOutcome};

use crate::error::AppError;
use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Result of validating a post against its target platforms.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidatePostResponse {
    /// True when no platform reported a violation.
    pub valid: bool,
    /// One entry per rejecting platform, in request order.
    pub outcomes: Vec<ValidationOutcome>,
}

/// Build the posts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/posts/validate", post(validate_post))
}

/// POST /v1/posts/validate: Check post content against platform constraints.
#[utoipa::path(
    post,
    path = "/v1/posts/validate",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidatePostResponse),
        (status = 422, description = "Malformed request", body = crate::error::ErrorBody),
    ),
    tag = "posts"
)]
pub(crate) async fn validate_post(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<ValidatePostResponse>, AppError> {
    let request = match accept_request(body) {
        Ok(request) => request,
        Err(err) => {
            metrics.record_validation("rejected");
            return Err(err);
        }
    };

    let outcomes = state
        .validator
        .validate(&request.content, &request.platforms)?;

    let valid = outcomes.is_empty();
    metrics.record_validation(if valid { "valid" } else { "invalid" });
    for outcome in &outcomes {
        metrics.record_platform_violations(outcome.platform, outcome.errors.len());
    }

    tracing::info!(
        platforms = request.platforms.len(),
        rejected = outcomes.len(),
        valid,
        "post validated"
    );

    Ok(Json(ValidatePostResponse { valid, outcomes }))
}

/// Parse the body and apply the request value rules.
fn accept_request(
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<CreatePostRequest, AppError> {
    let Json(request) = body?;
    validate_fields(&request)?;
    Ok(request)
}
