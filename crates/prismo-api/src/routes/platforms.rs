//! # Platform Constraints API
//!
//! - `GET /v1/platforms/constraints`: the effective constraint table keyed by
//!   platform wire id, in canonical platform order.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use prismo_core::ConstraintTable;

use crate::state::AppState;

/// Build the platforms router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/platforms/constraints", get(list_constraints))
}

/// GET /v1/platforms/constraints: List the constraint record of every platform.
#[utoipa::path(
    get,
    path = "/v1/platforms/constraints",
    responses(
        (status = 200, description = "Constraint record per platform", body = Object),
    ),
    tag = "platforms"
)]
pub(crate) async fn list_constraints(State(state): State<AppState>) -> Json<ConstraintTable> {
    Json(state.validator.table().clone())
}
