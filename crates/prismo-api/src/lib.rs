//! # prismo-api: Validation API for the Prismo Dashboard
//!
//! Exposes the platform content validator over HTTP so the dashboard can
//! check a draft post before saving or scheduling it.
//!
//! ## API Surface
//!
//! | Route                           | Module                  | Purpose                  |
//! |---------------------------------|-------------------------|--------------------------|
//! | `POST /v1/posts/validate`       | [`routes::posts`]       | Validate a draft post    |
//! | `GET /v1/platforms/constraints` | [`routes::platforms`]   | Effective constraint table |
//! | `GET /openapi.json`             | [`openapi`]             | OpenAPI document         |
//! | `GET /health/*`, `GET /health`  | this module             | Probes and status        |
//! | `GET /metrics`                  | this module             | Prometheus scrape        |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → Extension(ApiMetrics) → MetricsMiddleware → Handler
//! ```
//!
//! Request metrics are labelled with the matched route template, so
//! unknown paths all count under `unmatched`.

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics_on = state.config.metrics_enabled;
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::posts::router())
        .merge(routes::platforms::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let mut probes = Router::new()
        .route("/health", axum::routing::get(health))
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));
    if metrics_on {
        probes = probes.route("/metrics", axum::routing::get(prometheus_metrics));
    }

    let mut app = Router::new().merge(probes).merge(api);

    // The validate handler always records into `metrics`; only the HTTP
    // middleware and the scrape endpoint are gated.
    if metrics_on {
        app = app.layer(from_fn(middleware::metrics::metrics_middleware));
    }

    app.layer(Extension(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /metrics: Prometheus metrics scrape endpoint.
async fn prometheus_metrics(Extension(metrics): Extension<ApiMetrics>) -> impl IntoResponse {
    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 "ready" once every platform has a constraint record,
/// 503 otherwise.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let missing = state.validator.table().missing_platforms();
    if missing.is_empty() {
        (StatusCode::OK, "ready").into_response()
    } else {
        let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
        tracing::warn!(missing = ?names, "constraint table incomplete");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("constraint table missing: {}", names.join(", ")),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    services: HealthServices,
}

#[derive(Debug, Serialize)]
struct HealthServices {
    validator: &'static str,
    api: &'static str,
}

/// GET /health: Aggregate status for dashboards. 200 with `ok` when every
/// platform has a constraint record, 503 with `degraded` otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let total = state.validator.table().is_total();
    let status = if total {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthResponse {
        status: if total { "ok" } else { "degraded" },
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: HealthServices {
            validator: if total { "up" } else { "degraded" },
            api: "up",
        },
    };
    (status, Json(body))
}
