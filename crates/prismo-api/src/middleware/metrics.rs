//! # Prometheus Metrics
//!
//! HTTP-level metrics (request counts, latency, errors) are recorded in
//! middleware. Validation metrics (results, per-platform violations) are
//! recorded by the post validation handler.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{
    core::Collector, Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry,
    TextEncoder,
};

use prismo_core::SocialPlatform;

/// Shared metrics state backed by a Prometheus registry.
#[derive(Clone)]
pub struct ApiMetrics {
    inner: Arc<Inner>,
}

struct Inner {
    registry: Registry,

    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
    http_errors_total: IntCounterVec,

    validations_total: IntCounterVec,
    platform_violations_total: IntCounterVec,
}

impl std::fmt::Debug for ApiMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiMetrics")
            .field("requests", &self.requests())
            .field("errors", &self.errors())
            .finish()
    }
}

impl ApiMetrics {
    /// Create a new metrics instance with a fresh Prometheus registry.
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("prismo_http_requests_total", "Total HTTP requests"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "prismo_http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "path"],
        )
        .expect("metric can be created");

        let http_errors_total = IntCounterVec::new(
            Opts::new("prismo_http_errors_total", "Total HTTP errors (4xx and 5xx)"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let validations_total = IntCounterVec::new(
            Opts::new(
                "prismo_post_validations_total",
                "Post validation requests by result",
            ),
            &["result"],
        )
        .expect("metric can be created");

        let platform_violations_total = IntCounterVec::new(
            Opts::new(
                "prismo_platform_violations_total",
                "Platform constraint violations by platform",
            ),
            &["platform"],
        )
        .expect("metric can be created");

        for collector in [
            Box::new(http_requests_total.clone()) as Box<dyn Collector>,
            Box::new(http_request_duration_seconds.clone()),
            Box::new(http_errors_total.clone()),
            Box::new(validations_total.clone()),
            Box::new(platform_violations_total.clone()),
        ] {
            registry
                .register(collector)
                .expect("metric can be registered");
        }

        Self {
            inner: Arc::new(Inner {
                registry,
                http_requests_total,
                http_request_duration_seconds,
                http_errors_total,
                validations_total,
                platform_violations_total,
            }),
        }
    }

    /// Return current total request count (sum across all labels).
    pub fn requests(&self) -> u64 {
        sum_counter(&self.inner.http_requests_total)
    }

    /// Return current total error count (sum across all labels).
    pub fn errors(&self) -> u64 {
        sum_counter(&self.inner.http_errors_total)
    }

    /// Count of validations recorded with the given result label.
    pub fn validations(&self, result: &str) -> u64 {
        self.inner
            .validations_total
            .with_label_values(&[result])
            .get()
    }

    /// Count of violations recorded against one platform.
    pub fn platform_violations(&self, platform: SocialPlatform) -> u64 {
        self.inner
            .platform_violations_total
            .with_label_values(&[platform.as_str()])
            .get()
    }

    /// Record an HTTP request (called by the middleware).
    fn record_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let status_str = status.to_string();
        self.inner
            .http_requests_total
            .with_label_values(&[method, path, &status_str])
            .inc();

        self.inner
            .http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(duration_secs);

        if status >= 400 {
            self.inner
                .http_errors_total
                .with_label_values(&[method, path, &status_str])
                .inc();
        }
    }

    /// Record one validation result: `valid`, `invalid`, or `rejected`.
    pub fn record_validation(&self, result: &str) {
        self.inner
            .validations_total
            .with_label_values(&[result])
            .inc();
    }

    /// Add `count` violations for a platform.
    pub fn record_platform_violations(&self, platform: SocialPlatform, count: usize) {
        self.inner
            .platform_violations_total
            .with_label_values(&[platform.as_str()])
            .inc_by(count as u64);
    }

    /// Gather all metrics and encode to Prometheus text format.
    pub fn gather_and_encode(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| format!("failed to encode metrics: {e}"))?;
        String::from_utf8(buffer)
            .map_err(|e| format!("metrics encoding produced invalid UTF-8: {e}"))
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_counter(counter: &IntCounterVec) -> u64 {
    counter
        .collect()
        .iter()
        .flat_map(|mf| mf.get_metric())
        .map(|m| m.get_counter().get_value() as u64)
        .sum()
}

/// Path label for a request: the route template (`/v1/posts/validate`),
/// or `unmatched` when no route matched. Raw URIs are never used so the
/// label set stays bounded.
fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Middleware that records HTTP request metrics via Prometheus.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();
    let method = request.method().to_string();
    let path = route_label(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        let duration = start.elapsed().as_secs_f64();
        m.record_request(&method, &path, response.status().as_u16(), duration);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_metrics_new_starts_at_zero() {
        let m = ApiMetrics::new();
        assert_eq!(m.requests(), 0);
        assert_eq!(m.errors(), 0);
        assert_eq!(m.validations("valid"), 0);
    }

    #[test]
    fn request_and_error_counts_independent() {
        let m = ApiMetrics::new();
        for _ in 0..5 {
            m.record_request("GET", "/ok", 200, 0.01);
        }
        m.record_request("POST", "/v1/posts/validate", 422, 0.05);
        assert_eq!(m.requests(), 6);
        assert_eq!(m.errors(), 1);
    }

    #[test]
    fn validation_results_are_labelled() {
        let m = ApiMetrics::new();
        m.record_validation("valid");
        m.record_validation("invalid");
        m.record_validation("invalid");
        assert_eq!(m.validations("valid"), 1);
        assert_eq!(m.validations("invalid"), 2);
        assert_eq!(m.validations("rejected"), 0);
    }

    #[test]
    fn platform_violations_accumulate() {
        let m = ApiMetrics::new();
        m.record_platform_violations(SocialPlatform::Instagram, 2);
        m.record_platform_violations(SocialPlatform::Instagram, 1);
        assert_eq!(m.platform_violations(SocialPlatform::Instagram), 3);
        assert_eq!(m.platform_violations(SocialPlatform::Twitter), 0);
    }

    #[test]
    fn gather_and_encode_includes_recorded_metrics() {
        let m = ApiMetrics::new();
        m.record_request("GET", "/health/liveness", 200, 0.001);
        m.record_platform_violations(SocialPlatform::Tiktok, 1);
        let text = m.gather_and_encode().unwrap();
        assert!(text.contains("prismo_http_requests_total"));
        assert!(text.contains("prismo_platform_violations_total{platform=\"TIKTOK\"} 1"));
    }

    #[test]
    fn requests_without_a_route_share_one_label() {
        let request = axum::http::Request::builder()
            .uri("/wp-admin/setup.php?x=1")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(route_label(&request), "unmatched");
    }

    #[test]
    fn concurrent_increments_are_safe() {
        let m = ApiMetrics::new();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let m = m.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        m.record_validation("valid");
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(m.validations("valid"), 800);
    }
}
