//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the validation API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prismo Validation API",
        version = "0.1.0",
        description = "Content validation for the Prismo social media dashboard.\n\nChecks draft posts against the text, media count, media kind, and required-media rules of each target platform (Twitter, Facebook, Instagram, LinkedIn, TikTok) and lists the effective constraint table.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::posts::validate_post,
        crate::routes::platforms::list_constraints,
    ),
    components(
        schemas(
            prismo_schema::CreatePostRequest,
            prismo_schema::ValidationOutcome,
            prismo_core::PostContent,
            prismo_core::MediaItem,
            prismo_core::MediaKind,
            prismo_core::SocialPlatform,
            prismo_core::ApprovalStatus,
            prismo_core::TeamId,
            prismo_core::MediaId,
            crate::routes::posts::ValidatePostResponse,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        )
    ),
    tags(
        (name = "posts", description = "Post content validation"),
        (name = "platforms", description = "Platform constraint table"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates_successfully() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Prismo Validation API");
        assert_eq!(spec.info.version, "0.1.0");
    }

    #[test]
    fn test_openapi_spec_has_validation_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/v1/posts/validate"));
        assert!(spec.paths.paths.contains_key("/v1/platforms/constraints"));
    }

    #[test]
    fn test_openapi_spec_has_tags() {
        let spec = ApiDoc::openapi();
        let tags = spec.tags.expect("OpenAPI spec should have tags");
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["posts", "platforms"]);
    }

    #[test]
    fn test_openapi_spec_serializes_to_json() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(json["components"]["schemas"]["ValidatePostResponse"].is_object());
    }

    #[test]
    fn test_validate_path_documents_request_body() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let body = &json["paths"]["/v1/posts/validate"]["post"]["requestBody"];
        let schema_ref = body["content"]["application/json"]["schema"]["$ref"]
            .as_str()
            .unwrap();
        assert_eq!(schema_ref, "#/components/schemas/CreatePostRequest");
    }

    #[test]
    fn test_create_post_request_schema_lists_fields() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &json["components"]["schemas"];
        let props = &schemas["CreatePostRequest"]["properties"];
        for field in ["content", "platforms", "scheduledAt", "approvalStatus", "teamId"] {
            assert!(props[field].is_object(), "missing property {field}");
        }
        let required: Vec<&str> = schemas["CreatePostRequest"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"content"));
        assert!(required.contains(&"platforms"));
        assert!(schemas["PostContent"]["properties"]["media"].is_object());
        assert!(schemas["MediaItem"]["properties"]["type"].is_object());
        let platforms: Vec<&str> = schemas["SocialPlatform"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(platforms, ["TWITTER", "FACEBOOK", "INSTAGRAM", "LINKEDIN", "TIKTOK"]);
    }
}
