use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route,
    error::{MethodNotAllowedError, NotFoundError},
    http::StatusCode,
    middleware::Tracing,
    web::Json,
};
use poem_openapi::OpenApiService;
use serde_json::json;

use crate::{
    domain::repositories::UserRepository,
    presentation::http::endpoints::{
        health::HealthEndpoints,
        root::ApiState,
        users::UsersEndpoints,
    },
};

/// Builds the whole HTTP application on top of the given user store.
///
/// Routes: the users API and `/health` at the root, Swagger UI under `/docs`
/// and the OpenAPI document at `/openapi.json`. Anything else answers 404.
pub fn build_app(repo: Arc<dyn UserRepository>, server_url: String) -> impl Endpoint {
    let state = Arc::new(ApiState::new(repo));

    let api_service = OpenApiService::new(
        (HealthEndpoints, UsersEndpoints::new(state)),
        "Users API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .catch_error(not_found)
        .catch_error(method_not_allowed)
        .with(Tracing)
}

async fn not_found(_: NotFoundError) -> Response {
    fallback_response()
}

async fn method_not_allowed(_: MethodNotAllowedError) -> Response {
    fallback_response()
}

fn fallback_response() -> Response {
    Json(json!({ "message": "not found" }))
        .with_status(StatusCode::NOT_FOUND)
        .into_response()
}
