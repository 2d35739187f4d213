use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router, middleware};
use utoipa::OpenApi;

use crate::api::rest::{dto, error, handlers};
use crate::config::ResourcesConfig;
use crate::domain::health::HealthService;
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(title = "Resources API", description = "CRUD over named resources"),
    paths(
        handlers::create_resource,
        handlers::list_resources,
        handlers::get_resource,
        handlers::update_resource,
        handlers::delete_resource,
        handlers::health,
    ),
    components(schemas(
        dto::ResourceDto,
        dto::CreateResourceReq,
        dto::UpdateResourceReq,
        dto::ListResourcesResponse,
        dto::HealthDto,
        dto::ErrorBody,
    )),
    tags(
        (name = "Resources", description = "Resource management"),
        (name = "Health", description = "Store reachability"),
    )
)]
pub struct ApiDoc;

/// Build the module router: resource CRUD, health endpoints and the `OpenAPI` document.
#[must_use]
pub fn register_routes(
    service: Arc<Service>,
    health: Arc<HealthService>,
    config: &ResourcesConfig,
) -> Router {
    let mut router = Router::new()
        .route(
            "/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route(
            "/resources/{id}",
            get(handlers::get_resource)
                .put(handlers::update_resource)
                .delete(handlers::delete_resource),
        )
        .route("/health", get(handlers::health))
        .route("/healthz", get(handlers::healthz))
        .route("/openapi.json", get(handlers::openapi_json))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(Extension(service))
        .layer(Extension(health));

    if config.expose_error_details {
        router = router.layer(middleware::map_response(error::expose_internal_details));
    }

    router
}
