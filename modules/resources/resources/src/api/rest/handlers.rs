use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;
use utoipa::OpenApi;

use crate::domain::health::HealthService;
use crate::domain::service::Service;
use crate::domain::validation::parse_resource_id;

use super::dto::{
    CreateResourceReq, ErrorBody, HealthDto, ListResourcesQuery, ListResourcesResponse,
    ResourceDto, UpdateResourceReq,
};
use super::error::ApiError;
use super::extract::{JsonBody, PathParam, QueryParams};
use super::routes::ApiDoc;

pub type ApiResult<T> = Result<T, ApiError>;

#[utoipa::path(
    post,
    path = "/resources",
    tag = "Resources",
    request_body = CreateResourceReq,
    responses(
        (status = 201, description = "Resource created", body = ResourceDto),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn create_resource(
    Extension(svc): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateResourceReq>,
) -> ApiResult<(StatusCode, Json<ResourceDto>)> {
    let new = req.into_new_resource()?;
    let created = svc.create(new).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/resources",
    tag = "Resources",
    params(ListResourcesQuery),
    responses(
        (status = 200, description = "Page of resources, newest first", body = ListResourcesResponse),
        (status = 400, description = "Invalid query", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn list_resources(
    Extension(svc): Extension<Arc<Service>>,
    QueryParams(query): QueryParams<ListResourcesQuery>,
) -> ApiResult<Json<ListResourcesResponse>> {
    let page = svc.list(query.into_query()?).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource id (UUID)")),
    responses(
        (status = 200, description = "Resource found", body = ResourceDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn get_resource(
    Extension(svc): Extension<Arc<Service>>,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<ResourceDto>> {
    let id = parse_resource_id(&id)?;
    let resource = svc.get_by_id(id).await?;
    Ok(Json(resource.into()))
}

#[utoipa::path(
    put,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource id (UUID)")),
    request_body = UpdateResourceReq,
    responses(
        (status = 200, description = "Resource updated", body = ResourceDto),
        (status = 400, description = "Malformed id or payload", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn update_resource(
    Extension(svc): Extension<Arc<Service>>,
    PathParam(id): PathParam<String>,
    JsonBody(req): JsonBody<UpdateResourceReq>,
) -> ApiResult<Json<ResourceDto>> {
    let id = parse_resource_id(&id)?;
    let updated = svc.update(id, req.into()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = "Resources",
    params(("id" = String, Path, description = "Resource id (UUID)")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn delete_resource(
    Extension(svc): Extension<Arc<Service>>,
    PathParam(id): PathParam<String>,
) -> ApiResult<StatusCode> {
    let id = parse_resource_id(&id)?;
    svc.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = HealthDto),
        (status = 503, description = "Store unreachable", body = HealthDto),
    )
)]
pub async fn health(
    Extension(health): Extension<Arc<HealthService>>,
) -> (StatusCode, Json<HealthDto>) {
    let status = health.check().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status.into()))
}

/// Process liveness; never touches the store.
pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
