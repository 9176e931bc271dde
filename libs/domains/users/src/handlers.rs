use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, UuidPath, ValidatedJson,
    errors::responses::{BadRequestUuidResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::UserResult;
use crate::id::IdGenerator;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUser, UpdateUser, ErrorResponse),
        responses(NotFoundResponse, BadRequestUuidResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R, G>(service: UserService<R, G>) -> Router
where
    R: UserRepository + 'static,
    G: IdGenerator + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository, G: IdGenerator>(
    State(service): State<Arc<UserService<R, G>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository, G: IdGenerator>(
    State(service): State<Arc<UserService<R, G>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user, returning its id
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created, body is the new id", body = Uuid),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository, G: IdGenerator>(
    State(service): State<Arc<UserService<R, G>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<Uuid>> {
    let id = service.create_user(input).await?;
    Ok(Json(id))
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Malformed user id, validation failure, or duplicate email", body = ErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository, G: IdGenerator>(
    State(service): State<Arc<UserService<R, G>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<StatusCode> {
    service.update_user(id, input).await?;
    Ok(StatusCode::OK)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository, G: IdGenerator>(
    State(service): State<Arc<UserService<R, G>>>,
    UuidPath(id): UuidPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::OK)
}
