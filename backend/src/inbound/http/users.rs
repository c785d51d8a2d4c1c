//! Users API handlers.
//!
//! ```text
//! POST   /api/v1/users       {"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}  {"firstName":"Ada","lastName":"King","email":"ada@example.com"}
//! DELETE /api/v1/users/{id}
//! ```
//!
//! Bodies and responses use [`UserDto`]. Failures use the shared
//! [`Error`](crate::domain::Error) envelope.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{UserDto, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_service_error;
use crate::inbound::http::schemas::{ErrorSchema, UserDtoSchema};
use crate::inbound::http::state::HttpState;

/// Register the users routes on a scope or app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_service::inbound::http::users;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(users::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// Create a user. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserDtoSchema,
    responses(
        (status = 201, description = "User created", body = UserDtoSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already exists", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDto>,
) -> ApiResult<HttpResponse> {
    let created = state
        .users_command
        .create_user(payload.into_inner())
        .await
        .map_err(map_service_error)?;
    Ok(HttpResponse::Created().json(created))
}

/// List every user ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserDtoSchema]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserDto>>> {
    let users = state
        .users_query
        .get_all_users()
        .await
        .map_err(map_service_error)?;
    Ok(web::Json(users))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserDtoSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserDto>> {
    let user = state
        .users_query
        .get_user_by_id(UserId::new(path.into_inner()))
        .await
        .map_err(map_service_error)?;
    Ok(web::Json(user))
}

/// Overwrite a user's names and email. The path id wins over any body id.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserDtoSchema,
    responses(
        (status = 200, description = "Updated user", body = UserDtoSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserDto>,
) -> ApiResult<web::Json<UserDto>> {
    let mut dto = payload.into_inner();
    dto.id = path.into_inner();
    let updated = state
        .users_command
        .update_user(dto)
        .await
        .map_err(map_service_error)?;
    Ok(web::Json(updated))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users_command
        .delete_user(UserId::new(path.into_inner()))
        .await
        .map_err(map_service_error)?;
    Ok(HttpResponse::NoContent().finish())
}
