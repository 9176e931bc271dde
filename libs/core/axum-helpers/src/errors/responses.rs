//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// Standard error messages for consistent API responses
pub mod messages {
    pub const INTERNAL_ERROR: &str = "An internal server error occurred";
    pub const VALIDATION_FAILED: &str = "Request validation failed";
}

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "message": "Invalid UUID: not-a-uuid"
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "message": "User 3fa85f64-5717-4562-b3fc-2c963f66afa6 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
