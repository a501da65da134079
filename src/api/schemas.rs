// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::Pagination;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// List wrapper with page metadata
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PageResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub message: String,
    /// Error code for programmatic handling
    #[schema(example = "NOT_FOUND")]
    pub error: String,
}
