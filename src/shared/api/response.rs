// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-item envelope: `{ success, data, message?, error? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// List envelope: `{ success, data: [...], pagination, message?, error? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

impl<T> ApiResponse<T> {
    pub fn wrap(data: T, message: Option<&str>) -> Self {
        Self {
            success: true,
            data,
            message: message.map(str::to_string),
            error: None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: f(self.data),
            message: self.message,
            error: self.error,
        }
    }
}

impl Pagination {
    /// Computes page metadata; `page`/`limit` of zero fall back to the defaults.
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        let total_pages = total.div_ceil(u64::from(limit)) as u32;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// Slices `items` to the requested page. An out-of-range page yields an empty `data`.
    pub fn paginate(items: Vec<T>, page: Option<u32>, limit: Option<u32>) -> Self {
        let pagination = Pagination::compute(
            page.unwrap_or(DEFAULT_PAGE),
            limit.unwrap_or(DEFAULT_LIMIT),
            items.len() as u64,
        );

        let start = (pagination.page as usize - 1).saturating_mul(pagination.limit as usize);
        let data = items
            .into_iter()
            .skip(start)
            .take(pagination.limit as usize)
            .collect();

        Self {
            success: true,
            data,
            pagination,
            message: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::wrap(data, None))
    }

    pub fn created(data: T, message: Option<&str>) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse::wrap(data, message))
    }
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
    error: &'a str,
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            success: false,
            message,
            error: code,
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn bad_gateway(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
