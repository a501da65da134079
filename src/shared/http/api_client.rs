use std::sync::Arc;
use std::time::Duration;

use reqwest::{multipart::Form, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::storage::LocalStorage;

/// Client-local storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Paths relative to the API base URL.
pub mod endpoints {
    pub const USER: &str = "/user";
    pub const SOCIAL_LINKS: &str = "/user/social-links";
    pub const TECH_STACK: &str = "/user/tech-stack";
    pub const SKILLS: &str = "/user/skills";

    pub const PROJECTS: &str = "/projects";
    pub const EXPERIENCES: &str = "/experiences";
    pub const EDUCATION: &str = "/education";
    pub const MEMORIES: &str = "/memories";

    pub const SETTINGS: &str = "/settings";
    pub const NAVIGATION: &str = "/navigation";

    pub const CONTACT: &str = "/contact";
    pub const MESSAGES: &str = "/contact/messages";

    pub const UPLOAD: &str = "/upload";
    pub const UPLOAD_AVATAR: &str = "/upload/avatar";
    pub const UPLOAD_CV: &str = "/upload/cv";
    pub const UPLOAD_PROJECT_IMAGES: &str = "/upload/project-images";
    pub const UPLOAD_MEMORY_IMAGES: &str = "/upload/memory-images";

    pub fn item(collection: &str, id: &str) -> String {
        format!("{collection}/{id}")
    }

    pub fn reorder(collection: &str) -> String {
        format!("{collection}/reorder")
    }

    pub fn toggle_featured(collection: &str, id: &str) -> String {
        format!("{collection}/{id}/toggle-featured")
    }

    pub fn toggle_visibility(collection: &str, id: &str) -> String {
        format!("{collection}/{id}/toggle-visibility")
    }
}

/// Body of a delete acknowledgement; `data` is usually absent.
#[derive(Deserialize)]
struct Acknowledgement {
    #[serde(default = "default_true")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Body of the reorder and bulk-replace endpoints: `{ "items": [...] }`.
#[derive(Debug, Serialize)]
pub struct ItemsBody<'a, T> {
    pub items: &'a [T],
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

/// HTTP client for the portfolio REST API.
///
/// Attaches the stored bearer token to every request and clears it when the
/// server answers 401.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn LocalStorage>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        storage: Arc<dyn LocalStorage>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ServiceError> {
        let url = self.url(path, query)?;
        let response = self.execute(Method::GET, self.http.get(url)).await?;
        decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        let response = self
            .execute(Method::POST, self.http.post(url).json(body))
            .await?;
        decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        let response = self
            .execute(Method::PUT, self.http.put(url).json(body))
            .await?;
        decode(response).await
    }

    /// PATCH with an optional JSON body (toggles send none).
    pub async fn patch<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        let mut request = self.http.patch(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.execute(Method::PATCH, request).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse<()>, ServiceError> {
        let url = self.url(path, &[])?;
        let response = self.execute(Method::DELETE, self.http.delete(url)).await?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(ApiResponse::wrap((), None));
        }

        let ack: Acknowledgement =
            serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))?;

        Ok(ApiResponse {
            success: ack.success,
            data: (),
            message: ack.message,
            error: None,
        })
    }

    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ServiceError> {
        let url = self.url(path, &[])?;
        let response = self
            .execute(Method::POST, self.http.post(url).multipart(form))
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url, ServiceError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ServiceError::Network(format!("invalid URL for {path}: {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    async fn execute(&self, method: Method, request: RequestBuilder) -> Result<Response, ServiceError> {
        let request = match self.storage.get_item(AUTH_TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            error!(%method, error = %e, "API request failed");
            ServiceError::from(e)
        })?;

        let status = response.status();
        let url = response.url().clone();
        debug!(%method, %url, status = status.as_u16(), "API response");

        if status == StatusCode::UNAUTHORIZED {
            warn!(%method, %url, "API returned 401, clearing stored token");
            if let Err(e) = self.storage.remove_item(AUTH_TOKEN_KEY) {
                error!(error = %e, "failed to clear stored token");
            }
            return Err(ServiceError::Unauthorized);
        }

        if !status.is_success() {
            let message = error_message(response, status).await;
            error!(%method, %url, status = status.as_u16(), %message, "API error");
            return Err(ServiceError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    Ok(response.json::<T>().await?)
}

async fn error_message(response: Response, status: StatusCode) -> String {
    let fallback = status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string();

    match response.json::<ErrorPayload>().await {
        Ok(ErrorPayload {
            message: Some(message),
        }) => message,
        _ => fallback,
    }
}

/// Renders list params as query pairs, skipping unset values.
pub fn query_pairs<P: Serialize>(params: &P) -> Vec<(String, String)> {
    let Ok(serde_json::Value::Object(map)) = serde_json::to_value(params) else {
        return Vec::new();
    };

    map.into_iter()
        .filter_map(|(name, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((name, s)),
            other => Some((name, other.to_string())),
        })
        .collect()
}
