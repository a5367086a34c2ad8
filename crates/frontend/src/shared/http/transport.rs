use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::request::{ApiError, ApiResponse, HttpMethod, WireRequest};
use crate::shared::api_utils::api_url;

/// Performs exactly one wire call per `send`.
///
/// Non-2xx statuses come back as `ApiError::Status`.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: WireRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser transport over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: WireRequest) -> Result<ApiResponse, ApiError> {
        let url = api_url(&request.url);
        let builder = Self::builder(request.method, &url).header("Accept", "application/json");

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialize(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !response.ok() {
            log::warn!("{} {} -> HTTP {}", request.method, url, status);
            return Err(ApiError::from_response(status, &text));
        }

        Ok(ApiResponse::from_text(status, &text))
    }
}
