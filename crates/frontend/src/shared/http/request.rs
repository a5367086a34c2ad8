use contracts::shared::api::ErrorResponse;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure mapping from the caller's data to the wire payload
pub type TransformRequest<T> = fn(&T) -> Result<Value, ApiError>;

/// One request as described by the caller of `UseApi::send_request`
#[derive(Clone)]
pub struct RequestConfig<T> {
    /// Path relative to the API base, e.g. `/assignments`
    pub url: String,
    pub method: HttpMethod,
    pub data: Option<T>,
    pub transform_request: Option<TransformRequest<T>>,
}

impl<T: fmt::Debug> fmt::Debug for RequestConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("data", &self.data)
            .field("transform_request", &self.transform_request.is_some())
            .finish()
    }
}

impl<T: Serialize> RequestConfig<T> {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            data: None,
            transform_request: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_transform(mut self, transform: TransformRequest<T>) -> Self {
        self.transform_request = Some(transform);
        self
    }

    /// Wire body: the transform output if one is set, else `data` as JSON
    pub fn body(&self) -> Result<Option<Value>, ApiError> {
        match (&self.data, self.transform_request) {
            (None, _) => Ok(None),
            (Some(data), Some(transform)) => transform(data).map(Some),
            (Some(data), None) => serde_json::to_value(data)
                .map(Some)
                .map_err(|e| ApiError::Serialize(e.to_string())),
        }
    }

    pub fn into_wire(self) -> Result<WireRequest, ApiError> {
        let body = self.body()?;
        Ok(WireRequest {
            method: self.method,
            url: self.url,
            body,
        })
    }
}

/// A request as handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON, a string for non-JSON text, `Null` for an empty body
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-2xx responses become `ApiError::Status` with the body's message
    pub fn into_result(self) -> Result<ApiResponse, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = match &self.body {
            Value::Null => format!("HTTP {}", self.status),
            Value::String(text) => error_message(self.status, text),
            other => error_message(self.status, &other.to_string()),
        };
        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }

    pub(crate) fn from_text(status: u16, text: &str) -> Self {
        let trimmed = text.trim();
        let body = if trimmed.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()))
        };
        Self { status, body }
    }
}

/// Failure of a single call. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: error_message(status, body),
        }
    }
}

/// Message for a non-2xx response.
///
/// A JSON `message`/`error` field wins, then a non-JSON text body, then `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(trimmed) {
        if let Some(message) = parsed.into_message() {
            return message;
        }
    }
    if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return trimmed.to_string();
    }
    format!("HTTP {}", status)
}
