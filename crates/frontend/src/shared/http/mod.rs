//! Generic HTTP request hook
//!
//! - request.rs: methods, request config, response and error types
//! - transport.rs: transport seam and the browser implementation
//! - use_api.rs: the reactive hook

mod request;
mod transport;
mod use_api;

pub use request::{
    error_message, ApiError, ApiResponse, HttpMethod, RequestConfig, TransformRequest,
    WireRequest,
};
pub use transport::{GlooTransport, HttpTransport};
pub use use_api::{use_api, UseApi};
