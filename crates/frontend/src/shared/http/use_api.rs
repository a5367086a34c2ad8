use leptos::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::request::{ApiError, ApiResponse, RequestConfig};
use super::transport::{GlooTransport, HttpTransport};

/// Request hook: one call per `send_request`, latest outcome exposed as signals.
///
/// Only the most recently issued call may write `data`/`error`/`loading`;
/// earlier calls that settle late are dropped. Writes go through `try_*`, so a
/// hook whose owner is already disposed ignores late results.
#[derive(Clone)]
pub struct UseApi {
    pub data: RwSignal<Option<ApiResponse>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    latest: Arc<AtomicU64>,
    transport: Arc<dyn HttpTransport>,
}

impl UseApi {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            latest: Arc::new(AtomicU64::new(0)),
            transport,
        }
    }

    pub async fn send_request<T: Serialize>(
        &self,
        config: RequestConfig<T>,
    ) -> Result<ApiResponse, ApiError> {
        let call = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.loading.try_set(true);

        let outcome = match config.into_wire() {
            Ok(request) => {
                log::debug!("api call #{}: {} {}", call, request.method, request.url);
                self.transport
                    .send(request)
                    .await
                    .and_then(ApiResponse::into_result)
            }
            Err(e) => Err(e),
        };

        if self.latest.load(Ordering::SeqCst) != call {
            log::debug!("api call #{} superseded, result dropped", call);
            return outcome;
        }

        match &outcome {
            Ok(response) => {
                let _ = self.data.try_set(Some(response.clone()));
                let _ = self.error.try_set(None);
            }
            Err(e) => {
                log::warn!("api call #{} failed: {}", call, e);
                let _ = self.data.try_set(None);
                let _ = self.error.try_set(Some(e.to_string()));
            }
        }
        let _ = self.loading.try_set(false);

        outcome
    }
}

/// Hook backed by the transport in context, or the browser transport
pub fn use_api() -> UseApi {
    let transport = use_context::<Arc<dyn HttpTransport>>()
        .unwrap_or_else(|| Arc::new(GlooTransport) as Arc<dyn HttpTransport>);
    UseApi::new(transport)
}
