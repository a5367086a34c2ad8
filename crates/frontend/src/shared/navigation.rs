use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Moves the app to another path
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator over the `leptos_router` history
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

impl RouterNavigator {
    /// Must be called inside `<Router>`
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Arc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate -> {}", path);
        (self.navigate)(path);
    }
}

/// `?from=` query carried by links that open a modal route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// `path` with `?from=<return_to>` appended when a return location is known
pub fn with_return_to(path: &str, return_to: Option<&str>) -> String {
    let query = ReturnQuery {
        from: return_to.map(str::to_string),
    };
    match serde_qs::to_string(&query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

/// Return location or `fallback` when absent or blank
pub fn resolve_return_path(return_to: Option<&str>, fallback: &str) -> String {
    return_to
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
