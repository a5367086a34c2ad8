//! Global notification channel
//!
//! `NotificationService` lives in context for the whole app; `AlertOutlet`
//! renders whatever was dispatched into it.

mod outlet;

pub use outlet::AlertOutlet;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Oldest alerts are dropped beyond this
const MAX_ALERTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: Uuid,
    pub variant: AlertVariant,
    pub message: String,
}

impl Alert {
    pub fn new(variant: AlertVariant, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            message: message.into(),
        }
    }
}

/// Receiver of user-facing notifications
pub trait NotificationSink: Send + Sync {
    fn dispatch(&self, variant: AlertVariant, message: String);
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    alerts: RwSignal<Vec<Alert>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            alerts: RwSignal::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Signal<Vec<Alert>> {
        self.alerts.into()
    }

    pub fn show(&self, alert: Alert) {
        self.alerts.update(|alerts| {
            alerts.push(alert);
            if alerts.len() > MAX_ALERTS {
                let overflow = alerts.len() - MAX_ALERTS;
                alerts.drain(..overflow);
            }
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.alerts.try_update(|alerts| alerts.retain(|a| a.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for NotificationService {
    fn dispatch(&self, variant: AlertVariant, message: String) {
        log::info!("alert [{:?}]: {}", variant, message);
        self.show(Alert::new(variant, message));
    }
}

/// Service provided by `App`
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_and_dismiss() {
        let service = NotificationService::new();
        service.dispatch(AlertVariant::Success, "Assignment HW1 created successfully!".into());
        service.dispatch(AlertVariant::Danger, "Name already exists".into());

        let alerts = service.alerts().get_untracked();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[1].variant, AlertVariant::Danger);
        assert_eq!(alerts[1].message, "Name already exists");

        service.dismiss(alerts[0].id);
        let left = service.alerts().get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, alerts[1].id);

        service.dismiss(alerts[1].id);
        assert!(service.alerts().get_untracked().is_empty());
    }

    #[test]
    fn test_oldest_alerts_dropped() {
        let service = NotificationService::new();
        for i in 0..MAX_ALERTS + 2 {
            service.dispatch(AlertVariant::Success, format!("alert {i}"));
        }
        let alerts = service.alerts().get_untracked();
        assert_eq!(alerts.len(), MAX_ALERTS);
        assert_eq!(alerts[0].message, "alert 2");
    }

    #[test]
    fn test_variant_wire_names() {
        assert_eq!(serde_json::to_string(&AlertVariant::Success).unwrap(), r#""success""#);
        assert_eq!(serde_json::to_string(&AlertVariant::Danger).unwrap(), r#""danger""#);
    }
}
