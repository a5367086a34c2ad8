use contracts::domain::a001_assignment::aggregate::AssignmentDto;
use contracts::domain::a001_assignment::metadata::SCHEMA;
use leptos::prelude::*;
use std::sync::Arc;

use super::model::{self, EditorMode, ASSIGNMENTS_LIST_PATH};
use super::state::{EditorEffect, EditorMachine, Ticket};
use crate::shared::form::{FormController, SubmitBlocked};
use crate::shared::http::{ApiError, ApiResponse, UseApi};
use crate::shared::navigation::{resolve_return_path, Navigator};
use crate::shared::notifications::{AlertVariant, NotificationSink};

/// ViewModel for the assignment editor modal
#[derive(Clone)]
pub struct AssignmentEditorViewModel {
    pub form: RwSignal<FormController<AssignmentDto>>,
    pub machine: RwSignal<EditorMachine>,
    pub api: UseApi,
    mode: EditorMode,
    return_to: Option<String>,
    notifications: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
}

impl AssignmentEditorViewModel {
    pub fn new(
        mode: EditorMode,
        return_to: Option<String>,
        api: UseApi,
        notifications: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            // Update mode starts from empty values as well; nothing is fetched.
            form: RwSignal::new(FormController::new(AssignmentDto::default(), SCHEMA)),
            machine: RwSignal::new(EditorMachine::new()),
            api,
            mode,
            return_to,
            notifications,
            navigator,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// `return_to` if known, else the assignments list
    pub fn destination(&self) -> String {
        resolve_return_path(self.return_to.as_deref(), ASSIGNMENTS_LIST_PATH)
    }

    pub fn set_field(&self, field: &str, value: String) {
        let _ = self.form.try_update(|f| f.set_field(field, value));
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let form = self.form;
        let machine = self.machine;
        let loading = self.api.loading;
        Signal::derive(move || {
            !form.with(|f| f.can_submit()) || machine.with(|m| m.is_submitting()) || loading.get()
        })
    }

    /// Submit from an event handler
    pub fn submit_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit().await;
        });
    }

    /// Validate, send one request and apply its completion
    pub async fn submit(&self) {
        let draft = match self.form.try_update(|f| f.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(SubmitBlocked::Invalid)) => {
                log::debug!("assignment form invalid, submit blocked");
                return;
            }
            Some(Err(reason)) => {
                log::debug!("assignment submit skipped: {:?}", reason);
                return;
            }
            None => return,
        };

        let Some(ticket) = self.machine.try_update(|m| m.begin_submit()).flatten() else {
            let _ = self.form.try_update(|f| f.set_submitting(false));
            return;
        };

        let config = model::build_request(self.mode, draft.clone());
        // The form is released once the request is handed off, not when it settles.
        let _ = self.form.try_update(|f| f.set_submitting(false));

        let outcome = self.api.send_request(config).await;
        self.apply_completion(ticket, &draft, &outcome);
    }

    fn apply_completion(
        &self,
        ticket: Ticket,
        draft: &AssignmentDto,
        outcome: &Result<ApiResponse, ApiError>,
    ) {
        let effect = self
            .machine
            .try_update(|m| m.complete(ticket, outcome))
            .flatten();

        match effect {
            Some(EditorEffect::NotifySuccess) => {
                self.notifications.dispatch(
                    AlertVariant::Success,
                    model::success_message(self.mode, draft),
                );
                self.navigator.navigate(&self.destination());
            }
            Some(EditorEffect::NotifyFailure(message)) => {
                self.notifications.dispatch(AlertVariant::Danger, message);
            }
            None => log::debug!("assignment completion ignored"),
        }
    }

    /// Close button, Escape or backdrop: leave without touching the backend
    pub fn close_command(&self) {
        let navigate = self.machine.try_update(|m| m.dismiss()).unwrap_or(false);
        if navigate {
            log::info!("assignment editor closed");
            self.navigator.navigate(&self.destination());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::FakeTransport;
    use crate::shared::http::HttpMethod;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<(AlertVariant, String)>>);

    impl NotificationSink for RecordingSink {
        fn dispatch(&self, variant: AlertVariant, message: String) {
            self.0.lock().unwrap().push((variant, message));
        }
    }

    impl RecordingSink {
        fn alerts(&self) -> Vec<(AlertVariant, String)> {
            self.0.lock().unwrap().clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(Mutex<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.0.lock().unwrap().push(path.to_string());
        }
    }

    impl RecordingNavigator {
        fn paths(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct Harness {
        vm: AssignmentEditorViewModel,
        transport: Arc<FakeTransport>,
        sink: Arc<RecordingSink>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness(mode: EditorMode, return_to: Option<&str>) -> Harness {
        let transport = Arc::new(FakeTransport::new());
        let sink = Arc::new(RecordingSink::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let vm = AssignmentEditorViewModel::new(
            mode,
            return_to.map(str::to_string),
            UseApi::new(transport.clone()),
            sink.clone(),
            navigator.clone(),
        );
        Harness {
            vm,
            transport,
            sink,
            navigator,
        }
    }

    fn fill(vm: &AssignmentEditorViewModel, name: &str) {
        vm.set_field("name", name.to_string());
        vm.set_field("created_at", "2024-03-15".to_string());
        vm.set_field("updated_at", "2024-03-16".to_string());
    }

    #[tokio::test]
    async fn test_incomplete_draft_never_sends() {
        for missing in ["name", "created_at", "updated_at"] {
            let h = harness(EditorMode::Create, None);
            fill(&h.vm, "HW1");
            h.vm.set_field(missing, String::new());

            h.vm.submit().await;

            assert!(h.transport.calls().is_empty(), "{missing}");
            assert!(h.sink.alerts().is_empty());
            assert!(h.navigator.paths().is_empty());
            assert_eq!(
                h.vm.form.with_untracked(|f| f.error(missing).map(str::to_string)),
                Some("Required".to_string())
            );
            assert!(h.vm.is_submit_disabled().get_untracked());
        }
    }

    #[tokio::test]
    async fn test_pristine_draft_never_sends() {
        let h = harness(EditorMode::Create, None);
        h.vm.submit().await;
        assert!(h.transport.calls().is_empty());
        assert!(h.vm.is_submit_disabled().get_untracked());
    }

    #[tokio::test]
    async fn test_create_posts_once_and_navigates_to_default() {
        let h = harness(EditorMode::Create, None);
        h.transport.respond(Ok(ApiResponse::new(201, json!({ "name": "HW1" }))));
        fill(&h.vm, "HW1");
        assert!(!h.vm.is_submit_disabled().get_untracked());

        h.vm.submit().await;

        let calls = h.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].url, "/assignments");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "name": "HW1",
                "created_at": "2024-03-15",
                "updated_at": "2024-03-16",
            }))
        );

        let alerts = h.sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0, AlertVariant::Success);
        assert!(alerts[0].1.contains("created"));
        assert_eq!(h.navigator.paths(), vec!["/assignments".to_string()]);
        assert!(!h.vm.form.with_untracked(|f| f.is_submitting()));
    }

    #[tokio::test]
    async fn test_update_patches_entity_and_returns_to_origin() {
        let h = harness(EditorMode::Update, Some("/courses/7"));
        h.transport.respond(Ok(ApiResponse::new(201, Value::Null)));
        fill(&h.vm, "HW1");

        h.vm.submit().await;

        let calls = h.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Patch);
        assert_eq!(calls[0].url, "/assignments/HW1");

        let alerts = h.sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].1.contains("updated"));
        assert_eq!(h.navigator.paths(), vec!["/courses/7".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_notifies_and_stays() {
        let h = harness(EditorMode::Create, Some("/courses/7"));
        h.transport.respond(Err(ApiError::Status {
            status: 409,
            message: "Name already exists".to_string(),
        }));
        fill(&h.vm, "HW1");

        h.vm.submit().await;

        assert_eq!(
            h.sink.alerts(),
            vec![(AlertVariant::Danger, "Name already exists".to_string())]
        );
        assert!(h.navigator.paths().is_empty());
        assert_eq!(
            h.vm.api.error.get_untracked().as_deref(),
            Some("Name already exists")
        );
        assert_eq!(h.vm.form.with_untracked(|f| f.value("name").to_string()), "HW1");
        assert!(!h.vm.is_submit_disabled().get_untracked());
    }

    #[tokio::test]
    async fn test_conflict_status_reported_with_server_message() {
        let h = harness(EditorMode::Update, None);
        h.transport.respond(Ok(ApiResponse::new(
            409,
            json!({ "message": "Name already exists" }),
        )));
        fill(&h.vm, "HW1");

        h.vm.submit().await;

        assert_eq!(
            h.sink.alerts(),
            vec![(AlertVariant::Danger, "Name already exists".to_string())]
        );
        assert!(h.navigator.paths().is_empty());
        assert_eq!(
            h.vm.api.error.get_untracked().as_deref(),
            Some("Name already exists")
        );
        assert_eq!(h.vm.api.data.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let h = harness(EditorMode::Create, None);
        h.transport.respond(Err(ApiError::Transport("offline".to_string())));
        h.transport.respond(Ok(ApiResponse::new(201, Value::Null)));
        fill(&h.vm, "HW1");

        h.vm.submit().await;
        h.vm.submit().await;

        assert_eq!(h.transport.calls().len(), 2);
        let variants: Vec<_> = h.sink.alerts().into_iter().map(|(v, _)| v).collect();
        assert_eq!(variants, vec![AlertVariant::Danger, AlertVariant::Success]);
        assert_eq!(h.navigator.paths().len(), 1);
    }

    #[tokio::test]
    async fn test_close_before_submit_navigates_without_calls() {
        let h = harness(EditorMode::Create, Some("/courses/7"));
        fill(&h.vm, "HW1");

        h.vm.close_command();
        h.vm.close_command();

        assert!(h.transport.calls().is_empty());
        assert!(h.sink.alerts().is_empty());
        assert_eq!(h.navigator.paths(), vec!["/courses/7".to_string()]);

        h.vm.submit().await;
        assert!(h.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_close_matches_success_destination() {
        let closed = harness(EditorMode::Create, None);
        closed.vm.close_command();

        let saved = harness(EditorMode::Create, None);
        saved.transport.respond(Ok(ApiResponse::new(201, Value::Null)));
        fill(&saved.vm, "HW1");
        saved.vm.submit().await;

        assert_eq!(closed.navigator.paths(), saved.navigator.paths());
    }

    #[tokio::test]
    async fn test_completion_after_close_is_ignored() {
        use std::future::{poll_fn, Future};
        use std::task::Poll;

        let h = harness(EditorMode::Create, None);
        let gate = h.transport.gate();
        fill(&h.vm, "HW1");

        let mut pending = Box::pin(h.vm.submit());
        let still_running = poll_fn(|cx| Poll::Ready(pending.as_mut().poll(cx).is_pending())).await;
        assert!(still_running);
        assert!(h.vm.is_submit_disabled().get_untracked());

        h.vm.close_command();
        let _ = gate.send(Ok(ApiResponse::new(201, Value::Null)));
        pending.await;

        assert_eq!(h.transport.calls().len(), 1);
        assert!(h.sink.alerts().is_empty());
        assert_eq!(h.navigator.paths(), vec!["/assignments".to_string()]);
    }
}
