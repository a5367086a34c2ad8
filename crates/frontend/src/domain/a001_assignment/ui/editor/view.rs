use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::model::EditorMode;
use super::view_model::AssignmentEditorViewModel;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::navigation::RouterNavigator;
use crate::shared::notifications::use_notifications;

/// Modal editor for a single assignment
#[component]
pub fn AssignmentEditor(
    mode: EditorMode,
    /// Where to go after a successful save or close
    return_to: Option<String>,
    /// Close when clicking on the backdrop (default: false)
    #[prop(optional)]
    close_on_backdrop: bool,
) -> impl IntoView {
    let vm = AssignmentEditorViewModel::new(
        mode,
        return_to,
        use_api(),
        Arc::new(use_notifications()),
        Arc::new(RouterNavigator::from_router()),
    );

    let title = match vm.mode() {
        EditorMode::Create => "Create Assignment",
        EditorMode::Update => "Update Assignment",
    };

    let on_close = Callback::new({
        let vm = vm.clone();
        move |_| vm.close_command()
    });

    let error = vm.api.error;
    let is_submit_disabled = vm.is_submit_disabled();

    let schema = vm.form.with_untracked(|f| f.schema());
    let fields = schema
        .fields()
        .iter()
        .map(|meta| {
            let name = meta.name;
            let value_vm = vm.clone();
            let input_vm = vm.clone();
            let error_vm = vm.clone();
            view! {
                <div class="form-group">
                    <label for=meta.control_id>
                        {meta.label}
                        {meta.validation.is_required().then_some(" *")}
                    </label>
                    <input
                        type="text"
                        id=meta.control_id
                        placeholder=meta.placeholder.unwrap_or_default()
                        prop:value=move || value_vm.form.with(|f| f.value(name).to_string())
                        on:input=move |ev| input_vm.set_field(name, event_target_value(&ev))
                    />
                    {move || {
                        error_vm
                            .form
                            .with(|f| f.error(name).map(str::to_string))
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <ModalFrame
            on_close=on_close
            close_on_overlay=close_on_backdrop
            modal_class="assignment-editor".to_string()
        >
            <div class="modal-header">
                <h3 class="modal-title">{title}</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                {icon("alert")}
                                <span>{e}</span>
                            </MessageBar>
                        }
                    })
            }}

            <div class="details-form">{fields}</div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                >
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.submit_command()
                    }
                    disabled=is_submit_disabled
                >
                    {icon("save")}
                    {format!(" {}", title)}
                </Button>
            </div>
        </ModalFrame>
    }
}
