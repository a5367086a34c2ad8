use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{use_notifications, Alert, AlertVariant};

const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// Renders dispatched alerts; each one expires after `timeout_ms` or on click.
#[component]
pub fn AlertOutlet(#[prop(optional)] timeout_ms: Option<u32>) -> impl IntoView {
    let service = use_notifications();
    let timeout_ms = timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);

    view! {
        <div class="alert-outlet">
            <For
                each=move || service.alerts().get()
                key=|alert| alert.id
                children=move |alert| view! { <AlertItem alert=alert timeout_ms=timeout_ms /> }
            />
        </div>
    }
}

#[component]
fn AlertItem(alert: Alert, timeout_ms: u32) -> impl IntoView {
    let service = use_notifications();
    let id = alert.id;

    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        service.dismiss(id);
    });

    let intent = match alert.variant {
        AlertVariant::Success => MessageBarIntent::Success,
        AlertVariant::Danger => MessageBarIntent::Error,
    };

    view! {
        <div class="alert-outlet__item" on:click=move |_| service.dismiss(id)>
            <MessageBar intent=intent>
                <span>{alert.message}</span>
            </MessageBar>
        </div>
    }
}
