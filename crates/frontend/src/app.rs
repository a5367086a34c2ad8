use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Alerts dispatched by any page end up in the outlet rendered by AppRoutes.
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
