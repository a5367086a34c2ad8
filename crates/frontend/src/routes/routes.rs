use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_query_map;
use leptos_router::path;

use crate::domain::a001_assignment::ui::editor::{AssignmentEditor, EditorMode};
use crate::domain::a001_assignment::ui::page::AssignmentsPage;
use crate::shared::notifications::AlertOutlet;

/// `?from=` of the current location
fn return_to_from_query() -> Option<String> {
    use_query_map()
        .read_untracked()
        .get("from")
        .filter(|from| !from.trim().is_empty())
}

#[component]
fn CreateAssignmentRoute() -> impl IntoView {
    view! { <AssignmentEditor mode=EditorMode::Create return_to=return_to_from_query() /> }
}

#[component]
fn UpdateAssignmentRoute() -> impl IntoView {
    view! { <AssignmentEditor mode=EditorMode::Update return_to=return_to_from_query() /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AlertOutlet />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/assignments" /> } />
                    <ParentRoute path=path!("/assignments") view=AssignmentsPage>
                        <Route path=path!("") view=|| view! { <p class="hint">"Pick an action above."</p> } />
                        <Route path=path!("new") view=CreateAssignmentRoute />
                        <Route path=path!("edit") view=UpdateAssignmentRoute />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
