use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

use super::editor::ASSIGNMENTS_LIST_PATH;
use crate::shared::icons::icon;
use crate::shared::navigation::with_return_to;

/// Assignments landing page; editor routes render into its outlet
#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let new_href = with_return_to("/assignments/new", Some(ASSIGNMENTS_LIST_PATH));
    let edit_href = with_return_to("/assignments/edit", Some(ASSIGNMENTS_LIST_PATH));

    view! {
        <div class="page assignments-page">
            <div class="page-header">
                <h2>"Assignments"</h2>
                <div class="page-header-actions">
                    <A href=new_href attr:class="btn btn-primary">
                        {icon("plus")}
                        " New"
                    </A>
                    <A href=edit_href attr:class="btn btn-secondary">
                        {icon("edit")}
                        " Edit"
                    </A>
                </div>
            </div>
            <Outlet />
        </div>
    }
}
