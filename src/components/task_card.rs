//! Task Card Component
//!
//! One task in the list. Clicking the body advances the status; the edit
//! button opens the edit modal.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_advance_status, store_get_task, use_app_store};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id.clone();
    let edit_id = task.id.clone();
    let status = task.status;
    let title = task.title.clone();
    let description = task.description.clone();

    let on_advance = move |_| {
        store_advance_status(&store, &id);
    };

    let on_edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(current) = store_get_task(&store, &edit_id) {
            ctx.open_edit(&current);
        }
    };

    view! {
        <div class="task-card">
            <div class="task-body" title="Click to change status" on:click=on_advance>
                <h3 class="task-title">{title}</h3>
                <p class="task-description">{description}</p>
                <span class=status.css_class()>{status.label()}</span>
            </div>
            <button class="edit-btn" title="Edit task" on:click=on_edit>"✎"</button>
        </div>
    }
}
