//! Task List View Component
//!
//! Filtered task cards, or an empty state when nothing is shown.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::AppContext;
use crate::store::{store_has_tasks, store_visible_tasks, use_app_store};

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| store_visible_tasks(&store));
    let has_tasks = move || store_has_tasks(&store);

    view! {
        <Show
            when=move || !visible.with(|tasks| tasks.is_empty())
            fallback=move || if has_tasks() {
                view! {
                    <div class="empty-state">
                        <p class="empty-title">"No tasks match your search."</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="empty-state">
                        <p class="empty-title">"There are no records of Tasks yet."</p>
                        <p class="empty-subtitle">"Please check back later."</p>
                        <button class="primary-btn" on:click=move |_| ctx.open_add()>"Add Task"</button>
                    </div>
                }.into_any()
            }
        >
            <div class="task-list">
                <For
                    each=move || visible.get()
                    // Key on every displayed field so edits and status changes re-render
                    key=|task| (task.id.clone(), task.title.clone(), task.description.clone(), task.status)
                    children=move |task| view! { <TaskCard task=task /> }
                />
            </div>
        </Show>
    }
}
