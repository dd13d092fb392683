//! Voice Tasks App
//!
//! Root component: header, search, task list and the task modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SearchBar, TaskListView, TaskModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::TaskStatus;
use crate::store::{store_status_count, store_task_count, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_browser();
    log::info!("[app] Starting (speech lang={})", config.recognition.lang);

    let store = Store::new(AppState::default());
    let ctx = AppContext::new(config.description_limit);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(config);

    let summary = move || {
        let mut parts = vec![format!("{} tasks", store_task_count(&store))];
        parts.extend(
            TaskStatus::ORDER
                .iter()
                .map(|status| format!("{} {}", store_status_count(&store, *status), status.label())),
        );
        parts.join(" · ")
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div>
                    <h1>"Tasks"</h1>
                    <p class="task-summary">{summary}</p>
                </div>
                <button class="primary-btn" on:click=move |_| ctx.open_add()>"Add Task"</button>
            </header>

            <SearchBar />

            <TaskListView />

            <TaskModal />
        </div>
    }
}
