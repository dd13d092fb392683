//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId, TaskStatus};
use crate::tasks::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in creation order
    pub tasks: TaskList,
    /// Title search box contents
    pub search: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a pending task; no-op when the title is blank
pub fn store_add_task(store: &AppStore, title: &str, description: &str) -> Option<TaskId> {
    store.tasks().write().add(title, description)
}

/// Edit a task by ID; no-op when the title is blank or the ID is unknown
pub fn store_edit_task(store: &AppStore, id: &TaskId, title: &str, description: &str) -> bool {
    store.tasks().write().edit(id, title, description)
}

/// Advance a task's status by ID
pub fn store_advance_status(store: &AppStore, id: &TaskId) -> Option<TaskStatus> {
    store.tasks().write().advance_status(id)
}

/// Current copy of a task by ID
pub fn store_get_task(store: &AppStore, id: &TaskId) -> Option<Task> {
    store.tasks().read_untracked().get(id).cloned()
}

/// Tasks whose title matches the search box
pub fn store_visible_tasks(store: &AppStore) -> Vec<Task> {
    let query = store.search().get();
    store.tasks().read().filter_by_title(&query)
}

pub fn store_task_count(store: &AppStore) -> usize {
    store.tasks().read().len()
}

pub fn store_has_tasks(store: &AppStore) -> bool {
    !store.tasks().read().is_empty()
}

pub fn store_status_count(store: &AppStore, status: TaskStatus) -> usize {
    store.tasks().read().count_by_status(status)
}

pub fn store_set_search(store: &AppStore, query: String) {
    store.search().set(query);
}
