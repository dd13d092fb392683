//! Task Collection
//!
//! Ordered in-memory task list. Every mutation is a silent no-op on
//! invalid input; callers check the return value when they care.

use crate::models::{Task, TaskId, TaskStatus};

/// Stored when a task is created without a description
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id_millis: i64,
}

impl TaskList {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Append a new pending task, id taken from the current time
    pub fn add(&mut self, title: &str, description: &str) -> Option<TaskId> {
        self.add_at(title, description, chrono::Utc::now().timestamp_millis())
    }

    pub fn add_at(&mut self, title: &str, description: &str, now_millis: i64) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            log::debug!("[tasks] Ignoring add with empty title");
            return None;
        }
        let description = match description.trim() {
            "" => DEFAULT_DESCRIPTION,
            d => d,
        };

        // Ids must stay unique when two tasks land in the same millisecond
        let millis = now_millis.max(self.last_id_millis + 1);
        self.last_id_millis = millis;
        let id = TaskId::from_millis(millis);

        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            status: TaskStatus::Pending,
        });
        log::debug!("[tasks] Added task {}", id);
        Some(id)
    }

    /// Overwrite the title; the description only when the new one is non-empty
    pub fn edit(&mut self, id: &TaskId, title: &str, description: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            log::debug!("[tasks] Ignoring edit of {} with empty title", id);
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            log::debug!("[tasks] Ignoring edit of unknown task {}", id);
            return false;
        };

        task.title = title.to_string();
        let description = description.trim();
        if !description.is_empty() {
            task.description = description.to_string();
        }
        log::debug!("[tasks] Edited task {}", id);
        true
    }

    /// Move the task one step along the status cycle
    pub fn advance_status(&mut self, id: &TaskId) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|task| &task.id == id)?;
        task.status = task.status.next();
        log::debug!("[tasks] Task {} is now {}", id, task.status.label());
        Some(task.status)
    }

    /// Case-insensitive substring match on titles, in list order
    pub fn filter_by_title(&self, query: &str) -> Vec<Task> {
        if query.is_empty() {
            return self.tasks.clone();
        }
        let query = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|task| task.status == status).count()
    }
}
