//! Frontend Models
//!
//! Task record, status cycle, form draft and modal state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transcript::ParsedTranscript;

/// Task identifier: creation time in epoch milliseconds, as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task status; advances Pending -> In Progress -> Completed -> Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Fixed cycle order
    pub const ORDER: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TaskStatus::Pending => "status-badge status-pending",
            TaskStatus::InProgress => "status-badge status-in-progress",
            TaskStatus::Completed => "status-badge status-completed",
        }
    }
}

/// Task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Title/description being edited in a modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    /// Confirm is only allowed once the title has content
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Set the description, keeping at most `limit` characters
    pub fn set_description(&mut self, description: &str, limit: usize) {
        self.description = truncate_chars(description, limit);
    }

    /// Replace the fields a voice transcript detected, keep the rest
    pub fn apply_transcript(&mut self, parsed: &ParsedTranscript, limit: usize) {
        if parsed.has_title() {
            self.title = parsed.title.clone();
        }
        if parsed.has_description() {
            self.set_description(&parsed.description, limit);
        }
    }
}

pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Which modal is open. `Editing` carries the task being edited, so an edit
/// target exists exactly when the edit modal is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Adding,
    Editing(TaskId),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing(&self) -> Option<&TaskId> {
        match self {
            ModalState::Editing(id) => Some(id),
            _ => None,
        }
    }
}
