//! Application Context
//!
//! Modal and draft state shared via Leptos Context API.

use leptos::prelude::*;

use crate::models::{Draft, ModalState, Task};
use crate::store::{store_add_task, store_edit_task, AppStore};
use crate::transcript::ParsedTranscript;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which modal is open - read
    pub modal: ReadSignal<ModalState>,
    /// Which modal is open - write
    set_modal: WriteSignal<ModalState>,
    /// Form draft bound to the open modal - read
    pub draft: ReadSignal<Draft>,
    /// Form draft bound to the open modal - write
    set_draft: WriteSignal<Draft>,
    /// Description character limit
    description_limit: usize,
}

impl AppContext {
    pub fn new(description_limit: usize) -> Self {
        let (modal, set_modal) = signal(ModalState::Closed);
        let (draft, set_draft) = signal(Draft::default());
        Self {
            modal,
            set_modal,
            draft,
            set_draft,
            description_limit,
        }
    }

    pub fn description_limit(&self) -> usize {
        self.description_limit
    }

    /// Open the add modal with an empty draft
    pub fn open_add(&self) {
        self.set_draft.set(Draft::default());
        self.set_modal.set(ModalState::Adding);
    }

    /// Open the edit modal with the task's current values
    pub fn open_edit(&self, task: &Task) {
        self.set_draft.set(Draft::from_task(task));
        self.set_modal.set(ModalState::Editing(task.id.clone()));
    }

    /// Close any modal and reset the draft
    pub fn close(&self) {
        self.set_modal.set(ModalState::Closed);
        self.set_draft.set(Draft::default());
    }

    pub fn set_title(&self, title: String) {
        self.set_draft.update(|d| d.title = title);
    }

    pub fn set_description(&self, description: String) {
        let limit = self.description_limit;
        self.set_draft.update(|d| d.set_description(&description, limit));
    }

    /// Fill the draft from an accepted voice transcript
    pub fn apply_transcript(&self, parsed: &ParsedTranscript) {
        let limit = self.description_limit;
        self.set_draft.update(|d| d.apply_transcript(parsed, limit));
    }

    /// Commit the draft to the store. Closes the modal on success.
    pub fn submit(&self, store: &AppStore) -> bool {
        let draft = self.draft.get_untracked();
        if !draft.can_submit() {
            return false;
        }
        let committed = match self.modal.get_untracked() {
            ModalState::Adding => store_add_task(store, &draft.title, &draft.description).is_some(),
            ModalState::Editing(id) => store_edit_task(store, &id, &draft.title, &draft.description),
            ModalState::Closed => false,
        };
        if committed {
            self.close();
        }
        committed
    }
}
