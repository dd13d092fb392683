//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod task_card;
mod task_list;
mod task_modal;
mod voice_input;

pub use search_bar::SearchBar;
pub use task_card::TaskCard;
pub use task_list::TaskListView;
pub use task_modal::TaskModal;
pub use voice_input::VoiceInput;
