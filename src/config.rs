//! App Configuration
//!
//! UI limits and speech settings, provided via context from `App`.

use leptos_speech::RecognitionOptions;

/// Maximum characters in a task description (form text area limit)
pub const DESCRIPTION_LIMIT: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub description_limit: usize,
    pub recognition: RecognitionOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            description_limit: DESCRIPTION_LIMIT,
            recognition: RecognitionOptions::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the recognition language taken from the browser
    pub fn from_browser() -> Self {
        let mut config = Self::default();
        if let Some(lang) = leptos_speech::default_language() {
            config.recognition.lang = lang;
        }
        config
    }
}
