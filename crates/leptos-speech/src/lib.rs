//! Browser Speech Utilities
//!
//! Thin bindings over the browser speech-recognition API.
//! The rest of the app only sees [`SpeechEngine`] and [`SpeechEvent`],
//! so it can be driven without a browser.

mod browser;
mod permission;

pub use browser::{default_language, is_supported, BrowserSpeech};
pub use permission::{query_microphone_permission, PermissionState};

/// Recognition session settings
#[derive(Clone, Debug, PartialEq)]
pub struct RecognitionOptions {
    /// BCP 47 language tag, e.g. "en-US"
    pub lang: String,
    /// Keep listening across pauses until stopped
    pub continuous: bool,
    /// Deliver partial results while the user is still speaking
    pub interim_results: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

/// Speech capability failures
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported in this browser")]
    Unsupported,
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("speech recognition error: {0}")]
    Recognition(String),
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

impl SpeechError {
    /// Map an engine error code (the `error` field of the error event)
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" | "service-not-allowed" => SpeechError::PermissionDenied,
            other => SpeechError::Recognition(other.to_string()),
        }
    }
}

/// Accumulated transcript for the current session
///
/// `final_text` joins every final result seen so far, `interim_text`
/// joins the results the engine may still revise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecognitionUpdate {
    pub final_text: String,
    pub interim_text: String,
}

impl RecognitionUpdate {
    pub fn push_final(&mut self, segment: &str) {
        push_segment(&mut self.final_text, segment);
    }

    pub fn push_interim(&mut self, segment: &str) {
        push_segment(&mut self.interim_text, segment);
    }

    /// Everything heard so far, for live display
    pub fn combined(&self) -> String {
        let mut text = self.final_text.clone();
        push_segment(&mut text, &self.interim_text);
        text
    }
}

fn push_segment(target: &mut String, segment: &str) {
    let segment = segment.trim();
    if segment.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(segment);
}

/// Notifications delivered by a running engine
#[derive(Clone, Debug, PartialEq)]
pub enum SpeechEvent {
    Result(RecognitionUpdate),
    End,
    Error(SpeechError),
}

/// Narrow start/stop capability; events arrive through the callback
/// given to the implementation's constructor.
pub trait SpeechEngine {
    fn start(&self) -> Result<(), SpeechError>;
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SpeechError::from_code("not-allowed"), SpeechError::PermissionDenied);
        assert_eq!(SpeechError::from_code("service-not-allowed"), SpeechError::PermissionDenied);
        assert_eq!(
            SpeechError::from_code("no-speech"),
            SpeechError::Recognition("no-speech".to_string())
        );
    }

    #[test]
    fn test_update_segments() {
        let mut update = RecognitionUpdate::default();
        update.push_final(" buy milk ");
        update.push_final("");
        update.push_final("and eggs");
        update.push_interim("tomorrow");

        assert_eq!(update.final_text, "buy milk and eggs");
        assert_eq!(update.interim_text, "tomorrow");
        assert_eq!(update.combined(), "buy milk and eggs tomorrow");
    }

    #[test]
    fn test_combined_without_finals() {
        let mut update = RecognitionUpdate::default();
        update.push_interim("title is");
        assert_eq!(update.combined(), "title is");
    }
}
