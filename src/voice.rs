//! Voice Capture Session
//!
//! State machine between the speech engine and the task form:
//! Idle -> Listening -> Processing -> ReviewReady, or Failed on an engine
//! error. Engine events come in through [`VoiceSession::handle`]; the
//! caller starts and stops the engine when a transition asks for it.

use leptos_speech::{PermissionState, RecognitionUpdate, SpeechError, SpeechEvent};

use crate::transcript::{parse_transcript, ParsedTranscript};

/// Voice errors as shown to the user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoiceError {
    #[error("Voice input is not supported in this browser. Please type your task instead.")]
    Unsupported,
    #[error("Microphone access was denied. Allow microphone access in your browser settings, or type your task instead.")]
    PermissionDenied,
    #[error("Could not recognize speech ({0}). Please try again.")]
    Recognition(String),
}

impl From<SpeechError> for VoiceError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::Unsupported => VoiceError::Unsupported,
            SpeechError::PermissionDenied => VoiceError::PermissionDenied,
            SpeechError::Recognition(reason) | SpeechError::Start(reason) => VoiceError::Recognition(reason),
        }
    }
}

impl VoiceError {
    /// Whether a new listening attempt makes sense
    pub fn is_retryable(&self) -> bool {
        matches!(self, VoiceError::Recognition(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Voice,
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VoiceState {
    Idle,
    Listening,
    Processing,
    ReviewReady(ParsedTranscript),
    /// Idle, with the error from the last attempt
    Failed(VoiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSession {
    state: VoiceState,
    mode: InputMode,
    supported: bool,
    permission: Option<PermissionState>,
    live_transcript: String,
    last_final: String,
    last_interim: String,
}

impl VoiceSession {
    /// A session without an engine starts in manual mode with the
    /// unsupported message showing.
    pub fn new(supported: bool) -> Self {
        let (state, mode) = if supported {
            (VoiceState::Idle, InputMode::Voice)
        } else {
            (VoiceState::Failed(VoiceError::Unsupported), InputMode::Manual)
        };
        Self {
            state,
            mode,
            supported,
            permission: None,
            live_transcript: String::new(),
            last_final: String::new(),
            last_interim: String::new(),
        }
    }

    pub fn state(&self) -> &VoiceState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn permission(&self) -> Option<PermissionState> {
        self.permission
    }

    pub fn live_transcript(&self) -> &str {
        &self.live_transcript
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, VoiceState::Listening)
    }

    pub fn set_permission(&mut self, permission: PermissionState) {
        self.permission = Some(permission);
    }

    fn clear_transcript(&mut self) {
        self.live_transcript.clear();
        self.last_final.clear();
        self.last_interim.clear();
    }

    /// Mic tapped. Returns true when the engine should be started.
    pub fn begin_listening(&mut self) -> bool {
        if !self.supported {
            self.state = VoiceState::Failed(VoiceError::Unsupported);
            return false;
        }
        match self.state {
            VoiceState::Listening | VoiceState::Processing => return false,
            _ => {}
        }
        self.clear_transcript();
        self.mode = InputMode::Voice;
        self.state = VoiceState::Listening;
        log::info!("[voice] Listening");
        true
    }

    /// Stop tapped. Returns true when the engine should be stopped.
    pub fn request_stop(&mut self) -> bool {
        if !self.is_listening() {
            return false;
        }
        self.state = VoiceState::Processing;
        log::info!("[voice] Processing");
        true
    }

    /// Feed an engine notification
    pub fn handle(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Result(update) => self.on_result(update),
            SpeechEvent::End => self.on_end(),
            SpeechEvent::Error(err) => self.on_error(err),
        }
    }

    fn on_result(&mut self, update: RecognitionUpdate) {
        if !matches!(self.state, VoiceState::Listening | VoiceState::Processing) {
            return;
        }
        self.live_transcript = update.combined();
        if !update.final_text.trim().is_empty() {
            self.last_final = update.final_text;
        }
        if !update.interim_text.trim().is_empty() {
            self.last_interim = self.live_transcript.clone();
        }
    }

    fn on_end(&mut self) {
        if !matches!(self.state, VoiceState::Listening | VoiceState::Processing) {
            return;
        }
        self.state = VoiceState::Processing;

        let transcript = if self.last_final.trim().is_empty() {
            &self.last_interim
        } else {
            &self.last_final
        };
        if transcript.trim().is_empty() {
            log::info!("[voice] Ended without speech");
            self.state = VoiceState::Idle;
            return;
        }

        let parsed = parse_transcript(&transcript.to_lowercase());
        log::info!(
            "[voice] Review ready (title={:?}, description={:?})",
            parsed.title,
            parsed.description
        );
        self.state = VoiceState::ReviewReady(parsed);
    }

    fn on_error(&mut self, err: SpeechError) {
        if !matches!(self.state, VoiceState::Listening | VoiceState::Processing) {
            return;
        }
        log::warn!("[voice] {}", err);
        if err == SpeechError::PermissionDenied {
            self.permission = Some(PermissionState::Denied);
        }
        self.state = VoiceState::Failed(err.into());
    }

    /// Take the reviewed result and return to idle
    pub fn accept(&mut self) -> Option<ParsedTranscript> {
        match std::mem::replace(&mut self.state, VoiceState::Idle) {
            VoiceState::ReviewReady(parsed) => {
                self.clear_transcript();
                Some(parsed)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Discard the transcript and listen again. Returns true when the
    /// engine should be started.
    pub fn retry(&mut self) -> bool {
        match &self.state {
            VoiceState::ReviewReady(_) => self.begin_listening(),
            VoiceState::Failed(err) if err.is_retryable() => self.begin_listening(),
            _ => false,
        }
    }

    /// Bypass voice and edit the draft directly. Returns true when a
    /// running engine should be stopped.
    pub fn switch_to_manual(&mut self) -> bool {
        let was_running = matches!(self.state, VoiceState::Listening | VoiceState::Processing);
        self.mode = InputMode::Manual;
        self.clear_transcript();
        if !matches!(self.state, VoiceState::Failed(VoiceError::Unsupported)) {
            self.state = VoiceState::Idle;
        }
        was_running
    }

    pub fn switch_to_voice(&mut self) {
        if self.supported {
            self.mode = InputMode::Voice;
            self.state = VoiceState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(final_text: &str, interim_text: &str) -> SpeechEvent {
        SpeechEvent::Result(RecognitionUpdate {
            final_text: final_text.to_string(),
            interim_text: interim_text.to_string(),
        })
    }

    fn listening() -> VoiceSession {
        let mut session = VoiceSession::new(true);
        assert!(session.begin_listening());
        session
    }

    fn error_of(session: &VoiceSession) -> Option<&VoiceError> {
        match session.state() {
            VoiceState::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn review(session: &VoiceSession) -> ParsedTranscript {
        match session.state() {
            VoiceState::ReviewReady(parsed) => parsed.clone(),
            other => panic!("expected review, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_forces_manual() {
        let mut session = VoiceSession::new(false);
        assert_eq!(session.mode(), InputMode::Manual);
        assert_eq!(error_of(&session), Some(&VoiceError::Unsupported));

        assert!(!session.begin_listening());
        session.switch_to_voice();
        assert_eq!(session.mode(), InputMode::Manual);
        assert_eq!(error_of(&session), Some(&VoiceError::Unsupported));
    }

    #[test]
    fn test_listen_stop_review() {
        let mut session = listening();
        assert!(session.is_listening());

        session.handle(update("", "title is fix"));
        assert_eq!(session.live_transcript(), "title is fix");
        assert!(session.is_listening());

        session.handle(update("Title is fix the bug.", ""));
        assert!(session.request_stop());
        assert_eq!(session.state(), &VoiceState::Processing);

        session.handle(SpeechEvent::End);
        assert_eq!(review(&session).title, "fix the bug");
    }

    #[test]
    fn test_natural_end_goes_to_review() {
        let mut session = listening();
        session.handle(update("update website design. make the homepage more modern", ""));
        session.handle(SpeechEvent::End);

        let parsed = review(&session);
        assert_eq!(parsed.title, "update website design");
        assert_eq!(parsed.description, "make the homepage more modern");
    }

    #[test]
    fn test_interim_fallback_when_no_final() {
        let mut session = listening();
        session.handle(update("", "buy milk"));
        session.handle(SpeechEvent::End);
        assert_eq!(review(&session).title, "buy milk");
    }

    #[test]
    fn test_last_final_wins_over_later_interim() {
        let mut session = listening();
        session.handle(update("call the bank", ""));
        session.handle(update("call the bank", "and the"));
        session.handle(SpeechEvent::End);
        assert_eq!(review(&session).title, "call the bank");
    }

    #[test]
    fn test_end_without_speech_returns_idle() {
        let mut session = listening();
        session.handle(SpeechEvent::End);
        assert_eq!(session.state(), &VoiceState::Idle);
        assert_eq!(error_of(&session), None);
    }

    #[test]
    fn test_permission_denied() {
        let mut session = listening();
        session.handle(SpeechEvent::Error(SpeechError::PermissionDenied));

        assert_eq!(error_of(&session), Some(&VoiceError::PermissionDenied));
        assert_eq!(session.permission(), Some(PermissionState::Denied));
        assert!(!session.retry());

        // Engine fires end after an error; the error stays visible
        session.handle(SpeechEvent::End);
        assert_eq!(error_of(&session), Some(&VoiceError::PermissionDenied));

        assert!(!session.switch_to_manual());
        assert_eq!(session.mode(), InputMode::Manual);
        assert_eq!(session.state(), &VoiceState::Idle);
    }

    #[test]
    fn test_generic_error_is_retryable() {
        let mut session = listening();
        session.handle(SpeechEvent::Error(SpeechError::Recognition("no-speech".to_string())));
        assert_eq!(error_of(&session), Some(&VoiceError::Recognition("no-speech".to_string())));

        assert!(session.retry());
        assert!(session.is_listening());
    }

    #[test]
    fn test_error_while_processing() {
        let mut session = listening();
        session.request_stop();
        session.handle(SpeechEvent::Error(SpeechError::Recognition("network".to_string())));
        assert!(error_of(&session).is_some());
    }

    #[test]
    fn test_accept_returns_parsed_and_resets() {
        let mut session = listening();
        session.handle(update("title is dentist. it is at noon", ""));
        session.handle(SpeechEvent::End);

        let parsed = session.accept().unwrap();
        assert_eq!(parsed.title, "dentist");
        assert_eq!(parsed.description, "at noon");
        assert_eq!(session.state(), &VoiceState::Idle);
        assert_eq!(session.live_transcript(), "");
        assert_eq!(session.accept(), None);
    }

    #[test]
    fn test_retry_discards_transcript() {
        let mut session = listening();
        session.handle(update("first attempt", ""));
        session.handle(SpeechEvent::End);

        assert!(session.retry());
        assert!(session.is_listening());
        assert_eq!(session.live_transcript(), "");

        session.handle(SpeechEvent::End);
        assert_eq!(session.state(), &VoiceState::Idle);
    }

    #[test]
    fn test_switch_to_manual_while_listening() {
        let mut session = listening();
        session.handle(update("", "half a sentence"));

        assert!(session.switch_to_manual());
        assert_eq!(session.mode(), InputMode::Manual);
        assert_eq!(session.state(), &VoiceState::Idle);

        // Late events from the stopped engine are ignored
        session.handle(update("half a sentence", ""));
        session.handle(SpeechEvent::End);
        assert_eq!(session.state(), &VoiceState::Idle);
        assert_eq!(session.live_transcript(), "");
    }

    #[test]
    fn test_results_ignored_when_idle() {
        let mut session = VoiceSession::new(true);
        session.handle(update("stray", ""));
        assert_eq!(session.live_transcript(), "");
    }

    #[test]
    fn test_double_start_and_stop() {
        let mut session = listening();
        assert!(!session.begin_listening());
        assert!(session.request_stop());
        assert!(!session.request_stop());
    }

    #[test]
    fn test_start_failure_reported() {
        let mut session = listening();
        session.handle(SpeechEvent::Error(SpeechError::Start("already started".to_string())));
        assert_eq!(
            error_of(&session),
            Some(&VoiceError::Recognition("already started".to_string()))
        );
    }
}
