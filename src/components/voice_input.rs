//! Voice Input Component
//!
//! Mic button, live transcript and review panel shown inside the task
//! modal. Accepted results are handed to the parent through `on_accept`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_speech::{BrowserSpeech, PermissionState, SpeechEngine, SpeechEvent};

use crate::config::AppConfig;
use crate::transcript::ParsedTranscript;
use crate::voice::{InputMode, VoiceError, VoiceSession, VoiceState};

/// Voice dictation panel
#[component]
pub fn VoiceInput(#[prop(into)] on_accept: Callback<ParsedTranscript>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let recognition = StoredValue::new(config.recognition);
    let session = RwSignal::new(VoiceSession::new(leptos_speech::is_supported()));
    // Created on first use; dropping it aborts any running recognition
    let engine = StoredValue::new_local(None::<BrowserSpeech>);

    // Pre-seed the permission hint
    spawn_local(async move {
        if let Some(permission) = leptos_speech::query_microphone_permission().await {
            session.try_update(|s| s.set_permission(permission));
        }
    });

    let start_engine = move || {
        let created = engine.with_value(|e| e.is_some());
        if !created {
            let on_event = move |event: SpeechEvent| {
                session.try_update(|s| s.handle(event));
            };
            match recognition.with_value(|options| BrowserSpeech::new(options, on_event)) {
                Ok(speech) => engine.set_value(Some(speech)),
                Err(err) => {
                    session.update(|s| s.handle(SpeechEvent::Error(err)));
                    return;
                }
            }
        }
        let started = engine.with_value(|e| e.as_ref().map(|speech| speech.start()));
        if let Some(Err(err)) = started {
            session.update(|s| s.handle(SpeechEvent::Error(err)));
        }
    };

    let stop_engine = move || {
        engine.with_value(|e| {
            if let Some(speech) = e {
                speech.stop();
            }
        });
    };

    let on_mic = move |_| {
        let should_start = session.try_update(|s| s.begin_listening()).unwrap_or(false);
        if should_start {
            start_engine();
        }
    };

    let on_stop = move |_| {
        let should_stop = session.try_update(|s| s.request_stop()).unwrap_or(false);
        if should_stop {
            stop_engine();
        }
    };

    let on_retry = move |_| {
        let should_start = session.try_update(|s| s.retry()).unwrap_or(false);
        if should_start {
            start_engine();
        }
    };

    let on_use_result = move |_| {
        if let Some(parsed) = session.try_update(|s| s.accept()).flatten() {
            on_accept.run(parsed);
        }
    };

    let on_manual = move |_| {
        let should_stop = session.try_update(|s| s.switch_to_manual()).unwrap_or(false);
        if should_stop {
            stop_engine();
        }
    };

    let is_manual = move || session.with(|s| s.mode() == InputMode::Manual);

    view! {
        <div class="voice-input">
            {move || {
                if is_manual() {
                    let supported = session.with(|s| s.is_supported());
                    view! {
                        <div class="voice-manual-row">
                            <Show when=move || !supported>
                                <p class="voice-message">{VoiceError::Unsupported.to_string()}</p>
                            </Show>
                            <Show when=move || supported>
                                <button
                                    type="button"
                                    class="voice-switch-btn"
                                    on:click=move |_| session.update(|s| s.switch_to_voice())
                                >
                                    "🎤 Use voice"
                                </button>
                            </Show>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="voice-panel">
                            {move || session.with(|s| match s.state() {
                                VoiceState::Idle => view! {
                                    <div class="voice-row">
                                        <button type="button" class="mic-btn" on:click=on_mic>"🎤 Speak"</button>
                                        <button type="button" class="link-btn" on:click=on_manual>"Type instead"</button>
                                        {(s.permission() == Some(PermissionState::Denied)).then(|| view! {
                                            <p class="voice-hint">{VoiceError::PermissionDenied.to_string()}</p>
                                        })}
                                    </div>
                                }.into_any(),
                                VoiceState::Listening => view! {
                                    <div class="voice-row listening">
                                        <button type="button" class="mic-btn active" on:click=on_stop>"⏹ Stop"</button>
                                        <span class="live-transcript">
                                            {if s.live_transcript().is_empty() {
                                                "Listening...".to_string()
                                            } else {
                                                s.live_transcript().to_string()
                                            }}
                                        </span>
                                    </div>
                                }.into_any(),
                                VoiceState::Processing => view! {
                                    <div class="voice-row">
                                        <span class="voice-status">"Processing..."</span>
                                    </div>
                                }.into_any(),
                                VoiceState::ReviewReady(parsed) => {
                                    let title = if parsed.has_title() { parsed.title.clone() } else { "(not detected)".to_string() };
                                    let description = if parsed.has_description() { parsed.description.clone() } else { "(none)".to_string() };
                                    view! {
                                        <div class="voice-review">
                                            <p><span class="review-label">"Title: "</span>{title}</p>
                                            <p><span class="review-label">"Description: "</span>{description}</p>
                                            <div class="voice-row">
                                                <button type="button" class="primary-btn" on:click=on_use_result>"Use this"</button>
                                                <button type="button" class="secondary-btn" on:click=on_retry>"Try again"</button>
                                                <button type="button" class="link-btn" on:click=on_manual>"Type instead"</button>
                                            </div>
                                        </div>
                                    }.into_any()
                                }
                                VoiceState::Failed(err) => {
                                    let retryable = err.is_retryable();
                                    let denied = *err == VoiceError::PermissionDenied;
                                    view! {
                                        <div class="voice-error">
                                            <p class="voice-message">{err.to_string()}</p>
                                            <div class="voice-row">
                                                {retryable.then(|| view! {
                                                    <button type="button" class="secondary-btn" on:click=on_retry>"Try again"</button>
                                                })}
                                                {(!retryable && !denied).then(|| view! {
                                                    <button type="button" class="mic-btn" on:click=on_mic>"🎤 Speak"</button>
                                                })}
                                                <button type="button" class="link-btn" on:click=on_manual>"Type instead"</button>
                                            </div>
                                        </div>
                                    }.into_any()
                                }
                            })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
