//! Browser SpeechRecognition binding
//!
//! Chrome and Safari still only expose the `webkit` prefixed constructor,
//! so the constructor is looked up by name on `window`.

use std::rc::Rc;

use js_sys::Reflect;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{RecognitionOptions, RecognitionUpdate, SpeechEngine, SpeechError, SpeechEvent};

const CONSTRUCTOR_NAMES: &[&str] = &["SpeechRecognition", "webkitSpeechRecognition"];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    type SpeechRecognition;

    #[wasm_bindgen(method, setter = continuous)]
    fn set_continuous(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &SpeechRecognition, value: bool);

    #[wasm_bindgen(method, setter = lang)]
    fn set_lang(this: &SpeechRecognition, value: &str);

    #[wasm_bindgen(method, setter = onresult)]
    fn set_onresult(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onerror)]
    fn set_onerror(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, setter = onend)]
    fn set_onend(this: &SpeechRecognition, handler: Option<&js_sys::Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &SpeechRecognition) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn stop(this: &SpeechRecognition);

    #[wasm_bindgen(method)]
    fn abort(this: &SpeechRecognition);
}

/// Fields read from a `SpeechRecognitionErrorEvent`
#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
    message: Option<String>,
}

fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    CONSTRUCTOR_NAMES.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|ctor| ctor.is_function())
            .map(|ctor| ctor.unchecked_into::<js_sys::Function>())
    })
}

/// Whether the browser exposes a speech recognition constructor
pub fn is_supported() -> bool {
    recognition_constructor().is_some()
}

/// `navigator.language`, if the browser reports one
pub fn default_language() -> Option<String> {
    web_sys::window()?
        .navigator()
        .language()
        .filter(|lang| !lang.is_empty())
}

/// Rebuild the accumulated transcript from a `SpeechRecognitionEvent`.
///
/// Continuous sessions keep every result in `event.results`, so reading the
/// whole list each time gives the full transcript so far.
fn read_update(event: &JsValue) -> RecognitionUpdate {
    let mut update = RecognitionUpdate::default();
    let Ok(results) = Reflect::get(event, &JsValue::from_str("results")) else {
        return update;
    };
    let length = Reflect::get(&results, &JsValue::from_str("length"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32;

    for index in 0..length {
        let Ok(result) = Reflect::get_u32(&results, index) else {
            continue;
        };
        let is_final = Reflect::get(&result, &JsValue::from_str("isFinal"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        let transcript = Reflect::get_u32(&result, 0)
            .ok()
            .and_then(|alternative| Reflect::get(&alternative, &JsValue::from_str("transcript")).ok())
            .and_then(|value| value.as_string())
            .unwrap_or_default();

        if is_final {
            update.push_final(&transcript);
        } else {
            update.push_interim(&transcript);
        }
    }
    update
}

fn read_error(event: JsValue) -> SpeechError {
    match serde_wasm_bindgen::from_value::<ErrorPayload>(event) {
        Ok(payload) => {
            log::warn!(
                "[speech] Recognition error '{}': {}",
                payload.error,
                payload.message.as_deref().unwrap_or("")
            );
            SpeechError::from_code(&payload.error)
        }
        Err(e) => SpeechError::Recognition(e.to_string()),
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Speech engine backed by the browser's `SpeechRecognition`
///
/// The event closures live as long as this value; dropping it detaches
/// them and aborts any running session.
pub struct BrowserSpeech {
    recognition: SpeechRecognition,
    _on_result: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut()>,
}

impl BrowserSpeech {
    pub fn new<F>(options: &RecognitionOptions, on_event: F) -> Result<Self, SpeechError>
    where
        F: Fn(SpeechEvent) + 'static,
    {
        let ctor = recognition_constructor().ok_or(SpeechError::Unsupported)?;
        let recognition = Reflect::construct(&ctor, &js_sys::Array::new())
            .map_err(|e| SpeechError::Start(describe(&e)))?
            .unchecked_into::<SpeechRecognition>();

        recognition.set_continuous(options.continuous);
        recognition.set_interim_results(options.interim_results);
        recognition.set_lang(&options.lang);

        let on_event: Rc<dyn Fn(SpeechEvent)> = Rc::new(on_event);

        let emit = on_event.clone();
        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            emit(SpeechEvent::Result(read_update(&event)));
        });

        let emit = on_event.clone();
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            emit(SpeechEvent::Error(read_error(event)));
        });

        let emit = on_event;
        let on_end = Closure::<dyn FnMut()>::new(move || {
            emit(SpeechEvent::End);
        });

        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

        log::debug!("[speech] Engine ready (lang={})", options.lang);

        Ok(Self {
            recognition,
            _on_result: on_result,
            _on_error: on_error,
            _on_end: on_end,
        })
    }
}

impl SpeechEngine for BrowserSpeech {
    fn start(&self) -> Result<(), SpeechError> {
        self.recognition
            .start()
            .map_err(|e| SpeechError::Start(describe(&e)))
    }

    fn stop(&self) {
        self.recognition.stop();
    }
}

impl Drop for BrowserSpeech {
    fn drop(&mut self) {
        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.recognition.abort();
    }
}
