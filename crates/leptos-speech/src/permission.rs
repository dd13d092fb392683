//! Microphone Permission Query

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "permissions"], js_name = query, catch)]
    async fn query_permission(descriptor: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct PermissionDescriptor<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct PermissionStatusPayload {
    state: String,
}

/// Microphone permission as reported by the Permissions API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    pub fn parse(state: &str) -> Option<Self> {
        match state {
            "granted" => Some(PermissionState::Granted),
            "denied" => Some(PermissionState::Denied),
            "prompt" => Some(PermissionState::Prompt),
            _ => None,
        }
    }
}

/// Ask the browser for the current microphone permission.
///
/// Returns `None` when the Permissions API is missing or does not know the
/// "microphone" permission name (Firefox, older Safari).
pub async fn query_microphone_permission() -> Option<PermissionState> {
    let descriptor = serde_wasm_bindgen::to_value(&PermissionDescriptor { name: "microphone" }).ok()?;
    let status = match query_permission(descriptor).await {
        Ok(status) => status,
        Err(e) => {
            log::debug!("[speech] Permission query unavailable: {:?}", e);
            return None;
        }
    };
    let payload: PermissionStatusPayload = serde_wasm_bindgen::from_value(status).ok()?;
    PermissionState::parse(&payload.state)
}
