use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

pub const FALLBACK_ERROR: &str = "Failed to send message. Please try again later.";
pub const TRANSPORT_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Maps an HTTP status and (possibly unparseable) body to the form outcome.
pub fn interpret_response(ok: bool, body: Option<ContactResponse>) -> Result<(), String> {
    match body {
        Some(ContactResponse { success: true, .. }) if ok => Ok(()),
        Some(ContactResponse { error: Some(error), .. }) if !error.trim().is_empty() => Err(error),
        _ => Err(FALLBACK_ERROR.to_string()),
    }
}

/// Posts the form to the relay endpoint. One attempt, no retry.
pub async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    let pending = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(request)
        .map_err(|e| {
            gloo_console::error!("Failed to encode contact request:", e.to_string());
            TRANSPORT_ERROR.to_string()
        })?;

    let response = pending.send().await.map_err(|e| {
        gloo_console::error!("Contact request failed:", e.to_string());
        TRANSPORT_ERROR.to_string()
    })?;

    let ok = response.ok();
    let body = response.json::<ContactResponse>().await.ok();
    interpret_response(ok, body)
}
