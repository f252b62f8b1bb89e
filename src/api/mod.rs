//! API Call Wrappers
//!
//! Frontend bindings to the backend REST API, organized by domain.

mod pods;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use pods::*;

fn js_err(e: JsValue) -> String {
    format!("{e:?}")
}

/// Issue a JSON request and hand back the status code plus the parsed body.
///
/// Transport failures become `Err`; HTTP error statuses are left to the
/// caller, which knows the operation's expected status and fallback message.
async fn request(method: &str, url: &str, body: Option<String>) -> Result<(u16, JsValue), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;

    let status = response.status();
    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    Ok((status, json))
}

/// Pull the server's error message out of a failure body.
fn error_message(body: JsValue, fallback: &str) -> String {
    serde_wasm_bindgen::from_value::<crate::models::ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| fallback.to_string())
}
