//! REST client plumbing: request building, bearer attachment, error
//! translation. Every endpoint function returns `Result<_, String>`; the
//! views turn those into localized messages.

pub mod auth;
pub mod shoes;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Production server. Overridable at build time via SHOE_API_URL (see build.rs).
const DEFAULT_API_BASE: &str = "https://nikewarehouseshoemanager.onrender.com";

pub fn api_base() -> &'static str {
    option_env!("SHOE_API_URL").unwrap_or(DEFAULT_API_BASE)
}

pub(crate) fn main_url(path: &str) -> String {
    format!("{}/main/{}", api_base(), path)
}

pub(crate) fn auth_url(path: &str) -> String {
    format!("{}/auth/{}", api_base(), path)
}

/// Error body shape the server uses for non-2xx responses.
#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) async fn send(
    method: &str,
    url: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("failed to build request: {:?}", e))?;

    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("failed to set header: {:?}", e))?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|e| format!("failed to set header: {:?}", e))?;
    }

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;

    resp_value
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

/// Turn a non-2xx response into an error, pulling the server's `message`
/// out of the body when there is one.
pub(crate) async fn expect_ok(resp: Response) -> Result<Response, String> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    if let Ok(promise) = resp.json() {
        if let Ok(json) = JsFuture::from(promise).await {
            if let Ok(body) = serde_wasm_bindgen::from_value::<ApiMessage>(json) {
                if let Some(message) = body.message {
                    return Err(format!("HTTP {}: {}", status, message));
                }
            }
        }
    }
    Err(format!("HTTP {}", status))
}

pub(crate) async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let json = JsFuture::from(resp.json().map_err(|e| format!("json() failed: {:?}", e))?)
        .await
        .map_err(|e| format!("reading body failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("decoding body failed: {:?}", e))
}
