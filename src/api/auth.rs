//! Session handling: login, register, token verification.
//!
//! The bearer token lives in a module-level variable and in localStorage, so
//! a reload can pick the session back up. There is no client-side expiry;
//! validity is probed against a protected endpoint.

use std::cell::RefCell;

use serde_json::json;

use super::{auth_url, decode_json, expect_ok, main_url, send};
use crate::models::{is_valid_worker_code, AuthResponse, RegisterOutcome};
use crate::utils::trace;

const TOKEN_KEY: &str = "shoe_warehouse_token";

thread_local! {
    static TOKEN: RefCell<Option<String>> = RefCell::new(None);
}

/// Current bearer token: the in-memory copy, falling back to localStorage
/// (and promoting what it finds).
pub fn token() -> Option<String> {
    let cached = TOKEN.with(|t| t.borrow().clone());
    if cached.is_some() {
        return cached;
    }
    let stored = stored_token()?;
    TOKEN.with(|t| *t.borrow_mut() = Some(stored.clone()));
    Some(stored)
}

/// Token persisted from an earlier session, if any.
pub fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn remember(token: &str) {
    TOKEN.with(|t| *t.borrow_mut() = Some(token.to_string()));
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

/// Drop the session from memory and storage.
pub fn logout() {
    TOKEN.with(|t| *t.borrow_mut() = None);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    trace::info("auth", "logged out");
}

pub async fn login(worker_code: &str, password: &str) -> Result<AuthResponse, String> {
    let body = json!({ "workerCode": worker_code, "password": password });
    let resp = send("POST", &auth_url("login"), Some(body.to_string()), None).await?;
    let resp = expect_ok(resp).await?;
    let auth: AuthResponse = decode_json(resp).await?;

    remember(&auth.token);
    trace::info("auth", &format!("worker {} logged in", worker_code));
    Ok(auth)
}

/// Register a new worker. Never errors out of band: every outcome is a
/// message the register view can show directly.
pub async fn register(worker_code: &str, password: &str) -> RegisterOutcome {
    if !is_valid_worker_code(worker_code) {
        return RegisterOutcome {
            success: false,
            message: "קוד עובד חייב להתחיל ב-52500".to_string(),
        };
    }

    let body = json!({ "workerCode": worker_code, "password": password });
    let resp = match send("POST", &auth_url("register"), Some(body.to_string()), None).await {
        Ok(resp) => resp,
        Err(e) => {
            trace::error("auth", &format!("register failed: {}", e));
            return RegisterOutcome {
                success: false,
                message: "אירעה שגיאה בהרשמה".to_string(),
            };
        }
    };

    if resp.ok() {
        trace::info("auth", &format!("worker {} registered", worker_code));
        return RegisterOutcome {
            success: true,
            message: "הרשמה בוצעה בהצלחה".to_string(),
        };
    }

    // Worker code already taken
    if resp.status() == 409 {
        return RegisterOutcome {
            success: false,
            message: "קוד עובד כבר קיים במערכת".to_string(),
        };
    }

    let detail = expect_ok(resp).await.err().unwrap_or_default();
    trace::error("auth", &format!("register failed: {}", detail));
    RegisterOutcome {
        success: false,
        message: "אירעה שגיאה בהרשמה".to_string(),
    }
}

/// A token is valid iff a protected endpoint accepts it.
pub async fn verify_token(token: &str) -> bool {
    match send("GET", &main_url("getAllShoes"), None, Some(token)).await {
        Ok(resp) if resp.ok() => {
            remember(token);
            true
        }
        _ => {
            trace::warn("auth", "stored token rejected");
            false
        }
    }
}
