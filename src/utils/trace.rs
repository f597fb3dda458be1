//! In-app trace log.
//!
//! Every operation worth remembering (auth events, API failures, closing
//! verdicts) is echoed to the console and appended to a bounded ring buffer
//! in localStorage, so a session can be reconstructed after the fact.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 300;
const STORAGE_KEY: &str = "shoe_warehouse_trace";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,    // "info", "warn", "error"
    pub category: String, // "auth", "api", "closing", "ui"
    pub message: String,
}

pub fn info(category: &str, message: &str) {
    log("info", category, message);
}

pub fn warn(category: &str, message: &str) {
    log("warn", category, message);
}

pub fn error(category: &str, message: &str) {
    log("error", category, message);
}

fn log(level: &str, category: &str, message: &str) {
    let line = format!("[{}] {}", category, message);
    match level {
        "error" => web_sys::console::error_1(&line.clone().into()),
        "warn" => web_sys::console::warn_1(&line.clone().into()),
        _ => web_sys::console::log_1(&line.clone().into()),
    }

    let entry = LogEntry {
        timestamp: js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default(),
        level: level.to_string(),
        category: category.to_string(),
        message: message.to_string(),
    };

    let mut logs = load();
    push_trimmed(&mut logs, entry);
    save(&logs);
}

/// Append keeping the buffer bounded.
fn push_trimmed(logs: &mut VecDeque<LogEntry>, entry: LogEntry) {
    if logs.len() >= MAX_LOG_ENTRIES {
        logs.pop_front();
    }
    logs.push_back(entry);
}

fn load() -> VecDeque<LogEntry> {
    let json = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    json.and_then(|j| serde_json::from_str(&j).ok())
        .unwrap_or_default()
}

fn save(logs: &VecDeque<LogEntry>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let json = serde_json::to_string(logs).unwrap_or_else(|_| "[]".to_string());
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(n: usize) -> LogEntry {
        LogEntry {
            timestamp: String::new(),
            level: "info".to_string(),
            category: "test".to_string(),
            message: format!("entry {}", n),
        }
    }

    #[test]
    fn ring_buffer_never_exceeds_bound() {
        let mut logs = VecDeque::new();
        for n in 0..MAX_LOG_ENTRIES + 50 {
            push_trimmed(&mut logs, make_entry(n));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        // Oldest entries were dropped first
        assert_eq!(logs.front().unwrap().message, "entry 50");
        assert_eq!(
            logs.back().unwrap().message,
            format!("entry {}", MAX_LOG_ENTRIES + 49)
        );
    }
}
