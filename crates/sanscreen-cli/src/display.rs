//! Shared terminal rendering helpers: timestamps, optional values, and the
//! two-column field layout used by the card views.

use chrono::{DateTime, Utc};

/// Compact local-agnostic timestamp form used in tables.
pub fn fmt_time(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Render an optional value, `-` when absent.
pub fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Print a card heading.
pub fn heading(title: &str) {
    println!("=== {title} ===");
}

/// Print one labelled field of a card.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<16} {value}");
}

/// Pull a display string out of an opaque JSON record, `-` when the key is
/// missing or null. Used for backend-shaped sanction rows the client does
/// not model.
pub fn json_field(record: &serde_json::Value, key: &str) -> String {
    match record.get(key) {
        Some(serde_json::Value::Null) | None => "-".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
