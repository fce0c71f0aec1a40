// src/formatting.rs

use chrono::{DateTime, Duration, Utc};

/// How long after release a shoe still counts as new.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Format an amount in cents as dollars with thousands separators: $1,234.56
pub fn format_price(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let remainder = cents % 100;

    let mut with_commas = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }

    format!("${with_commas}.{remainder:02}")
}

/// "1 Color", "0 Colors", "3 Colors".
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// True when `timestamp` is no older than `window` relative to `now`.
///
/// The edge is inclusive: something exactly `window` old is still recent.
/// Future timestamps are recent as well.
pub fn is_recent(timestamp: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now.signed_duration_since(timestamp) <= window
}

pub fn recency_window() -> Duration {
    Duration::days(RECENCY_WINDOW_DAYS)
}
