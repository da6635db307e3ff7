//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::collections::HashMap;
use std::sync::OnceLock;
use chrono::{DateTime, Utc, Duration};
use rand::Rng;
use regex::Regex;

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated user ids
pub const ID_LENGTH: usize = 9;

/// Generate a random lowercase base-36 identifier
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();

    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..ID_CHARSET.len());
            ID_CHARSET[idx] as char
        })
        .collect()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Format a timestamp relative to `now`
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    if diff < Duration::minutes(1) {
        "just now".to_string()
    } else if diff < Duration::hours(1) {
        format!("{} minutes ago", diff.num_minutes())
    } else if diff < Duration::days(1) {
        format!("{} hours ago", diff.num_hours())
    } else if diff < Duration::weeks(1) {
        format!("{} days ago", diff.num_days())
    } else {
        format_timestamp(timestamp)
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a URL query string (`a=1&b=two%20words`) into decoded pairs
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();

    for part in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        let decode = |raw: &str| {
            let spaced = raw.replace('+', " ");
            urlencoding::decode(&spaced)
                .map(|s| s.into_owned())
                .unwrap_or(spaced)
        };
        pairs.insert(decode(key), decode(value));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("teacher@lms.com"));
        assert!(is_valid_email("first.last+tag@school.edu.au"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@lms.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-CALL-NOW"));
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2 days ago");
        assert_eq!(
            format_relative_time(now - Duration::weeks(3), now),
            "2024-01-04 12:00 UTC"
        );
    }

    #[test]
    fn test_parse_query_decodes_values() {
        let pairs = parse_query("subject=Computer%20Science&level=beginner&q=data+structures");
        assert_eq!(pairs.get("subject").map(String::as_str), Some("Computer Science"));
        assert_eq!(pairs.get("level").map(String::as_str), Some("beginner"));
        assert_eq!(pairs.get("q").map(String::as_str), Some("data structures"));
        assert!(parse_query("").is_empty());
    }
}
