// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::TIMESTAMP_PATTERN;

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// A standalone jersey number: ASCII digits only, fits u32.
pub fn parse_bare_number(line: &str) -> Option<u32> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Goals column. Signed, tolerant of a leading '+'.
pub fn parse_goals(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

/// Line starts with `HH:MM`.
pub fn is_timestamp(line: &str) -> bool {
    TIMESTAMP.is_match(line)
}

/// Last whitespace-delimited token, or "" for a blank line.
pub fn last_token(line: &str) -> &str {
    line.split_whitespace().last().unwrap_or("")
}
