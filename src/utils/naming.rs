use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref NOT_FILENAME_SAFE: Regex = Regex::new(r"[^\w.\-]").unwrap();
}

/// Replace every occurrence of `target` in `s` with `replacement`.
///
/// An empty `target` matches nothing.
pub fn str_replace(s: &str, target: &str, replacement: &str) -> String {
    if target.is_empty() {
        return s.to_string();
    }
    s.replace(target, replacement)
}

/// Turn arbitrary text into a lowercase, shell-friendly filename.
///
/// Whitespace runs become a single `_`, anything other than word characters,
/// `.` and `-` is dropped, and leading or trailing `.`/`_` are trimmed.
/// Never returns an empty string.
pub fn to_filename(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let joined = WHITESPACE_RUN.replace_all(&lowered, "_");
    let safe = NOT_FILENAME_SAFE.replace_all(&joined, "");
    let trimmed = safe.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Clean a name for use in filenames, keeping its case and spacing
pub fn clean_name(name: &str) -> String {
    const INVALID: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    let cleaned: String = name
        .chars()
        .map(|c| if INVALID.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    // Remove leading/trailing spaces and dots
    let cleaned = cleaned.trim().trim_matches('.').trim();

    if cleaned.is_empty() {
        "Unknown".to_string()
    } else {
        cleaned.to_string()
    }
}
