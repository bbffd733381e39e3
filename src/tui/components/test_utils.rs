//! Test utilities for dashboard component tests.

/// Strips ANSI escape codes from a string.
///
/// Lets tests assert on rendered text without colour codes getting in the
/// way.
///
/// # Example
///
/// ```
/// use reviewlens::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[32mPositive\x1b[0m";
/// assert_eq!(strip_ansi_codes(coloured), "Positive");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
