//! Width helpers for lines that may carry ANSI styling.

use unicode_width::UnicodeWidthChar;

/// SGR sequence that resets all styling.
pub(crate) const RESET: &str = "\x1b[0m";

/// Returns the number of terminal columns `line` occupies, ignoring ANSI
/// escape sequences.
pub(crate) fn visible_width(line: &str) -> usize {
    let mut in_escape = false;
    line.chars().fold(0_usize, |width, ch| {
        if in_escape {
            in_escape = !ch.is_ascii_alphabetic();
            return width;
        }
        if ch == '\x1b' {
            in_escape = true;
            return width;
        }
        width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0))
    })
}

/// Pads or truncates `line` to exactly `width` visible columns.
///
/// Escape sequences are copied through untouched. A styled line always ends
/// with a reset so truncation cannot leak colour into following cells.
pub(crate) fn fit_to_width(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len().saturating_add(width));
    let mut used = 0_usize;
    let mut in_escape = false;
    let mut styled = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            output.push(ch);
            in_escape = true;
            styled = true;
            continue;
        }
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(ch_width);
    }

    if styled {
        output.push_str(RESET);
    }
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}

/// Lays out `left` and `right` on one line, pushing `right` to the far edge.
///
/// Falls back to a single separating space when the line is too narrow.
pub(crate) fn spread(left: &str, right: &str, width: usize) -> String {
    let gap = width
        .saturating_sub(visible_width(left))
        .saturating_sub(visible_width(right))
        .max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("plain", 5)]
    #[case("\x1b[32mgreen\x1b[0m", 5)]
    #[case("★ 4.2", 5)]
    #[case("", 0)]
    fn visible_width_ignores_escapes(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(visible_width(line), expected);
    }

    #[test]
    fn fit_pads_short_lines() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_long_lines() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn fit_resets_truncated_styling() {
        let fitted = fit_to_width("\x1b[31mabcdef", 2);
        assert_eq!(fitted, "\x1b[31mab\x1b[0m");
    }

    #[test]
    fn spread_aligns_right_text() {
        assert_eq!(spread("a", "b", 5), "a   b");
        assert_eq!(spread("abc", "def", 4), "abc def");
    }
}
