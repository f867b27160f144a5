//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit a string into `width` terminal columns, ending with `…` when cut.
///
/// Uses display width rather than byte length so CJK and emoji count as
/// the columns they actually occupy.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let target = width - 1;
    let mut current = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > target {
            break;
        }
        current += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Display width of the prefix of `s` ending at byte offset `end`
pub fn width_before(s: &str, end: usize) -> usize {
    s.get(..end).map_or(0, |prefix| prefix.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each character is two columns wide
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_width_before() {
        assert_eq!(width_before("日本", 3), 2);
        assert_eq!(width_before("abc", 2), 2);
        // Not a char boundary
        assert_eq!(width_before("日本", 1), 0);
    }
}
