use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Cut `text` so it occupies at most `max_width` terminal columns
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result
}

/// First `max_chars` characters followed by "...", whatever the length
pub fn head_with_ellipsis(text: &str, max_chars: usize) -> String {
    let mut result: String = text.chars().take(max_chars).collect();
    result.push_str(ELLIPSIS);
    result
}

pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

/// Truncate then pad, so the result is exactly `width` columns wide
/// (a wide character that would straddle the edge is replaced by padding)
pub fn fit_to_width(text: &str, width: usize) -> String {
    pad_to_width(&truncate_to_width(text, width), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello World!", 5), "Hello");
        assert_eq!(truncate_to_width("", 5), "");
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_head_with_ellipsis() {
        assert_eq!(head_with_ellipsis("short", 10), "short...");
        assert_eq!(head_with_ellipsis("abcdefghij", 10), "abcdefghij...");
        assert_eq!(head_with_ellipsis("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(head_with_ellipsis("日本語", 2), "日本...");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Hello", 10), "Hello     ");
        assert_eq!(pad_to_width("Hello World", 5), "Hello World");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("Hi", 4), "Hi  ");
        assert_eq!(fit_to_width("Hello World", 5), "Hello");
        assert_eq!(fit_to_width("日本語", 5).width(), 5);
    }
}
