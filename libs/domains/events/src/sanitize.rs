//! HTML escaping for user-provided text.
//!
//! Event titles and descriptions are free-form strings. They are stored
//! verbatim and escaped at the response boundary, so clients can embed the
//! payload in HTML without further treatment.

/// Escape HTML-significant characters in `input`.
///
/// Escapes `&`, `<`, `>`, `"`, `'` and `/`. Everything else passes through
/// unchanged.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_html("Team standup 2024"), "Team standup 2024");
    }

    #[test]
    fn test_script_tag_is_neutralized() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn test_ampersand_is_escaped_first() {
        // Pre-escaped input gets escaped again rather than double-decoded
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#x27;c&#x27;");
    }
}
