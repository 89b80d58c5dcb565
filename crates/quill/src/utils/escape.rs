/*
 * escape.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Escaping of literal text for the output dialects.

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            other => result.push(other),
        }
    }
    result
}

/// Backslash-escape reStructuredText inline markup characters.
///
/// Escapes `` ` ``, `\`, `|`, `*` and `_`.
pub fn escape_rst(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 10);
    for c in s.chars() {
        if matches!(c, '`' | '\\' | '|' | '*' | '_') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
        assert_eq!(escape_xml("it's"), "it's");
    }

    #[test]
    fn test_escape_rst() {
        assert_eq!(escape_rst("*bold* and `code`"), "\\*bold\\* and \\`code\\`");
        assert_eq!(escape_rst("a_b|c\\d"), "a\\_b\\|c\\\\d");
        assert_eq!(escape_rst("plain"), "plain");
    }
}
