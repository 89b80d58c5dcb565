/*
 * uri.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! URI recognition and escaping.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in link targets: whitespace and characters that are
/// not allowed unencoded in a URI. Non-ASCII text is always encoded.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Schemes recognized as absolute URIs.
const SCHEMES: &[&str] = &[
    "coap", "doi", "javascript", "aaa", "aaas", "about", "acap", "cap", "cid", "crid", "data",
    "dav", "dict", "dns", "file", "ftp", "geo", "go", "gopher", "h323", "http", "https", "iax",
    "icap", "im", "imap", "info", "ipp", "iris", "ldap", "mailto", "mid", "msrp", "msrps", "mtqp",
    "mupdate", "news", "nfs", "nntp", "opaquelocktoken", "pop", "pres", "rtsp", "service",
    "session", "shttp", "sieve", "sip", "sips", "sms", "snmp", "tag", "tel", "telnet", "tftp",
    "tip", "tn3270", "urn", "vemmi", "ws", "wss", "xmpp", "irc", "irc6", "ircs", "magnet", "ssh",
    "svn", "git",
];

/// Percent-encode the characters of `s` that may not appear in a URI.
pub fn escape_uri(s: &str) -> String {
    utf8_percent_encode(s, URI_ESCAPE).to_string()
}

/// Decode percent escapes. Invalid UTF-8 sequences are replaced.
pub fn unescape_uri(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// True if `s` is an absolute URI with a known scheme.
pub fn is_uri(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed
        && !rest.is_empty()
        && !s.chars().any(char::is_whitespace)
        && SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_uri() {
        assert!(is_uri("http://example.com"));
        assert!(is_uri("mailto:me@example.com"));
        assert!(is_uri("HTTPS://example.com/a?b=c"));
        assert!(!is_uri("Main_Page"));
        assert!(!is_uri("/help"));
        assert!(!is_uri("foo:bar"));
        assert!(!is_uri("http:"));
        assert!(!is_uri("http://a b"));
    }

    #[test]
    fn test_escape_and_unescape() {
        assert_eq!(escape_uri("http://e.com/a b"), "http://e.com/a%20b");
        assert_eq!(escape_uri("http://e.com/ü"), "http://e.com/%C3%BC");
        assert_eq!(escape_uri("http://e.com/?q=1&r=2"), "http://e.com/?q=1&r=2");
        assert_eq!(unescape_uri("a%20b%C3%BC"), "a bü");
    }
}
