//! Request path percent-decoding
//!
//! Decodes `%XX` escapes in URI paths. Only paths, never query strings, so
//! `+` stays a literal plus.

/// Decode percent-escapes in a request path.
///
/// Returns `None` when an escape is truncated, uses non-hex digits, or the
/// decoded bytes are not valid UTF-8.
pub fn decode(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_value(*bytes.get(i + 1)?)?;
            let lo = hex_value(*bytes.get(i + 2)?)?;
            out.push(hi << 4 | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_passes_through() {
        assert_eq!(decode("/index.html").as_deref(), Some("/index.html"));
    }

    #[test]
    fn test_space_escape() {
        assert_eq!(
            decode("/hello%20world.txt").as_deref(),
            Some("/hello world.txt")
        );
    }

    #[test]
    fn test_utf8_escape() {
        // "é" as %C3%A9
        assert_eq!(decode("/caf%C3%A9.html").as_deref(), Some("/café.html"));
    }

    #[test]
    fn test_plus_is_literal() {
        assert_eq!(decode("/a+b.txt").as_deref(), Some("/a+b.txt"));
    }

    #[test]
    fn test_malformed_escapes_rejected() {
        assert!(decode("/bad%2").is_none());
        assert!(decode("/bad%zz").is_none());
        assert!(decode("/bad%").is_none());
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(decode("/%ff%fe").is_none());
    }
}
