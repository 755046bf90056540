//! Percent-encoding for expanded values

/// `gen-delims` and `sub-delims` from RFC 3986
fn is_reserved(c: char) -> bool {
    matches!(
        c,
        ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+'
            | ',' | ';' | '='
    )
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn is_pct_triplet(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[0] == b'%' && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}

/// Append `value`, keeping only unreserved characters as-is
pub(crate) fn push_unreserved(out: &mut String, value: &str) {
    out.push_str(&urlencoding::encode(value));
}

/// Append `value`, keeping unreserved and reserved characters as well as
/// existing pct-encoded triplets
pub(crate) fn push_reserved(out: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut chars = value.char_indices();
    let mut buf = [0u8; 4];

    while let Some((i, c)) = chars.next() {
        if c == '%' && is_pct_triplet(&bytes[i..]) {
            out.push_str(&value[i..i + 3]);
            chars.nth(1);
        } else if is_unreserved(c) || is_reserved(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
}

/// Append `value` using the rule for the given operator
pub(crate) fn push_encoded(out: &mut String, value: &str, allow_reserved: bool) {
    if allow_reserved {
        push_reserved(out, value);
    } else {
        push_unreserved(out, value);
    }
}

/// First `max` characters of `value`
pub(crate) fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserved(value: &str) -> String {
        let mut out = String::new();
        push_reserved(&mut out, value);
        out
    }

    fn unreserved(value: &str) -> String {
        let mut out = String::new();
        push_unreserved(&mut out, value);
        out
    }

    #[test]
    fn test_unreserved_encodes_delimiters() {
        assert_eq!(unreserved("Hello World!"), "Hello%20World%21");
        assert_eq!(unreserved("/foo/bar"), "%2Ffoo%2Fbar");
    }

    #[test]
    fn test_reserved_keeps_delimiters_and_triplets() {
        assert_eq!(reserved("/foo/bar"), "/foo/bar");
        assert_eq!(reserved("Hello World!"), "Hello%20World!");
        assert_eq!(reserved("50%25"), "50%25");
        assert_eq!(reserved("100%"), "100%25");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(unreserved("é"), "%C3%A9");
        assert_eq!(reserved("é"), "%C3%A9");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("value", 3), "val");
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("ab", 10), "ab");
    }
}
