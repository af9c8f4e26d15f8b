//! URL-component percent-encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when embedding a value as a single query component.
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched, so `:`, `/`, `?`, `&`,
/// `=`, `#`, `+` and spaces are all escaped. Non-ASCII is escaped byte-wise
/// as UTF-8 with uppercase hex.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `input` so it can be embedded as one query-string value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved() {
        assert_eq!(
            encode_component("https://example.com/a.jpg"),
            "https%3A%2F%2Fexample.com%2Fa.jpg"
        );
        assert_eq!(
            encode_component("a b?c=d&e#f+g"),
            "a%20b%3Fc%3Dd%26e%23f%2Bg"
        );
    }

    #[test]
    fn keeps_unreserved_marks() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("AZaz09"), "AZaz09");
    }

    #[test]
    fn utf8_is_uppercase_hex() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
        assert_eq!(encode_component("%"), "%25");
    }
}
