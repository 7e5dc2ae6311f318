//! Character sets permitted in stamp fields.
//!
//! Every field except the date uses the stamp field alphabet. The date is
//! restricted to ASCII digits. The delimiter `:` is in neither set.

/// The field delimiter.
pub const DELIMITER: char = ':';

/// The stamp field alphabet, in canonical order.
///
/// This order is also the suffix enumeration order used by the searcher, so
/// changing it changes which suffix a given stamp resolves to.
pub const FIELD_ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    ",./'\"[]{}\\|=+-_)(*&^%$#@!`~;<>?",
);

/// Number of symbols in [`FIELD_ALPHABET`].
pub const FIELD_ALPHABET_LEN: usize = 93;

/// Whether `c` may appear in a resource, extensions, salt, or suffix field.
pub fn is_field_char(c: char) -> bool {
    c.is_ascii() && is_field_byte(c as u8)
}

/// Byte-level form of [`is_field_char`].
pub const fn is_field_byte(b: u8) -> bool {
    matches!(b,
        b'a'..=b'z'
        | b'A'..=b'Z'
        | b'0'..=b'9'
        | b','
        | b'.'
        | b'/'
        | b'\''
        | b'"'
        | b'['
        | b']'
        | b'{'
        | b'}'
        | b'\\'
        | b'|'
        | b'='
        | b'+'
        | b'-'
        | b'_'
        | b')'
        | b'('
        | b'*'
        | b'&'
        | b'^'
        | b'%'
        | b'$'
        | b'#'
        | b'@'
        | b'!'
        | b'`'
        | b'~'
        | b';'
        | b'<'
        | b'>'
        | b'?')
}

/// Whether `c` may appear in the date field.
pub fn is_date_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// The first character of `s` outside the field alphabet, if any.
pub fn first_invalid_field_char(s: &str) -> Option<char> {
    s.chars().find(|c| !is_field_char(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_unique_and_sized() {
        let bytes = FIELD_ALPHABET.as_bytes();
        assert_eq!(bytes.len(), FIELD_ALPHABET_LEN);

        let mut sorted = bytes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), FIELD_ALPHABET_LEN);
    }

    #[test]
    fn test_alphabet_matches_predicate() {
        for b in 0u8..=255 {
            let in_alphabet = FIELD_ALPHABET.as_bytes().contains(&b);
            assert_eq!(is_field_byte(b), in_alphabet, "byte {b:#04x}");
        }
    }

    #[test]
    fn test_delimiter_and_whitespace_excluded() {
        assert!(!is_field_char(DELIMITER));
        assert!(!is_field_char(' '));
        assert!(!is_field_char('\n'));
        assert!(!is_field_char('é'));
    }

    #[test]
    fn test_date_chars() {
        assert!("0123456789".chars().all(is_date_char));
        assert!(!is_date_char('a'));
        assert!(!is_date_char('-'));
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(first_invalid_field_char("alice@example.com"), None);
        assert_eq!(first_invalid_field_char("a:b"), Some(':'));
    }
}
