//! Word-boundary classification over raw bytes
//!
//! Only `[a-zA-Z0-9_]` count as word bytes. Every other value, including
//! all non-ASCII bytes, is a delimiter.

/// Returns true if the byte is ASCII alphanumeric or underscore
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Returns true if the byte separates words
#[inline]
pub fn is_word_delimiter(byte: u8) -> bool {
    !is_word_byte(byte)
}

/// Check that `[start, end)` sits on word boundaries within `text`
///
/// The byte before `start` (if any) and the byte at `end` (if any) must both
/// be delimiters.
#[inline]
pub(crate) fn is_around_word(text: &[u8], start: usize, end: usize) -> bool {
    let starts_word = start == 0 || is_word_delimiter(text[start - 1]);
    let ends_word = end >= text.len() || is_word_delimiter(text[end]);
    starts_word && ends_word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bytes() {
        for byte in [b'a', b'k', b'z', b'A', b'K', b'Z', b'0', b'7', b'9', b'_'] {
            assert!(is_word_byte(byte), "{:?} should be a word byte", byte as char);
        }
    }

    #[test]
    fn test_non_word_bytes() {
        for byte in [b'-', b'>', b'<', b'.', b' ', b'\t'] {
            assert!(!is_word_byte(byte), "{:?} should be a delimiter", byte as char);
        }
    }

    #[test]
    fn test_delimiter_is_opposite_of_word_byte() {
        assert!(is_word_delimiter(b'.'));
        assert!(is_word_delimiter(b' '));
        assert!(!is_word_delimiter(b'K'));
    }

    #[test]
    fn test_non_ascii_bytes_are_delimiters() {
        // Every byte of "é" in UTF-8
        for byte in "é".bytes() {
            assert!(is_word_delimiter(byte));
        }
        assert!(is_word_delimiter(0xff));
    }

    #[test]
    fn test_is_around_word() {
        let text = b"a foo b";
        assert!(is_around_word(text, 2, 5));
        assert!(!is_around_word(text, 3, 5));
        assert!(!is_around_word(text, 2, 4));

        // Text edges count as boundaries
        assert!(is_around_word(b"foo", 0, 3));
        assert!(!is_around_word(b"fooby", 0, 3));
    }
}
