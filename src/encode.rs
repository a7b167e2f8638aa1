//! Percent-encoding helpers for cookie values.
//!
//! The store writes values exactly as given; a value containing `;`,
//! `=`, `%` or whitespace would corrupt the ambient string. These
//! helpers make the caller-side escaping contract explicit: encode
//! before [`set`](crate::CookieStore::set), decode after
//! [`get`](crate::CookieStore::get).

use std::str::Utf8Error;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

/// Characters that corrupt the ambient cookie string when stored raw.
const COOKIE_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'\t')
    .add(b';')
    .add(b',')
    .add(b'=')
    .add(b'%');

/// A percent-decoded value that is not valid UTF-8.
#[derive(Debug, Error)]
#[error("percent-decoded cookie value is not valid UTF-8")]
pub struct DecodeError(#[from] Utf8Error);

/// Percent-encode a raw value for storage.
pub fn value(raw: &str) -> String {
    utf8_percent_encode(raw, COOKIE_UNSAFE).to_string()
}

/// Decode a stored value produced by [`value`].
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let decoded = percent_decode_str(encoded).decode_utf8()?;
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_characters_encoded() {
        assert_eq!(value("a=b; c"), "a%3Db%3B%20c");
    }

    #[test]
    fn test_plain_value_untouched() {
        assert_eq!(value("plain-value_123"), "plain-value_123");
    }

    #[test]
    fn test_round_trip() {
        let raw = "x=1; y=2, 100%";
        assert_eq!(decode(&value(raw)).unwrap(), raw);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode("%ff%fe").is_err());
    }
}
