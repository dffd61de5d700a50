//! Short code derivation.
//!
//! Codes are derived from a seed string rather than drawn at random: the
//! caller mixes a fresh salt into the seed on every attempt, so the same
//! seed always yields the same code.

use base64::Engine as _;
use md5::{Digest, Md5};

/// Number of digest bytes fed into the encoder.
///
/// Six bytes encode to exactly eight base64 characters with no padding.
const DIGEST_PREFIX_BYTES: usize = 6;

/// Longest code [`generate_code`] can produce.
pub const MAX_CODE_LENGTH: usize = DIGEST_PREFIX_BYTES / 3 * 4;

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Derives a short code of `length` characters from `seed`.
///
/// Computes the MD5 digest of `seed`, keeps its first six bytes and encodes
/// them as URL-safe base64 without padding (`A-Z a-z 0-9 - _`). `length` is
/// clamped to [`MAX_CODE_LENGTH`].
///
/// # Examples
///
/// ```
/// use shurl::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("", 7), "1B2M2Y8");
/// assert_eq!(generate_code("hello", 7), generate_code("hello", 7));
/// ```
pub fn generate_code(seed: &str, length: usize) -> String {
    let digest = Md5::digest(seed.as_bytes());

    let mut code =
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..DIGEST_PREFIX_BYTES]);
    code.truncate(length.min(MAX_CODE_LENGTH));
    code
}

/// Returns true if `c` belongs to the short code alphabet.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
