//! Session token generation.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore as _;

use quizmill_core::SessionToken;

/// Bytes of entropy per token.
const TOKEN_BYTES: usize = 32;

/// Generate a fresh session token.
///
/// 32 bytes from the thread-local CSPRNG, URL-safe base64 without padding
/// (43 characters). No collision check is performed; at 256 bits of entropy
/// the session table's primary key is backstop enough.
#[must_use]
pub fn generate() -> SessionToken {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    SessionToken::new(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_alphabet() {
        let token = generate();
        let s = token.as_str();
        assert_eq!(s.len(), 43);
        assert!(
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_decodes_to_32_bytes() {
        let token = generate();
        let bytes = URL_SAFE_NO_PAD.decode(token.as_str()).unwrap();
        assert_eq!(bytes.len(), TOKEN_BYTES);
    }
}
