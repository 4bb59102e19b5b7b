//! Cache key derivation

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Derive the cache key for a message
///
/// The message is trimmed and lowercased, base64-encoded, and the encoding is
/// cut to `key_length` characters. Long messages sharing a prefix therefore
/// share a key.
pub fn make_key(prefix: &str, key_length: usize, message: &str) -> String {
    let normalized = message.trim().to_lowercase();
    let encoded = STANDARD.encode(normalized.as_bytes());
    let cut = encoded.len().min(key_length);
    format!("{}{}", prefix, &encoded[..cut])
}
