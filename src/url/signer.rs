//! URL signing with HMAC-SHA256
//!
//! The signature is computed as:
//! ```text
//! signature = base64url(truncate(HMAC-SHA256(key, salt + path), size))
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::constants::DEFAULT_SIGNATURE_SIZE;

type HmacSha256 = Hmac<Sha256>;

/// Sign a serialized path
///
/// # Arguments
/// * `key` - Raw signing key
/// * `salt` - Raw salt, prepended to the path before hashing
/// * `path` - Serialized path including its leading `/`
/// * `size` - Number of MAC bytes to keep; 0 keeps all 32
///
/// # Returns
/// * Base64url-encoded (unpadded) signature
pub fn sign_path(key: &[u8], salt: &[u8], path: &str, size: usize) -> String {
    let signature = compute_hmac_signature(key, salt, path);
    let size = effective_size(size);
    base64_url_encode(&signature[..size])
}

/// Number of signature bytes actually emitted for a configured size
pub fn effective_size(size: usize) -> usize {
    if size == 0 || size > DEFAULT_SIGNATURE_SIZE {
        DEFAULT_SIGNATURE_SIZE
    } else {
        size
    }
}

fn compute_hmac_signature(key: &[u8], salt: &[u8], path: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");

    mac.update(salt);
    mac.update(path.as_bytes());

    mac.finalize().into_bytes().to_vec()
}

/// Base64url encode (URL-safe, no padding)
pub(crate) fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}
