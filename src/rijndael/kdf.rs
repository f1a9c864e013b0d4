//! Password based key derivation (PBKDF2-HMAC-SHA256).

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::rijndael::error::Result;
use crate::rijndael::key::{Key, KeySize};

/// Iteration count used by [`derive_key`].
pub const PBKDF2_ITERATIONS: u32 = 310_000;

/// Derives a key from a password with PBKDF2-HMAC-SHA256, [`PBKDF2_ITERATIONS`] rounds and
/// an empty salt. Deterministic, so the same password always opens the same files.
pub fn derive_key(password: &str, size: KeySize) -> Result<Key> {
    derive_key_with(password.as_bytes(), &[], PBKDF2_ITERATIONS, size)
}

/// PBKDF2-HMAC-SHA256 with explicit salt and iteration count.
pub fn derive_key_with(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    size: KeySize,
) -> Result<Key> {
    let mut buf = [0u8; 32];
    let out = &mut buf[..size.byte_len()];
    pbkdf2::<Hmac<Sha256>>(password, salt, iterations, out);
    Key::try_from_slice(out)
}
