use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijndael::error::*;

/// AES block length in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Generates a fresh random 16-byte IV from the OS RNG.
pub fn random_iv() -> Result<[u8; BLOCK_SIZE]> {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

#[inline(always)]
pub(crate) fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[inline(always)]
pub(crate) fn xor_blocks(a: &[u8; BLOCK_SIZE], b: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut out = *a;
    for (o, x) in out.iter_mut().zip(b) {
        *o ^= x;
    }
    out
}

/// Views an exactly block-sized slice as a block. Callers only pass chunks produced by
/// `chunks_exact(BLOCK_SIZE)`.
#[inline(always)]
pub(crate) fn as_block(chunk: &[u8]) -> &[u8; BLOCK_SIZE] {
    chunk
        .try_into()
        .expect("chunks_exact guarantees block-sized slices")
}
