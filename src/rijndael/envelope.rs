//! One-shot CBC encryption with the IV carried in front of the ciphertext.
//!
//! Output is formatted as `IV (16 bytes) || Ciphertext`.

use crate::rijndael::error::{Error, Result};
use crate::rijndael::key::Key;
use crate::rijndael::modes::ChainMode;
use crate::rijndael::padding::Padding;
use crate::rijndael::transform::{AesTransform, BlockTransform, Direction};
use crate::rijndael::util::{BLOCK_SIZE, random_iv};

/// **Cipher block chaining** encryption under a freshly generated random IV, which is
/// prepended to the ciphertext.
///
/// **Important**: never reuse an IV with the same key. [`seal`] always draws a new one.
pub fn seal(key: &Key, padding: Padding, plaintext: &[u8]) -> Result<Vec<u8>> {
    let iv = random_iv()?;
    seal_with_iv(key, &iv, padding, plaintext)
}

/// As [`seal`], with a caller-chosen IV.
pub fn seal_with_iv(
    key: &Key,
    iv: &[u8; BLOCK_SIZE],
    padding: Padding,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let mut encryptor = AesTransform::new(key, iv, padding, ChainMode::Cbc, Direction::Encrypt)?;
    let mut out = iv.to_vec();
    out.append(&mut encryptor.transform_final_block(plaintext)?);
    Ok(out)
}

/// Inverse of [`seal`]. Assumes input follows the same format: `IV (16 bytes) || Ciphertext`
pub fn open(key: &Key, padding: Padding, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < BLOCK_SIZE {
        return Err(Error::InvalidCiphertext {
            len: data.len(),
            context: "CBC: missing 16-byte IV",
        });
    }

    let (iv, ciphertext) = data.split_at(BLOCK_SIZE);
    AesTransform::new(key, iv, padding, ChainMode::Cbc, Direction::Decrypt)?
        .transform_final_block(ciphertext)
}
