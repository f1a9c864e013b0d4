//! AES (Rijndael) block cipher with ECB and CBC chaining, PKCS7 / ANSI X9.23 / ISO 10126
//! padding, and an incremental [`BlockTransform`] interface for streaming data through it.

mod rijndael;

pub use rijndael::{
    AesTransform, BLOCK_SIZE, BlockTransform, ChainMode, CryptoWriter, Direction, Error, Key,
    KeySize, PBKDF2_ITERATIONS, Padding, Result, SBOX, SBOX_INV, TransformBuilder, derive_key,
    derive_key_with, open, random_iv, seal, seal_with_iv,
};
