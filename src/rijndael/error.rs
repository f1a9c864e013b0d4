use std::io;

use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required construction parameter (key, or IV in CBC mode) was never supplied.
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// The initialisation vector must be exactly one block long.
    #[error("invalid IV length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// [`transform_block`](crate::BlockTransform::transform_block) only accepts whole blocks.
    #[error("input length {len} is not a multiple of the block size, use transform_final_block instead")]
    Misaligned { len: usize },

    /// Final input could not be processed: ciphertext not block aligned, or unpadded
    /// plaintext not block aligned.
    #[error("final input of {len} bytes is not a multiple of the block size")]
    InvalidData { len: usize },

    /// The decoded pad length exceeds the block size. Usually means the wrong key or IV was
    /// used, or the ciphertext has been corrupted.
    #[error("last block incorrectly padded (pad length {pad_len}), wrong key or IV?")]
    Padding { pad_len: usize },

    /// A mode or padding name that this library does not implement.
    #[error("unsupported {kind}: {name}")]
    UnsupportedMode { kind: &'static str, name: String },

    /// Output buffer handed to `transform_block` cannot hold the produced bytes.
    #[error("output buffer too small: {needed} bytes needed, {available} available")]
    OutputTooSmall { needed: usize, available: usize },

    /// The transform was already finalised and cannot be used again.
    #[error("transform already finalised")]
    Finalized,

    /// Provided ciphertext that did not match the expected `IV || ciphertext` layout.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// OS RNG failed while generating a key, an IV, or ISO 10126 padding.
    #[error("OS RNG failed")]
    Rng(#[from] rand_core::OsError),
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        let kind = match e {
            Error::Misaligned { .. }
            | Error::InvalidData { .. }
            | Error::Padding { .. }
            | Error::InvalidCiphertext { .. } => io::ErrorKind::InvalidData,
            Error::Rng(_) => io::ErrorKind::Other,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, e)
    }
}
