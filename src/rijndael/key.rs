//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be randomly generated, derived from a password, or built from an existing byte slice.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijndael::error::{Error, Result};

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum KeySize {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "128"))]
    Bits128,
    #[cfg_attr(feature = "cli", value(name = "192"))]
    Bits192,
    #[cfg_attr(feature = "cli", value(name = "256"))]
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Number of round keys produced by the key schedule (Nr + 1).
    pub fn rounds(self) -> usize {
        match self {
            KeySize::Bits128 => 11,
            KeySize::Bits192 => 13,
            KeySize::Bits256 => 15,
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.byte_len() * 8)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to build an [AesTransform](crate::AesTransform).
///
/// ## Examples
/// ```
/// # fn main() -> aes_transform::Result<()> {
/// use aes_transform::{Key, KeySize};
///
/// let random = Key::random(KeySize::Bits256)?;
/// assert_eq!(random.as_bytes().len(), 32);
///
/// let key_bytes = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                  0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(key.as_bytes(), &key_bytes);
/// assert_eq!(key.rounds(), 11);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..10]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k[..size.byte_len()])?;
        Self::try_from_slice(&k[..size.byte_len()])
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = match bytes.len() {
            16 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(bytes);
                KeyBytes::K128(k)
            }
            24 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(bytes);
                KeyBytes::K192(k)
            }
            32 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(bytes);
                KeyBytes::K256(k)
            }
            len => return Err(Error::InvalidKeyLength { len }),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }

    /// Number of round keys this key expands to: 11, 13, or 15.
    pub fn rounds(&self) -> usize {
        self.size().rounds()
    }
}

// keep key material out of logs and panic messages
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("size", &self.size()).finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}
