//! Block padding schemes applied to the final plaintext block.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijndael::error::{Error, Result};
use crate::rijndael::util::BLOCK_SIZE;

/// How the final partial block is filled out to a whole block, and how it is stripped again
/// on decryption. Every scheme except [`Padding::None`] stores the pad length `d` (1 to 16)
/// in the last byte, so block-aligned plaintext gains a whole extra block.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Padding {
    /// No padding. Plaintext must already be a multiple of the block size.
    None,
    /// `d` bytes each of value `d`.
    #[default]
    Pkcs7,
    /// `d - 1` zero bytes followed by `d`.
    #[cfg_attr(feature = "cli", value(name = "ansi-x923"))]
    AnsiX923,
    /// `d - 1` random bytes followed by `d`.
    #[cfg_attr(feature = "cli", value(name = "iso10126"))]
    Iso10126,
}

impl Padding {
    /// Fills `tail` (fewer than 16 bytes, possibly empty) out to one whole block.
    ///
    /// [`Padding::None`] cannot produce a block and returns [`Error::InvalidData`], as does
    /// a `tail` that is already a block or longer.
    pub fn pad(self, tail: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        if tail.len() >= BLOCK_SIZE {
            return Err(Error::InvalidData { len: tail.len() });
        }

        let pad_len = BLOCK_SIZE - tail.len();
        let mut block = [0u8; BLOCK_SIZE];
        block[..tail.len()].copy_from_slice(tail);

        let fill = &mut block[tail.len()..BLOCK_SIZE - 1];
        match self {
            Padding::Pkcs7 => fill.fill(pad_len as u8),
            Padding::AnsiX923 => {} // already zeroed
            Padding::Iso10126 => OsRng.try_fill_bytes(fill)?,
            Padding::None => return Err(Error::InvalidData { len: tail.len() }),
        }
        block[BLOCK_SIZE - 1] = pad_len as u8;

        Ok(block)
    }

    /// Strips padding from decrypted plaintext in place, reading the pad length from the
    /// last byte. Filler bytes are not inspected. A pad length of zero removes nothing.
    ///
    /// Returns [`Error::Padding`] if the pad length exceeds the block size (or the data).
    pub fn unpad(self, data: &mut Vec<u8>) -> Result<()> {
        if self == Padding::None {
            return Ok(());
        }
        let Some(&last) = data.last() else {
            return Ok(());
        };

        let pad_len = last as usize;
        if pad_len > BLOCK_SIZE || pad_len > data.len() {
            debug!("{self} unpad failed: pad length {pad_len} on {} bytes", data.len());
            return Err(Error::Padding { pad_len });
        }

        data.truncate(data.len() - pad_len);
        Ok(())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Padding::None => "None",
            Padding::Pkcs7 => "PKCS7",
            Padding::AnsiX923 => "ANSI X9.23",
            Padding::Iso10126 => "ISO 10126",
        })
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalised.as_str() {
            "none" => Ok(Padding::None),
            "pkcs7" => Ok(Padding::Pkcs7),
            "ansix923" | "x923" => Ok(Padding::AnsiX923),
            "iso10126" => Ok(Padding::Iso10126),
            _ => Err(Error::UnsupportedMode {
                kind: "padding",
                name: s.to_owned(),
            }),
        }
    }
}
