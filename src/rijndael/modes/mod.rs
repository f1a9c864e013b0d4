//! Block chaining modes. [`ChainMode`] is the public selector; [`Chain`] owns the expanded
//! round keys together with any per-mode state (the CBC feedback register).

use std::fmt;
use std::str::FromStr;

mod cbc;
mod ecb;
pub(crate) mod util;

use crate::rijndael::error::{Error, Result};
use crate::rijndael::util::BLOCK_SIZE;
use cbc::{cbc_decrypt_blocks, cbc_encrypt_blocks};
use ecb::{ecb_decrypt_blocks, ecb_encrypt_blocks};

/// Supported chaining modes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ChainMode {
    /// **Electronic codebook**. Every block is encrypted independently.
    /// **Vulnerable to pattern emergence in the ciphertext.**
    Ecb,
    /// **Cipher block chaining**. Each plaintext block is `XOR`'d with the previous
    /// ciphertext block (the IV for the first block) before encryption.
    #[default]
    Cbc,
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChainMode::Ecb => "ECB",
            ChainMode::Cbc => "CBC",
        })
    }
}

impl FromStr for ChainMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(ChainMode::Ecb),
            "cbc" => Ok(ChainMode::Cbc),
            _ => Err(Error::UnsupportedMode {
                kind: "chaining mode",
                name: s.to_owned(),
            }),
        }
    }
}

enum ChainState {
    Ecb,
    Cbc { feedback: [u8; BLOCK_SIZE] },
}

/// Block cipher core plus chaining state. Operates on whole blocks only; buffering and padding
/// live one level up in [`AesTransform`](crate::AesTransform).
pub(crate) struct Chain {
    round_keys: Vec<[u8; 16]>,
    state: ChainState,
}

impl Chain {
    /// `iv` seeds the CBC feedback register and is ignored in ECB mode.
    pub(crate) fn new(round_keys: Vec<[u8; 16]>, mode: ChainMode, iv: [u8; BLOCK_SIZE]) -> Self {
        let state = match mode {
            ChainMode::Ecb => ChainState::Ecb,
            ChainMode::Cbc => ChainState::Cbc { feedback: iv },
        };
        Self { round_keys, state }
    }

    pub(crate) fn mode(&self) -> ChainMode {
        match self.state {
            ChainState::Ecb => ChainMode::Ecb,
            ChainState::Cbc { .. } => ChainMode::Cbc,
        }
    }

    /// Encrypts `input` into `output`. Both must be the same whole number of blocks.
    pub(crate) fn encrypt(&mut self, input: &[u8], output: &mut [u8]) {
        match &mut self.state {
            ChainState::Ecb => ecb_encrypt_blocks(input, output, &self.round_keys),
            ChainState::Cbc { feedback } => {
                cbc_encrypt_blocks(input, output, &self.round_keys, feedback)
            }
        }
    }

    /// Decrypts `input` into `output`. Both must be the same whole number of blocks.
    pub(crate) fn decrypt(&mut self, input: &[u8], output: &mut [u8]) {
        match &mut self.state {
            ChainState::Ecb => ecb_decrypt_blocks(input, output, &self.round_keys),
            ChainState::Cbc { feedback } => {
                cbc_decrypt_blocks(input, output, &self.round_keys, feedback)
            }
        }
    }
}
