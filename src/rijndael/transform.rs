use std::fmt;

use log::{debug, trace};

use crate::rijndael::core::expand_key;
use crate::rijndael::error::{Error, Result};
use crate::rijndael::key::Key;
use crate::rijndael::modes::{Chain, ChainMode};
use crate::rijndael::padding::Padding;
use crate::rijndael::util::{BLOCK_SIZE, as_block};

/// Which way a transform runs. Fixed at construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        })
    }
}

/// A block cipher transform that is fed whole blocks, then finished with one final call.
///
/// Implementors may hold data back between calls, so the output of a single
/// [`transform_block`](BlockTransform::transform_block) is not necessarily as long as its
/// input. Concatenating every output, including the final one, gives the complete result.
pub trait BlockTransform {
    /// Size in bytes of the blocks this transform works on.
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Transforms block-aligned, non-final `input` into `output`, returning the number of
    /// bytes written. `output` must be at least as long as `input`.
    fn transform_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Transforms the last piece of a message (any length for padded encryption) and returns
    /// everything still owed. The transform cannot be used afterwards.
    fn transform_final_block(&mut self, input: &[u8]) -> Result<Vec<u8>>;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum BufferState {
    Empty,
    OneBlock([u8; BLOCK_SIZE]),
    Finalized,
}

/// AES in ECB or CBC mode with padding, usable block by block over a stream.
///
/// Holds the expanded key, the CBC feedback register and, when decrypting with padding, the
/// most recent ciphertext block. That block is held back because until the stream ends
/// there is no way to know whether it is the padded one.
///
/// ## Examples
/// ```
/// # fn main() -> aes_transform::Result<()> {
/// use aes_transform::{AesTransform, BlockTransform, Key, KeySize};
///
/// let key = Key::random(KeySize::Bits256)?;
/// let iv = aes_transform::random_iv()?;
///
/// let mut encryptor = AesTransform::builder().key(key.as_bytes()).iv(&iv).encryptor()?;
/// let ciphertext = encryptor.transform_final_block(b"attack at dawn")?;
/// assert_eq!(ciphertext.len(), 16);
///
/// let mut decryptor = AesTransform::builder().key(key.as_bytes()).iv(&iv).decryptor()?;
/// assert_eq!(decryptor.transform_final_block(&ciphertext)?, b"attack at dawn");
/// # Ok(())
/// # }
/// ```
pub struct AesTransform {
    chain: Chain,
    padding: Padding,
    direction: Direction,
    buffer: BufferState,
}

impl AesTransform {
    /// Expands `key` and seeds the chaining state from `iv`, which must be exactly one block
    /// long even in ECB mode, where it is otherwise unused.
    pub fn new(
        key: &Key,
        iv: &[u8],
        padding: Padding,
        mode: ChainMode,
        direction: Direction,
    ) -> Result<Self> {
        let iv: [u8; BLOCK_SIZE] = iv
            .try_into()
            .map_err(|_| Error::InvalidIvLength { len: iv.len() })?;
        let round_keys = expand_key(key.as_bytes())?;

        debug!(
            "new {} {mode} {direction} transform, {padding} padding",
            key.size()
        );

        Ok(Self {
            chain: Chain::new(round_keys, mode, iv),
            padding,
            direction,
            buffer: BufferState::Empty,
        })
    }

    /// Starts a [`TransformBuilder`] with CBC and PKCS7 defaults.
    pub fn builder<'a>() -> TransformBuilder<'a> {
        TransformBuilder::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn mode(&self) -> ChainMode {
        self.chain.mode()
    }

    /// True while a decrypted-but-unreleased ciphertext block is held back.
    pub fn has_pending_block(&self) -> bool {
        matches!(self.buffer, BufferState::OneBlock(_))
    }

    pub fn is_finalized(&self) -> bool {
        self.buffer == BufferState::Finalized
    }

    // the last block is only held back when decrypting with padding
    fn holds_back_last_block(&self) -> bool {
        self.direction == Direction::Decrypt && self.padding != Padding::None
    }

    fn pending_block(&self) -> Option<[u8; BLOCK_SIZE]> {
        match self.buffer {
            BufferState::OneBlock(block) => Some(block),
            _ => None,
        }
    }

    fn decrypt_holding_back(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        if input.is_empty() {
            return Ok(0);
        }

        let pending = self.pending_block();
        let (body, last) = input.split_at(input.len() - BLOCK_SIZE);
        let offset = if pending.is_some() { BLOCK_SIZE } else { 0 };
        let out = output_window(output, offset + body.len())?;

        if let Some(block) = pending {
            self.chain.decrypt(&block, &mut out[..BLOCK_SIZE]);
        }
        self.chain.decrypt(body, &mut out[offset..]);
        self.buffer = BufferState::OneBlock(*as_block(last));

        Ok(out.len())
    }

    fn encrypt_final(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let remainder = input.len() % BLOCK_SIZE;

        if self.padding == Padding::None {
            let mut out = vec![0u8; input.len()];
            self.chain.encrypt(input, &mut out);
            return Ok(out);
        }

        // block-aligned input gets a whole extra block of padding
        let (body, tail) = input.split_at(input.len() - remainder);
        let last = self.padding.pad(tail)?;

        let mut out = vec![0u8; body.len() + BLOCK_SIZE];
        let (body_out, last_out) = out.split_at_mut(body.len());
        self.chain.encrypt(body, body_out);
        self.chain.encrypt(&last, last_out);
        Ok(out)
    }

    fn decrypt_final(&mut self, pending: Option<[u8; BLOCK_SIZE]>, input: &[u8]) -> Result<Vec<u8>> {
        let offset = if pending.is_some() { BLOCK_SIZE } else { 0 };
        let mut out = vec![0u8; offset + input.len()];

        if let Some(block) = pending {
            self.chain.decrypt(&block, &mut out[..BLOCK_SIZE]);
        }
        self.chain.decrypt(input, &mut out[offset..]);

        self.padding.unpad(&mut out)?;
        Ok(out)
    }
}

impl BlockTransform for AesTransform {
    fn transform_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        if self.is_finalized() {
            return Err(Error::Finalized);
        }
        if input.len() % BLOCK_SIZE != 0 {
            return Err(Error::Misaligned { len: input.len() });
        }

        let written = match self.direction {
            Direction::Decrypt if self.holds_back_last_block() => {
                self.decrypt_holding_back(input, output)?
            }
            Direction::Decrypt => {
                let out = output_window(output, input.len())?;
                self.chain.decrypt(input, out);
                input.len()
            }
            Direction::Encrypt => {
                let out = output_window(output, input.len())?;
                self.chain.encrypt(input, out);
                input.len()
            }
        };

        trace!(
            "{} transform_block: {} bytes in, {written} bytes out, holding back {}",
            self.direction,
            input.len(),
            self.has_pending_block()
        );
        Ok(written)
    }

    fn transform_final_block(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        if self.is_finalized() {
            return Err(Error::Finalized);
        }
        // alignment errors leave the stream intact
        let needs_alignment = self.direction == Direction::Decrypt || self.padding == Padding::None;
        if needs_alignment && input.len() % BLOCK_SIZE != 0 {
            return Err(Error::InvalidData { len: input.len() });
        }

        let pending = self.pending_block();
        self.buffer = BufferState::Finalized;

        let out = match self.direction {
            Direction::Encrypt => self.encrypt_final(input)?,
            Direction::Decrypt => self.decrypt_final(pending, input)?,
        };

        debug!(
            "{} finalised: {} bytes in, {} bytes out",
            self.direction,
            input.len() + pending.map_or(0, |_| BLOCK_SIZE),
            out.len()
        );
        Ok(out)
    }
}

fn output_window(output: &mut [u8], needed: usize) -> Result<&mut [u8]> {
    let available = output.len();
    output
        .get_mut(..needed)
        .ok_or(Error::OutputTooSmall { needed, available })
}

/// Collects the construction parameters of an [`AesTransform`]. Key and IV are both required;
/// ECB accepts any 16-byte IV and never reads it.
///
/// ```
/// # fn main() -> aes_transform::Result<()> {
/// use aes_transform::{AesTransform, ChainMode, Error, Padding};
///
/// let key = [0x2b; 16];
/// let ecb = AesTransform::builder()
///     .key(&key)
///     .iv(&[0; 16])
///     .mode(ChainMode::Ecb)
///     .padding(Padding::AnsiX923)
///     .encryptor()?;
/// assert_eq!(ecb.mode(), ChainMode::Ecb);
///
/// let missing = AesTransform::builder().key(&key).decryptor();
/// assert!(matches!(missing, Err(Error::MissingArgument { name: "iv" })));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransformBuilder<'a> {
    key: Option<&'a [u8]>,
    iv: Option<&'a [u8]>,
    padding: Padding,
    mode: ChainMode,
}

impl<'a> TransformBuilder<'a> {
    /// Raw key bytes; validated when the transform is built.
    pub fn key(mut self, key: &'a [u8]) -> Self {
        self.key = Some(key);
        self
    }

    pub fn iv(mut self, iv: &'a [u8]) -> Self {
        self.iv = Some(iv);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn mode(mut self, mode: ChainMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn encryptor(self) -> Result<AesTransform> {
        self.build(Direction::Encrypt)
    }

    pub fn decryptor(self) -> Result<AesTransform> {
        self.build(Direction::Decrypt)
    }

    pub fn build(self, direction: Direction) -> Result<AesTransform> {
        let key = self.key.ok_or(Error::MissingArgument { name: "key" })?;
        let iv = self.iv.ok_or(Error::MissingArgument { name: "iv" })?;
        AesTransform::new(&Key::try_from_slice(key)?, iv, self.padding, self.mode, direction)
    }
}
