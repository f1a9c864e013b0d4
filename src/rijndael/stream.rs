//! [`io::Write`] adapter over any [`BlockTransform`].

use std::io::{self, Write};

use log::trace;

use crate::rijndael::transform::BlockTransform;

/// Wraps a writer and pushes everything written through a [`BlockTransform`].
///
/// Writes of any length are accepted; bytes short of a whole block are held until more data
/// arrives. Call [`finish`](CryptoWriter::finish) to run the final block (padding included)
/// and recover the inner writer. Dropping the writer without finishing discards the tail.
///
/// ```
/// # fn main() -> std::io::Result<()> {
/// use std::io::Write;
/// use aes_transform::{AesTransform, CryptoWriter};
///
/// let key = [7u8; 32];
/// let iv = [1u8; 16];
/// let encryptor = AesTransform::builder().key(&key).iv(&iv).encryptor()?;
///
/// let mut writer = CryptoWriter::new(Vec::new(), encryptor);
/// writer.write_all(b"streamed ")?;
/// writer.write_all(b"in pieces")?;
/// let ciphertext = writer.finish()?;
/// assert_eq!(ciphertext.len(), 32);
/// # Ok(())
/// # }
/// ```
pub struct CryptoWriter<W: Write, T: BlockTransform> {
    inner: W,
    transform: T,
    pending: Vec<u8>,
    scratch: Vec<u8>,
}

impl<W: Write, T: BlockTransform> CryptoWriter<W, T> {
    pub fn new(inner: W, transform: T) -> Self {
        Self {
            inner,
            transform,
            pending: Vec::new(),
            scratch: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Transforms whatever is still held, writes it out, flushes, and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        let tail = self.transform.transform_final_block(&self.pending)?;
        self.inner.write_all(&tail)?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write, T: BlockTransform> Write for CryptoWriter<W, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let block_size = self.transform.block_size();
        self.pending.extend_from_slice(buf);

        let aligned = self.pending.len() - self.pending.len() % block_size;
        if aligned > 0 {
            self.scratch.resize(aligned, 0);
            let written = self
                .transform
                .transform_block(&self.pending[..aligned], &mut self.scratch)?;
            self.inner.write_all(&self.scratch[..written])?;
            self.pending.drain(..aligned);
            trace!("CryptoWriter: {aligned} bytes transformed, {written} written");
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
