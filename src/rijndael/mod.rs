mod core;
mod envelope;
mod error;
mod kdf;
mod key;
mod modes;
mod padding;
mod stream;
mod transform;
mod util;

pub use self::core::constants::{SBOX, SBOX_INV};
pub use envelope::{open, seal, seal_with_iv};
pub use error::{Error, Result};
pub use kdf::{PBKDF2_ITERATIONS, derive_key, derive_key_with};
pub use key::{Key, KeySize};
pub use modes::ChainMode;
pub use padding::Padding;
pub use stream::CryptoWriter;
pub use transform::{AesTransform, BlockTransform, Direction, TransformBuilder};
pub use util::{BLOCK_SIZE, random_iv};
