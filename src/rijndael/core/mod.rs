//! Core AES implementation: field arithmetic, substitution tables, key schedule, and the
//! round pipeline for a single 16 byte block. Crate-internal: the block functions trust that
//! their round keys came from expand_key.

pub mod constants;
mod decryption;
mod encryption;
mod gf;
mod key_schedule;
mod util;

pub(crate) use decryption::decrypt_block;
pub(crate) use encryption::encrypt_block;
pub(crate) use key_schedule::expand_key;
