use super::constants::{RCON, SBOX};
use crate::rijndael::error::{Error, Result};
use crate::rijndael::util::xor_words;

/// AES key schedule. Returns a vector of 11, 13, or 15 round keys for AES-128, AES-192, and
/// AES-256, respectively. The extra round key is the initial key mixing, which most
/// documentation does not count as a round.
///
/// Fails with [`Error::InvalidKeyLength`] for any key that is not 16, 24, or 32 bytes long.
pub(crate) fn expand_key(key: &[u8]) -> Result<Vec<[u8; 16]>> {
    let rounds = match key.len() {
        16 => 11,
        24 => 13,
        32 => 15,
        len => return Err(Error::InvalidKeyLength { len }),
    };

    // Nk: key length in 4-byte words, Nw: total words produced
    let nk = key.len() / 4;
    let nw = rounds * 4;

    let mut w: Vec<[u8; 4]> = Vec::with_capacity(nw);
    w.extend(key.chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]));

    for i in nk..nw {
        let prev = w[i - 1];
        let temp = if i % nk == 0 {
            let mut t = sub_word(rot_word(prev));
            t[0] ^= RCON[i / nk - 1];
            t
        } else if nk > 6 && i % nk == 4 {
            // AES-256 only
            sub_word(prev)
        } else {
            prev
        };
        w.push(xor_words(&w[i - nk], &temp));
    }

    Ok(w.chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(word);
            }
            round_key
        })
        .collect())
}

#[inline(always)]
fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

#[inline(always)]
fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(|b| SBOX[b as usize])
}
