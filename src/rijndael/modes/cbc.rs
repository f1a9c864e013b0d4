use rayon::prelude::*;

use super::util::PARALLEL_THRESHOLD;
use crate::rijndael::core::{decrypt_block, encrypt_block};
use crate::rijndael::util::{BLOCK_SIZE, as_block, xor_blocks};

/// CBC encryption of whole blocks. Each block is XORed with the feedback register before
/// encryption and the resulting ciphertext becomes the new feedback, so this is inherently
/// serial.
pub(crate) fn cbc_encrypt_blocks(
    input: &[u8],
    output: &mut [u8],
    round_keys: &[[u8; 16]],
    feedback: &mut [u8; 16],
) {
    debug_assert_eq!(input.len() % BLOCK_SIZE, 0);
    debug_assert_eq!(input.len(), output.len());

    for (out, block) in output
        .chunks_exact_mut(BLOCK_SIZE)
        .zip(input.chunks_exact(BLOCK_SIZE))
    {
        let ciphertext = encrypt_block(&xor_blocks(feedback, block), round_keys);
        out.copy_from_slice(&ciphertext);
        *feedback = ciphertext;
    }
}

/// CBC decryption of whole blocks. Plaintext block i only depends on ciphertext blocks i and
/// i-1, so large batches are decrypted in parallel.
pub(crate) fn cbc_decrypt_blocks(
    input: &[u8],
    output: &mut [u8],
    round_keys: &[[u8; 16]],
    feedback: &mut [u8; 16],
) {
    debug_assert_eq!(input.len() % BLOCK_SIZE, 0);
    debug_assert_eq!(input.len(), output.len());

    if input.is_empty() {
        return;
    }

    let iv = *feedback;
    let decrypt_one = |i: usize, block: &[u8], out: &mut [u8]| {
        let prev = if i == 0 {
            &iv[..]
        } else {
            &input[(i - 1) * BLOCK_SIZE..i * BLOCK_SIZE]
        };
        out.copy_from_slice(&xor_blocks(&decrypt_block(as_block(block), round_keys), prev));
    };

    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(BLOCK_SIZE)
            .zip(input.par_chunks_exact(BLOCK_SIZE))
            .enumerate()
            .for_each(|(i, (out, block))| decrypt_one(i, block, out));
    } else {
        for (i, (out, block)) in output
            .chunks_exact_mut(BLOCK_SIZE)
            .zip(input.chunks_exact(BLOCK_SIZE))
            .enumerate()
        {
            decrypt_one(i, block, out);
        }
    }

    feedback.copy_from_slice(&input[input.len() - BLOCK_SIZE..]);
}

#[cfg(test)]
mod test_cbc {
    use super::*;
    use crate::rijndael::core::expand_key;
    use crate::rijndael::error::Result;
    use crate::rijndael::modes::util::test_util::{
        CBC_IV, KEY_128, KEY_192, KEY_256, PLAINTEXT, hex_to_bytes,
    };

    fn vectors() -> [(&'static [u8], Vec<u8>); 3] {
        [
            (
                &KEY_128,
                hex_to_bytes(
                    "7649abac8119b246cee98e9b12e9197d 5086cb9b507219ee95db113a917678b2
                     73bed6b8e3c1743b7116e69e22229516 3ff1caa1681fac09120eca307586e1a7",
                ),
            ),
            (
                &KEY_192,
                hex_to_bytes(
                    "4f021db243bc633d7178183a9fa071e8 b4d9ada9ad7dedf4e5e738763f69145a
                     571b242012fb7ae07fa9baac3df102e0 08b0e27988598881d920a9e64f5615cd",
                ),
            ),
            (
                &KEY_256,
                hex_to_bytes(
                    "f58c4c04d6e5f1ba779eabfb5f7bfbd6 9cfc4e967edb808d679f777bc6702c7d
                     39f23369a9d9bacfa530e26304231461 b2eb05e2c39be9fcda6c19078c6a9d1b",
                ),
            ),
        ]
    }

    #[test]
    fn aes_cbc_encrypt() -> Result<()> {
        for (key, expected) in vectors() {
            let round_keys = expand_key(key)?;
            let mut feedback = CBC_IV;
            let mut encrypted = vec![0u8; PLAINTEXT.len()];
            cbc_encrypt_blocks(&PLAINTEXT, &mut encrypted, &round_keys, &mut feedback);
            assert_eq!(expected, encrypted, "encrypted result does not match expected");
            assert_eq!(&feedback[..], &expected[expected.len() - 16..]);
        }
        Ok(())
    }

    #[test]
    fn aes_cbc_decrypt() -> Result<()> {
        for (key, ciphertext) in vectors() {
            let round_keys = expand_key(key)?;
            let mut feedback = CBC_IV;
            let mut decrypted = vec![0u8; ciphertext.len()];
            cbc_decrypt_blocks(&ciphertext, &mut decrypted, &round_keys, &mut feedback);
            assert_eq!(PLAINTEXT.to_vec(), decrypted, "decrypted result does not match expected");
        }
        Ok(())
    }

    #[test]
    fn feedback_carries_across_calls() -> Result<()> {
        let (key, ciphertext) = vectors()[0].clone();
        let round_keys = expand_key(key)?;

        let mut feedback = CBC_IV;
        let mut encrypted = vec![0u8; PLAINTEXT.len()];
        for (src, dst) in PLAINTEXT.chunks(16).zip(encrypted.chunks_mut(16)) {
            cbc_encrypt_blocks(src, dst, &round_keys, &mut feedback);
        }
        assert_eq!(encrypted, ciphertext);

        let mut feedback = CBC_IV;
        let mut decrypted = vec![0u8; ciphertext.len()];
        for (src, dst) in ciphertext.chunks(32).zip(decrypted.chunks_mut(32)) {
            cbc_decrypt_blocks(src, dst, &round_keys, &mut feedback);
        }
        assert_eq!(decrypted, PLAINTEXT.to_vec());
        Ok(())
    }

    #[test]
    fn parallel_decrypt_matches_serial() -> Result<()> {
        let round_keys = expand_key(&KEY_192)?;
        let input: Vec<u8> = (0..PARALLEL_THRESHOLD * 2).map(|i| (i * 13 % 256) as u8).collect();

        let mut feedback = CBC_IV;
        let mut encrypted = vec![0u8; input.len()];
        cbc_encrypt_blocks(&input, &mut encrypted, &round_keys, &mut feedback);

        let mut feedback = CBC_IV;
        let mut decrypted = vec![0u8; input.len()];
        cbc_decrypt_blocks(&encrypted, &mut decrypted, &round_keys, &mut feedback);
        assert_eq!(decrypted, input);
        assert_eq!(&feedback[..], &encrypted[encrypted.len() - 16..]);
        Ok(())
    }
}
