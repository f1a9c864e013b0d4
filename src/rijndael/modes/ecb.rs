use rayon::prelude::*;

use super::util::PARALLEL_THRESHOLD;
use crate::rijndael::core::{decrypt_block, encrypt_block};
use crate::rijndael::util::{BLOCK_SIZE, as_block};

type BlockFn = fn(&[u8; 16], &[[u8; 16]]) -> [u8; 16];

/// ECB encryption of whole blocks. Every block is encrypted independently, so large batches
/// are split across the rayon pool.
pub(crate) fn ecb_encrypt_blocks(input: &[u8], output: &mut [u8], round_keys: &[[u8; 16]]) {
    ecb_blocks(input, output, round_keys, encrypt_block);
}

/// ECB decryption of whole blocks.
pub(crate) fn ecb_decrypt_blocks(input: &[u8], output: &mut [u8], round_keys: &[[u8; 16]]) {
    ecb_blocks(input, output, round_keys, decrypt_block);
}

fn ecb_blocks(input: &[u8], output: &mut [u8], round_keys: &[[u8; 16]], block_fn: BlockFn) {
    debug_assert_eq!(input.len() % BLOCK_SIZE, 0);
    debug_assert_eq!(input.len(), output.len());

    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(BLOCK_SIZE)
            .zip(input.par_chunks_exact(BLOCK_SIZE))
            .for_each(|(out, block)| out.copy_from_slice(&block_fn(as_block(block), round_keys)));
    } else {
        for (out, block) in output
            .chunks_exact_mut(BLOCK_SIZE)
            .zip(input.chunks_exact(BLOCK_SIZE))
        {
            out.copy_from_slice(&block_fn(as_block(block), round_keys));
        }
    }
}
