use super::constants::SBOX_INV;
use super::util::{UNMIX, add_round_key, mix_with, rotate_rows, substitute};

/// Core AES decryption function. Decrypts 16 byte block using provided round keys.
/// Round keys are applied in descending order, undoing [`encrypt_block`](super::encrypt_block)
/// step for step.
#[inline(always)]
pub(crate) fn decrypt_block(ciphertext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    debug_assert!(matches!(round_keys.len(), 11 | 13 | 15));
    let mut state = *ciphertext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[last]);
    unshift_rows(&mut state);
    unsub_bytes(&mut state);

    for round_key in round_keys[1..last].iter().rev() {
        add_round_key(&mut state, round_key);
        unmix_columns(&mut state);
        unshift_rows(&mut state);
        unsub_bytes(&mut state);
    }

    add_round_key(&mut state, &round_keys[0]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn unsub_bytes(state: &mut [u8; 16]) {
    substitute(state, &SBOX_INV);
}

/// Inverse ShiftRows step.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     06 07 08 05   ---->   05 06 07 08
///     11 12 09 10   ---->   09 10 11 12
///     16 13 14 15   ---->   13 14 15 16
/// ]
#[inline(always)]
pub(crate) fn unshift_rows(state: &mut [u8; 16]) {
    rotate_rows(state, false);
}

/// Inverse MixColumns step.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn unmix_columns(state: &mut [u8; 16]) {
    mix_with(state, &UNMIX);
}
