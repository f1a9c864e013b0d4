use super::constants::SBOX;
use super::util::{MIX, add_round_key, mix_with, rotate_rows, substitute};

/// Core AES encryption function. Encrypts 16 byte block using provided round keys.
///
/// The state is kept column-major, in the same byte order as the input and the round keys,
/// so no transposition is needed on the way in or out.
#[inline(always)]
pub(crate) fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    debug_assert!(matches!(round_keys.len(), 11 | 13 | 15));
    let mut state = *plaintext;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    substitute(state, &SBOX);
}

/// ShiftRows step. Row `r` rotates left by `r` positions, row 0 is untouched.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    rotate_rows(state, true);
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    mix_with(state, &MIX);
}
