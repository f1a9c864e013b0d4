use super::gf::gf_mul;

/// Circulant matrices applied to each column by MixColumns and its inverse.
pub(crate) const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];
pub(crate) const UNMIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Substitute every byte of the state through `table`.
#[inline(always)]
pub(crate) fn substitute(state: &mut [u8; 16], table: &[u8; 256]) {
    for byte in state {
        *byte = table[*byte as usize];
    }
}

/// Rotate row `r` of the column-major state by `r` positions. `left` selects ShiftRows,
/// otherwise the inverse rotation is applied.
#[inline(always)]
pub(crate) fn rotate_rows(state: &mut [u8; 16], left: bool) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            let from = if left { (col + row) & 3 } else { (col + 4 - row) & 3 };
            state[col * 4 + row] = s[from * 4 + row];
        }
    }
}

/// Multiply every column of the state by `matrix` over GF(2^8).
#[inline(always)]
pub(crate) fn mix_with(state: &mut [u8; 16], matrix: &[[u8; 4]; 4]) {
    for column in state.chunks_exact_mut(4) {
        let c = [column[0], column[1], column[2], column[3]];
        for (out, coefficients) in column.iter_mut().zip(matrix) {
            *out = coefficients
                .iter()
                .zip(c)
                .fold(0u8, |acc, (&m, b)| acc ^ gf_mul(m, b));
        }
    }
}

/// Reads the column-major state row by row, the layout FIPS-197 uses when it prints a state
/// as a 4x4 matrix.
#[cfg(test)]
pub(crate) fn transpose(state: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = state[col * 4 + row];
        }
    }
    out
}
