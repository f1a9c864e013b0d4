//! AES substitution tables and key schedule round constants.
//!
//! The tables are generated at compile time from field inverses and the AES affine
//! transform rather than pasted in, and checked against FIPS-197 in the tests below.

use super::gf::{dbl, gf_inv};

/// Forward substitution box.
pub static SBOX: [u8; 256] = FORWARD;

/// Inverse substitution box, `SBOX_INV[SBOX[x]] == x`.
pub static SBOX_INV: [u8; 256] = invert(&FORWARD);

/// Round constants `x^(i)` in GF(2^8), placed in the most significant byte of the word.
pub static RCON: [u8; 10] = round_constants();

const FORWARD: [u8; 256] = generate_sbox();

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

const fn generate_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    // 0 has no inverse
    sbox[0] = 0x63;
    let mut x = 1;
    while x < 256 {
        sbox[x] = affine(gf_inv(x as u8));
        x += 1;
    }
    sbox
}

const fn invert(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

const fn round_constants() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut c = 1u8;
    let mut i = 0;
    while i < rcon.len() {
        rcon[i] = c;
        c = dbl(c);
        i += 1;
    }
    rcon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox_reference_entries() {
        // spot checks against the FIPS-197 figure 7 table
        let expected = [
            (0x00, 0x63), (0x01, 0x7c), (0x02, 0x77), (0x10, 0xca), (0x11, 0x82),
            (0x53, 0xed), (0x63, 0xfb), (0x7f, 0xd2), (0x80, 0xcd), (0x9a, 0xb8),
            (0xc2, 0x25), (0xe0, 0xe1), (0xfe, 0xbb), (0xff, 0x16),
        ];
        for (input, output) in expected {
            assert_eq!(SBOX[input], output, "SBOX[{input:#04x}]");
        }
    }

    #[test]
    fn test_sbox_first_row() {
        let row: [u8; 16] = [
            0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, //
            0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76, //
        ];
        assert_eq!(&SBOX[..16], &row);
    }

    #[test]
    fn test_inverse_sbox() {
        for x in 0..=255u8 {
            assert_eq!(SBOX_INV[SBOX[x as usize] as usize], x);
            assert_eq!(SBOX[SBOX_INV[x as usize] as usize], x);
        }
        assert_eq!(SBOX_INV[0x63], 0x00);
        assert_eq!(SBOX_INV[0x00], 0x52);
        assert_eq!(SBOX_INV[0xff], 0x7d);
    }

    #[test]
    fn test_sbox_is_permutation() {
        let mut seen = [false; 256];
        for &b in SBOX.iter() {
            assert!(!seen[b as usize], "duplicate SBOX output {b:#04x}");
            seen[b as usize] = true;
        }
    }

    #[test]
    fn test_round_constants() {
        assert_eq!(RCON, [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]);
    }
}
