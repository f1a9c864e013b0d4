//! Byte arithmetic in GF(2^8) with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.

const REDUCTION: u8 = 0x1B;

/// Multiply by x (i.e. by 2), reducing on overflow.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) const fn dbl(a: u8) -> u8 {
    (a << 1) ^ (REDUCTION & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Carry-less multiplication of two field elements.
///
/// Each low bit of `b` decides whether the running multiplicand is added into the product;
/// the multiplicand is then doubled, reducing by 0x1B if its high bit was set before the shift.
pub(crate) const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let high_bit_set = a & 0x80 != 0;
        a <<= 1;
        if high_bit_set {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, computed as a^254. Zero has no inverse and maps to zero.
pub(crate) const fn gf_inv(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    if a == 0 { 0 } else { result }
}
