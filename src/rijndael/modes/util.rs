pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if batch size reaches 4 KiB

#[cfg(test)]
pub(crate) mod test_util {
    use hex_literal::hex;

    pub fn hex_to_bytes(s: &str) -> Vec<u8> {
        let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(s.len() % 2 == 0, "hex string must have even length");
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    pub fn hex_to_arr_16(hex: &str) -> [u8; 16] {
        let v = hex_to_bytes(hex);
        assert_eq!(v.len(), 16);
        let mut out = [0u8; 16];
        out.copy_from_slice(&v);
        out
    }

    // all test vectors from
    // https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf
    pub const PLAINTEXT: [u8; 64] = hex!(
        "6bc1bee22e409f96e93d7e117393172a ae2d8a571e03ac9c9eb76fac45af8e51"
        "30c81c46a35ce411e5fbc1191a0a52ef f69f2445df4f9b17ad2b417be66c3710"
    );

    pub const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    pub const KEY_192: [u8; 24] = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    pub const KEY_256: [u8; 32] =
        hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");

    pub const CBC_IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
}
