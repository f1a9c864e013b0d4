use std::io::{self, Write};

use aes_transform::{
    AesTransform, BlockTransform, ChainMode, CryptoWriter, Direction, Error, Key, KeySize,
    Padding, Result, derive_key_with, open, seal,
};
use hex_literal::hex;
use rand::{Rng, RngCore};

const KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

fn transform(mode: ChainMode, padding: Padding, direction: Direction) -> Result<AesTransform> {
    AesTransform::builder()
        .key(&KEY)
        .iv(&IV)
        .mode(mode)
        .padding(padding)
        .build(direction)
}

/// Feeds `input` through `transform` in block-aligned chunks of the given block counts, then
/// finishes with whatever is left.
fn run_chunked(
    mut transform: AesTransform,
    input: &[u8],
    chunk_blocks: &[usize],
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut rest = input;
    for &blocks in chunk_blocks {
        let take = (blocks * 16).min(rest.len() - rest.len() % 16);
        let (chunk, tail) = rest.split_at(take);
        let mut buf = vec![0u8; chunk.len()];
        let written = transform.transform_block(chunk, &mut buf)?;
        out.extend_from_slice(&buf[..written]);
        rest = tail;
    }
    out.extend(transform.transform_final_block(rest)?);
    Ok(out)
}

fn random_partition(rng: &mut impl Rng, blocks: usize) -> Vec<usize> {
    let mut parts = Vec::new();
    let mut left = blocks;
    while left > 0 {
        let n = rng.random_range(0..=left.min(300));
        parts.push(n);
        left -= n;
    }
    parts
}

#[test]
fn chunked_equals_one_shot() -> Result<()> {
    let mut rng = rand::rng();
    // block-aligned input forces a whole padding block
    for len in [16 * 600 + 9, 16 * 600] {
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        for mode in [ChainMode::Ecb, ChainMode::Cbc] {
            for padding in [Padding::Pkcs7, Padding::AnsiX923] {
                let one_shot = transform(mode, padding, Direction::Encrypt)?
                    .transform_final_block(&message)?;
                assert_eq!(one_shot.len(), (len / 16 + 1) * 16);

                for _ in 0..5 {
                    let parts = random_partition(&mut rng, message.len() / 16);
                    let chunked = run_chunked(
                        transform(mode, padding, Direction::Encrypt)?,
                        &message,
                        &parts,
                    )?;
                    assert_eq!(
                        chunked, one_shot,
                        "{mode} {padding} {len} encrypt, chunks {parts:?}"
                    );

                    let parts = random_partition(&mut rng, one_shot.len() / 16);
                    let decrypted = run_chunked(
                        transform(mode, padding, Direction::Decrypt)?,
                        &one_shot,
                        &parts,
                    )?;
                    assert_eq!(
                        decrypted, message,
                        "{mode} {padding} {len} decrypt, chunks {parts:?}"
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn iso10126_chunked_decrypt() -> Result<()> {
    let mut rng = rand::rng();
    for len in [16 * 300 + 5, 16 * 300] {
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        for mode in [ChainMode::Ecb, ChainMode::Cbc] {
            // random filler, so only decryption has a fixed expected output
            let ciphertext = transform(mode, Padding::Iso10126, Direction::Encrypt)?
                .transform_final_block(&message)?;
            assert_eq!(ciphertext.len(), (len / 16 + 1) * 16);

            for _ in 0..5 {
                let parts = random_partition(&mut rng, ciphertext.len() / 16);
                let decrypted = run_chunked(
                    transform(mode, Padding::Iso10126, Direction::Decrypt)?,
                    &ciphertext,
                    &parts,
                )?;
                assert_eq!(decrypted, message, "{mode} {len} decrypt, chunks {parts:?}");
            }
        }
    }
    Ok(())
}

#[test]
fn unpadded_chunked_equals_one_shot() -> Result<()> {
    let message: Vec<u8> = (0..16 * 300).map(|i| (i % 251) as u8).collect();
    for mode in [ChainMode::Ecb, ChainMode::Cbc] {
        let one_shot =
            transform(mode, Padding::None, Direction::Encrypt)?.transform_final_block(&message)?;
        assert_eq!(one_shot.len(), message.len());

        let chunked = run_chunked(
            transform(mode, Padding::None, Direction::Encrypt)?,
            &message,
            &[1, 0, 3, 256, 40],
        )?;
        assert_eq!(chunked, one_shot);

        let decrypted = run_chunked(
            transform(mode, Padding::None, Direction::Decrypt)?,
            &one_shot,
            &[299, 1],
        )?;
        assert_eq!(decrypted, message);
    }
    Ok(())
}

#[test]
fn writer_matches_transform() -> io::Result<()> {
    let mut rng = rand::rng();
    let mut message = vec![0u8; 10_000];
    rng.fill_bytes(&mut message);

    let expected = transform(ChainMode::Cbc, Padding::Pkcs7, Direction::Encrypt)?
        .transform_final_block(&message)?;

    let mut writer = CryptoWriter::new(
        Vec::new(),
        transform(ChainMode::Cbc, Padding::Pkcs7, Direction::Encrypt)?,
    );
    let mut rest = &message[..];
    while !rest.is_empty() {
        let n = rng.random_range(1..=rest.len().min(777));
        writer.write_all(&rest[..n])?;
        rest = &rest[n..];
    }
    let ciphertext = writer.finish()?;
    assert_eq!(ciphertext, expected);

    let mut writer = CryptoWriter::new(
        Vec::new(),
        transform(ChainMode::Cbc, Padding::Pkcs7, Direction::Decrypt)?,
    );
    io::copy(&mut &ciphertext[..], &mut writer)?;
    assert_eq!(writer.finish()?, message);
    Ok(())
}

#[test]
fn envelope_round_trip() -> Result<()> {
    let key = Key::random(KeySize::Bits256)?;
    let message = b"envelope: IV prefix followed by CBC ciphertext";

    let sealed = seal(&key, Padding::Pkcs7, message)?;
    assert_eq!(sealed.len(), 16 + 48);

    // same as running the transform by hand with the stored IV
    let by_hand = AesTransform::builder()
        .key(key.as_bytes())
        .iv(&sealed[..16])
        .decryptor()?
        .transform_final_block(&sealed[16..])?;
    assert_eq!(by_hand, message);
    assert_eq!(open(&key, Padding::Pkcs7, &sealed)?, message);

    let other = Key::random(KeySize::Bits256)?;
    if let Ok(garbled) = open(&other, Padding::Pkcs7, &sealed) {
        assert_ne!(garbled, message);
    }

    assert!(matches!(
        open(&key, Padding::Pkcs7, &sealed[..10]),
        Err(Error::InvalidCiphertext { len: 10, .. })
    ));
    Ok(())
}

#[test]
fn password_keys() -> Result<()> {
    let a = derive_key_with(b"correct horse", b"", 1000, KeySize::Bits192)?;
    let b = derive_key_with(b"correct horse", b"", 1000, KeySize::Bits192)?;
    let c = derive_key_with(b"battery staple", b"", 1000, KeySize::Bits192)?;
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.size(), KeySize::Bits192);

    let sealed = seal(&a, Padding::Iso10126, b"derived")?;
    assert_eq!(open(&b, Padding::Iso10126, &sealed)?, b"derived");
    Ok(())
}
