mod args;

use args::{Cli, Commands, CommonArgs};
use clap::Parser;
use log::{LevelFilter, debug, info};

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::time::Instant;

use aes_transform::{AesTransform, BLOCK_SIZE, CryptoWriter, Direction, Key, derive_key, random_iv};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input is shorter than the 16-byte IV prefix")]
    MissingIv,

    #[error(transparent)]
    Io(io::Error),

    #[error(transparent)]
    Aes(#[from] aes_transform::Error),
}

// CryptoWriter reports cipher failures as io::Error; surface them as the cipher error again
impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        if !e.get_ref().is_some_and(|inner| inner.is::<aes_transform::Error>()) {
            return CliError::Io(e);
        }
        let kind = e.kind();
        match e.into_inner().map(|inner| inner.downcast::<aes_transform::Error>()) {
            Some(Ok(aes)) => CliError::Aes(*aes),
            Some(Err(inner)) => CliError::Io(io::Error::new(kind, inner)),
            None => CliError::Io(kind.into()),
        }
    }
}

/// Byte counts of one finished run. `written` includes the IV prefix when encrypting.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    read: u64,
    written: usize,
}

fn main() {
    let args = Cli::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    if let Err(e) = aes_cli(args.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn aes_cli(command: Commands) -> Result<(), CliError> {
    let (common, direction) = match command {
        Commands::Encrypt(common) => (common, Direction::Encrypt),
        Commands::Decrypt(common) => (common, Direction::Decrypt),
    };
    let key = derive_key(&common.password, common.key_size)?;

    let start = Instant::now();
    let report = match direction {
        Direction::Encrypt => encrypt_file(&common, &key)?,
        Direction::Decrypt => decrypt_file(&common, &key)?,
    };

    info!("{} {} with {} padding", common.key_size, common.mode, common.padding);
    let verb = match direction {
        Direction::Encrypt => "Encrypted",
        Direction::Decrypt => "Decrypted",
    };
    println!(
        "{verb} {} bytes into {} bytes in {} ms",
        report.read,
        report.written,
        start.elapsed().as_millis()
    );
    Ok(())
}

/// Writes `IV || ciphertext` to the output path.
fn encrypt_file(common: &CommonArgs, key: &Key) -> Result<Report, CliError> {
    let mut reader = BufReader::new(File::open(&common.input)?);
    let iv = random_iv()?;

    let mut sealed = Vec::new();
    sealed.extend_from_slice(&iv);
    let encryptor = AesTransform::new(key, &iv, common.padding, common.mode, Direction::Encrypt)?;
    let mut writer = CryptoWriter::new(sealed, encryptor);
    let read = io::copy(&mut reader, &mut writer)?;
    let sealed = writer.finish()?;

    persist(common, &sealed)?;
    Ok(Report {
        read,
        written: sealed.len(),
    })
}

/// Reads `IV || ciphertext`. Nothing is written unless the final block decrypts and unpads.
fn decrypt_file(common: &CommonArgs, key: &Key) -> Result<Report, CliError> {
    let mut reader = BufReader::new(File::open(&common.input)?);

    // extract IV from the front of the file
    let mut iv = [0u8; BLOCK_SIZE];
    reader.read_exact(&mut iv).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CliError::MissingIv,
        _ => CliError::Io(e),
    })?;

    let decryptor = AesTransform::new(key, &iv, common.padding, common.mode, Direction::Decrypt)?;
    let mut writer = CryptoWriter::new(Vec::new(), decryptor);
    let read = io::copy(&mut reader, &mut writer)? + BLOCK_SIZE as u64;
    let plaintext = writer.finish()?;

    persist(common, &plaintext)?;
    Ok(Report {
        read,
        written: plaintext.len(),
    })
}

fn persist(common: &CommonArgs, data: &[u8]) -> Result<(), CliError> {
    let mut output = File::create(&common.output)?;
    output.write_all(data)?;
    output.flush()?;
    debug!("wrote {} bytes to {}", data.len(), common.output.display());
    Ok(())
}
