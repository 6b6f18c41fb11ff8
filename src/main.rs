mod args;

use args::{AttackArgs, Cli, Commands, CommonArgs, EncryptArgs};
use clap::Parser;

use std::fs;
use std::time::Instant;

use aesbreak::{ByteAtATime, Cipher, DEFAULT_SECRET_B64, EcbSuffixOracle, Key};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aesbreak::Error),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => encrypt(enc),
        Commands::Decrypt(common) => decrypt(common),
        Commands::Attack(attack) => attack_oracle(attack),
    }
}

fn encrypt(enc: EncryptArgs) -> Result<(), CliError> {
    let plaintext = fs::read(&enc.common.input)?;

    // read or generate key
    let key = if enc.gen_key {
        let key = Key::random()?;
        fs::write(&enc.common.key, key.as_bytes())?;
        key
    } else {
        Key::try_from_slice(&fs::read(&enc.common.key)?)?
    };
    let cipher = Cipher::new(&key);

    let start = Instant::now();
    let ciphertext = if enc.serial {
        let mut buf = aesbreak::pkcs7_pad(&plaintext);
        cipher.encrypt_blocks(&mut buf)?;
        buf
    } else {
        cipher.encrypt_ecb(&plaintext)?
    };
    let duration = start.elapsed();

    fs::write(&enc.common.output, &ciphertext)?;
    println!(
        "Encrypted {} bytes in {} ms",
        plaintext.len(),
        duration.as_millis()
    );
    Ok(())
}

fn decrypt(common: CommonArgs) -> Result<(), CliError> {
    let ciphertext = fs::read(&common.input)?;
    let key = Key::try_from_slice(&fs::read(&common.key)?)?;

    let start = Instant::now();
    let plaintext = Cipher::new(&key).decrypt_ecb(&ciphertext)?;
    let duration = start.elapsed();

    fs::write(&common.output, &plaintext)?;
    println!(
        "Decrypted {} bytes in {} ms",
        plaintext.len(),
        duration.as_millis()
    );
    Ok(())
}

fn attack_oracle(args: AttackArgs) -> Result<(), CliError> {
    let oracle = match (args.secret_file, args.secret_b64) {
        (Some(path), _) => EcbSuffixOracle::new(fs::read(path)?)?,
        (None, Some(b64)) => EcbSuffixOracle::from_base64(&b64)?,
        (None, None) => EcbSuffixOracle::from_base64(DEFAULT_SECRET_B64)?,
    };

    let start = Instant::now();
    let attack = ByteAtATime::discover(&oracle)?;
    println!("Block size: {} bytes (ECB confirmed)", attack.block_size());

    let secret = attack.recover_secret()?;
    let duration = start.elapsed();

    println!(
        "Recovered {} bytes with {} oracle queries in {} ms:",
        secret.len(),
        oracle.queries(),
        duration.as_millis()
    );
    println!("{}", String::from_utf8_lossy(&secret));
    Ok(())
}
