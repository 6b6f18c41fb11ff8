use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::aes::{Cipher, Key, Result};

/// Base64 of the default unknown suffix.
pub const DEFAULT_SECRET_B64: &str = "Um9sbGluJyBpbiBteSA1LjAKV2l0aCBteSByYWctdG9wIGRvd24gc28gbXkg\
aGFpciBjYW4gYmxvdwpUaGUgZ2lybGllcyBvbiBzdGFuZGJ5IHdhdmluZyBq\
dXN0IHRvIHNheSBoaQpEaWQgeW91IHN0b3A/IE5vLCBJIGp1c3QgZHJvdmUg\
YnkK";

/// A black box that encrypts attacker-controlled input. The attack only ever talks to this trait.
pub trait EncryptionOracle {
    /// Encrypts `prefix` together with whatever the oracle chooses to add.
    fn encrypt(&self, prefix: &[u8]) -> Result<Vec<u8>>;
}

/// Computes `AES-128-ECB(prefix || secret || PKCS#7, key)`.
///
/// Key and secret are fixed for the lifetime of the oracle, which the attack's cross-call
/// comparisons rely on. Neither is exposed.
pub struct EcbSuffixOracle {
    cipher: Cipher,
    secret: Vec<u8>,
    queries: AtomicUsize,
}

impl EcbSuffixOracle {
    /// Oracle over `secret` with a fresh random key.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::with_key(&Key::random()?, secret))
    }

    /// Oracle over `secret` with a caller-chosen key.
    pub fn with_key(key: &Key, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            cipher: Cipher::new(key),
            secret: secret.into(),
            queries: AtomicUsize::new(0),
        }
    }

    /// Oracle over a standard base64 secret with a fresh random key.
    pub fn from_base64(secret_b64: &str) -> Result<Self> {
        let secret = STANDARD.decode(secret_b64)?;
        Self::new(secret)
    }

    /// Number of `encrypt` calls served so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl EncryptionOracle for EcbSuffixOracle {
    fn encrypt(&self, prefix: &[u8]) -> Result<Vec<u8>> {
        self.queries.fetch_add(1, Ordering::Relaxed);

        let mut plaintext = Vec::with_capacity(prefix.len() + self.secret.len());
        plaintext.extend_from_slice(prefix);
        plaintext.extend_from_slice(&self.secret);
        self.cipher.encrypt_ecb(&plaintext)
    }
}

impl<O: EncryptionOracle + ?Sized> EncryptionOracle for &O {
    fn encrypt(&self, prefix: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes::Error;

    #[test]
    fn output_length_follows_padding() -> Result<()> {
        let oracle = EcbSuffixOracle::new(b"hello".to_vec())?;

        for prefix_len in 0..40 {
            let ct = oracle.encrypt(&vec![0u8; prefix_len])?;
            let expected = (prefix_len + 5 + 1).div_ceil(16) * 16;
            assert_eq!(ct.len(), expected, "prefix of {prefix_len} bytes");
        }
        assert_eq!(oracle.queries(), 40);
        Ok(())
    }

    #[test]
    fn key_is_fixed_across_calls() -> Result<()> {
        let oracle = EcbSuffixOracle::new(b"some secret".to_vec())?;
        assert_eq!(oracle.encrypt(b"abc")?, oracle.encrypt(b"abc")?);
        Ok(())
    }

    #[test]
    fn matches_direct_encryption() -> Result<()> {
        let key = Key::random()?;
        let oracle = EcbSuffixOracle::with_key(&key, b" world".to_vec());
        let expected = Cipher::new(&key).encrypt_ecb(b"hello world")?;
        assert_eq!(oracle.encrypt(b"hello")?, expected);
        Ok(())
    }

    #[test]
    fn decodes_default_secret() -> Result<()> {
        let oracle = EcbSuffixOracle::from_base64(DEFAULT_SECRET_B64)?;
        // 138 secret bytes pad to 144
        assert_eq!(oracle.encrypt(b"")?.len(), 144);
        Ok(())
    }

    #[test]
    fn rejects_bad_base64() {
        assert!(matches!(
            EcbSuffixOracle::from_base64("not base64!"),
            Err(Error::Base64(_))
        ));
    }
}
