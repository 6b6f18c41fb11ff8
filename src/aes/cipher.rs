use crate::aes::error::Result;
use crate::aes::key::Key;
use crate::aes::modes::util::PARALLEL_THRESHOLD;
use crate::aes::modes::*;
use crate::aes::schedule::KeySchedule;
use crate::aes::util::{pkcs7_pad, pkcs7_unpad};

/// Provides AES-128 [ECB](crate::Cipher::encrypt_ecb) encryption and decryption.
/// Instantiated with a [Key], which is expanded into round keys and stored in the instance.
///
/// ## Examples
/// ```
/// # fn main() -> aesbreak::Result<()> {
/// use aesbreak::{Cipher, Key};
///
/// let cipher = Cipher::new(&Key::random()?);
/// let ciphertext = cipher.encrypt_ecb(b"YELLOW SUBMARINEYELLOW SUBMARINE")?;
///
/// // identical plaintext blocks leak through as identical ciphertext blocks
/// assert_eq!(ciphertext[..16], ciphertext[16..32]);
/// assert_eq!(cipher.decrypt_ecb(&ciphertext)?, b"YELLOW SUBMARINEYELLOW SUBMARINE");
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    schedule: KeySchedule,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: KeySchedule::new(key),
        }
    }

    /// Getter for the expanded key.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// **Electronic codebook** encryption.
    ///
    /// PKCS#7 pads the plaintext, then encrypts each 16-byte block entirely independently.
    /// Inputs larger than 4 KiB are encrypted in parallel.
    /// **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut buf = pkcs7_pad(plaintext);
        if buf.len() > PARALLEL_THRESHOLD {
            encrypt_ecb_parallel(&mut buf, &self.schedule)?;
        } else {
            encrypt_ecb_serial(&mut buf, &self.schedule)?;
        }
        Ok(buf)
    }

    /// **Electronic codebook** decryption. Validates and removes PKCS#7 padding.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut buf = ciphertext.to_vec();
        decrypt_ecb_serial(&mut buf, &self.schedule)?;
        pkcs7_unpad(&mut buf)?;
        Ok(buf)
    }

    /// ECB encryption of a block-aligned buffer in place, without padding.
    pub fn encrypt_blocks(&self, buf: &mut [u8]) -> Result<()> {
        encrypt_ecb_serial(buf, &self.schedule)
    }

    /// ECB decryption of a block-aligned buffer in place, without unpadding.
    pub fn decrypt_blocks(&self, buf: &mut [u8]) -> Result<()> {
        decrypt_ecb_serial(buf, &self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::aes::error::Error;

    #[test]
    fn round_trip_across_threshold() -> Result<()> {
        let cipher = Cipher::new(&Key::random()?);
        let mut rng = rand::rng();

        let lengths = [
            0,
            1,
            15,
            16,
            17,
            PARALLEL_THRESHOLD - 1,
            PARALLEL_THRESHOLD,
            3 * PARALLEL_THRESHOLD + 5,
        ];
        for len in lengths {
            let mut plaintext = vec![0u8; len];
            rng.fill_bytes(&mut plaintext);

            let ciphertext = cipher.encrypt_ecb(&plaintext)?;
            assert_eq!(ciphertext.len(), (len / 16 + 1) * 16);
            assert_eq!(cipher.decrypt_ecb(&ciphertext)?, plaintext);
        }
        Ok(())
    }

    #[test]
    fn parallel_dispatch_matches_block_api() -> Result<()> {
        let cipher = Cipher::new(&Key::random()?);
        let plaintext = vec![0x5au8; 2 * PARALLEL_THRESHOLD];

        let ciphertext = cipher.encrypt_ecb(&plaintext)?;

        let mut expected = pkcs7_pad(&plaintext);
        cipher.encrypt_blocks(&mut expected)?;
        assert_eq!(ciphertext, expected);
        Ok(())
    }

    #[test]
    fn decrypt_rejects_bad_input() -> Result<()> {
        let cipher = Cipher::new(&Key::random()?);

        assert!(matches!(
            cipher.decrypt_ecb(&[0u8; 20]),
            Err(Error::InvalidLength { len: 20, .. })
        ));
        assert!(matches!(
            cipher.decrypt_ecb(&[]),
            Err(Error::InvalidPadding { len: 0, .. })
        ));
        Ok(())
    }

    #[test]
    fn block_api_is_unpadded() -> Result<()> {
        let cipher = Cipher::new(&Key::random()?);
        let mut buf = *b"YELLOW SUBMARINE";
        cipher.encrypt_blocks(&mut buf)?;
        assert_ne!(&buf, b"YELLOW SUBMARINE");
        cipher.decrypt_blocks(&mut buf)?;
        assert_eq!(&buf, b"YELLOW SUBMARINE");
        Ok(())
    }
}
