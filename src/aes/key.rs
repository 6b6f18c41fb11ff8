//! Defines the [`Key`] struct, which holds a valid AES-128 key.
//! Keys can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aes::error::{Error, Result};

/// Key length in bytes. Only AES-128 is supported.
pub const KEY_LEN: usize = 16;

/// Contains a valid 128-bit AES key. Can be instantiated with a random key, or built from
/// a slice of exactly 16 bytes. Immutable once created.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher) or a
/// [KeySchedule](crate::KeySchedule).
///
/// ## Examples
/// ```
/// # fn main() -> aesbreak::Result<()> {
/// use aesbreak::Key;
///
/// let random = Key::random()?;
/// assert_eq!(random.as_bytes().len(), 16);
///
/// let key_bytes: [u8; 16] = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(key.as_bytes(), &key_bytes);
///
/// // anything other than 16 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..12]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }
}
