use rand::rand_core;
use thiserror::Error;

/// Crate Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a key from a slice that is not 16 bytes long.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Buffer handed to the ECB driver is not a whole number of 16-byte blocks.
    #[error("invalid input length: {len} bytes ({context})")]
    InvalidLength { len: usize, context: &'static str },

    /// PKCS#7 padding on a decrypted buffer was malformed.
    #[error("invalid padding on {len} byte buffer ({context})")]
    InvalidPadding { len: usize, context: &'static str },

    /// Parallel ECB was asked to split work across zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),

    /// Oracle secret was not valid standard base64.
    #[error("invalid base64 secret: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Oracle output never grew while the prefix was extended.
    #[error("oracle output did not grow within {max} prefix bytes")]
    BlockSizeNotFound { max: usize },

    /// Oracle output showed no repeated blocks for a repeated input.
    #[error("oracle does not appear to encrypt in ECB mode")]
    NotEcb,

    /// No candidate byte reproduced the reference block. Either the oracle changed
    /// key between calls or it is not a prefix-controlled ECB oracle.
    #[error("no candidate byte matched at secret position {position}")]
    NoCandidate { position: usize },
}
