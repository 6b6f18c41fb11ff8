//! Chosen-plaintext recovery of a secret suffix from an ECB encryption oracle.

mod byte_at_a_time;
mod oracle;

pub use byte_at_a_time::{
    ByteAtATime, ChosenCipherSet, MAX_BLOCK_SIZE, detect_block_size, detect_ecb,
};
pub use oracle::{DEFAULT_SECRET_B64, EcbSuffixOracle, EncryptionOracle};
