//! AES-128 round transforms for a single 16 byte block. Exports encrypt_block and decrypt_block.

pub mod constants;
mod decryption;
mod encryption;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One cipher block, stored column-major: byte `i` sits at row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];
