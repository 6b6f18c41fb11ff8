mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod schedule;
mod util;

pub use cipher::Cipher;
pub use self::core::{BLOCK_SIZE, Block, decrypt_block, encrypt_block};
pub use error::{Error, Result};
pub use key::{KEY_LEN, Key};
pub use modes::{
    decrypt_ecb_serial, encrypt_ecb_parallel, encrypt_ecb_partitioned, encrypt_ecb_serial,
};
pub use schedule::{KeySchedule, NUM_ROUNDS, SCHEDULE_WORDS};
pub use util::{pack_words, pkcs7_pad, pkcs7_unpad, unpack_words};
