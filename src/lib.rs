//! AES-128 written from first principles, an ECB mode driver with serial and parallel paths,
//! and the byte-at-a-time chosen-plaintext attack that recovers a secret suffix from any ECB
//! encryption oracle without learning its key.

mod aes;
mod attack;

pub use aes::{
    BLOCK_SIZE, Block, Cipher, Error, KEY_LEN, Key, KeySchedule, NUM_ROUNDS, Result,
    SCHEDULE_WORDS, decrypt_block, decrypt_ecb_serial, encrypt_block, encrypt_ecb_parallel,
    encrypt_ecb_partitioned, encrypt_ecb_serial, pack_words, pkcs7_pad, pkcs7_unpad,
    unpack_words,
};
pub use attack::{
    ByteAtATime, ChosenCipherSet, DEFAULT_SECRET_B64, EcbSuffixOracle, EncryptionOracle,
    MAX_BLOCK_SIZE, detect_block_size, detect_ecb,
};
