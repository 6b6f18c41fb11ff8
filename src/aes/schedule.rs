use crate::aes::core::Block;
use crate::aes::core::constants::{RCON, SBOX};
use crate::aes::key::Key;
use crate::aes::util::{pack_words, unpack_words};

/// Number of rounds for AES-128.
pub const NUM_ROUNDS: usize = 10;
/// Words produced by the AES-128 key schedule, including the initial key.
pub const SCHEDULE_WORDS: usize = 4 * (NUM_ROUNDS + 1);

/// Expanded AES-128 key. Holds the 44 schedule words and the 11 round keys derived from them.
///
/// Deterministic given the key and read-only once built, so a single schedule can be shared
/// by reference across every worker encrypting under that key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeySchedule {
    words: [u32; SCHEDULE_WORDS],
    round_keys: [Block; NUM_ROUNDS + 1],
}

impl KeySchedule {
    /// AES key schedule.
    pub fn new(key: &Key) -> Self {
        let words = expand_key(key);

        let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
        for (round_key, w) in round_keys.iter_mut().zip(words.chunks_exact(4)) {
            *round_key = unpack_words(&[w[0], w[1], w[2], w[3]]);
        }

        Self { words, round_keys }
    }

    /// Round keys in the order encryption consumes them. Index 0 is the key itself.
    pub fn round_keys(&self) -> &[Block; NUM_ROUNDS + 1] {
        &self.round_keys
    }

    /// Raw schedule words `w[0..44]`.
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.words
    }
}

// Names follow FIPS-197: Nk = 4 key words, w = schedule, temp = running word.
fn expand_key(key: &Key) -> [u32; SCHEDULE_WORDS] {
    let key = key.as_bytes();
    let mut w = [0u32; SCHEDULE_WORDS];

    w[..4].copy_from_slice(&pack_words(key));

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ ((RCON[i / 4] as u32) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    w
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}
