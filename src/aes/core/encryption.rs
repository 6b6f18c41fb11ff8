use super::Block;
use super::constants::SBOX;
use super::util::{add_round_key, dbl};
use crate::aes::schedule::NUM_ROUNDS;

/// Core AES-128 encryption. Encrypts one block under the 11 round keys of a key schedule.
#[inline(always)]
pub fn encrypt_block(plaintext: &Block, round_keys: &[Block; NUM_ROUNDS + 1]) -> Block {
    let mut state = *plaintext;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..NUM_ROUNDS] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[NUM_ROUNDS]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step. Row `r` rotates left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut Block) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix in GF(2^8).
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (col[0], col[1], col[2], col[3]);
        col[0] = dbl(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + 1c + 1d */
        col[1] = dbl(b ^ c) ^ c ^ d ^ a; /* 1a + 2b + 3c + 1d */
        col[2] = dbl(c ^ d) ^ d ^ a ^ b; /* 1a + 1b + 2c + 3d */
        col[3] = dbl(d ^ a) ^ a ^ b ^ c; /* 3a + 1b + 1c + 2d */
    }
}
