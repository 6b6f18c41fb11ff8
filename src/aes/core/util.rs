use super::Block;

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Multiply by x in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1, without branching on the high bit.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}
