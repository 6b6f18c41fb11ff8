use crate::aes::core::{BLOCK_SIZE, Block};
use crate::aes::error::*;

/// Packs a block into four column words, most significant byte first.
#[inline(always)]
pub fn pack_words(block: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, col) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([col[0], col[1], col[2], col[3]]);
    }
    words
}

/// Inverse of [`pack_words`].
#[inline(always)]
pub fn unpack_words(words: &[u32; 4]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (col, word) in block.chunks_exact_mut(4).zip(words) {
        col.copy_from_slice(&word.to_be_bytes());
    }
    block
}

/// PKCS#7 padding to a multiple of 16 bytes. Always appends between 1 and 16 bytes, so an
/// already aligned input gains a full block of `0x10`.
pub fn pkcs7_pad(input: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - input.len() % BLOCK_SIZE;

    let mut out = Vec::with_capacity(input.len() + pad_len);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_len, pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding.
pub fn pkcs7_unpad(input: &mut Vec<u8>) -> Result<()> {
    let pad = match input.last() {
        Some(&b) => b as usize,
        None => {
            return Err(Error::InvalidPadding {
                len: 0,
                context: "attempted to unpad empty input",
            });
        }
    };

    if input.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidPadding {
            len: input.len(),
            context: "padded input is not a multiple of 16 bytes",
        });
    }

    if pad == 0 || pad > BLOCK_SIZE {
        return Err(Error::InvalidPadding {
            len: input.len(),
            context: "invalid padding length specified by last byte",
        });
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidPadding {
            len: input.len(),
            context: "invalid PKCS#7 padding format",
        });
    }

    input.truncate(start);
    Ok(())
}
