use rayon::prelude::*;

use crate::aes::core::{BLOCK_SIZE, Block, decrypt_block, encrypt_block};
use crate::aes::error::*;
use crate::aes::schedule::{KeySchedule, NUM_ROUNDS};

/// ECB encryption in place, one block after another.
///
/// Identical plaintext blocks always produce identical ciphertext blocks under the same key.
pub fn encrypt_ecb_serial(buf: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    check_block_multiple(buf, "ECB plaintext not a multiple of 16 bytes")?;
    encrypt_range(buf, schedule.round_keys());
    Ok(())
}

/// ECB encryption in place, split into one contiguous range per rayon worker thread.
pub fn encrypt_ecb_parallel(buf: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    encrypt_ecb_partitioned(buf, schedule, rayon::current_num_threads())
}

/// ECB encryption in place across `workers` contiguous, non-overlapping ranges of
/// `ceil(blocks / workers)` blocks each. The final range may be short.
///
/// Returns only once every range has been encrypted. Output is byte-for-byte identical to
/// [`encrypt_ecb_serial`] for any worker count.
pub fn encrypt_ecb_partitioned(
    buf: &mut [u8],
    schedule: &KeySchedule,
    workers: usize,
) -> Result<()> {
    check_block_multiple(buf, "ECB plaintext not a multiple of 16 bytes")?;
    if workers == 0 {
        return Err(Error::InvalidWorkerCount);
    }

    let num_blocks = buf.len() / BLOCK_SIZE;
    if num_blocks == 0 {
        return Ok(());
    }

    let range_len = num_blocks.div_ceil(workers) * BLOCK_SIZE;
    let round_keys = schedule.round_keys();

    // each range is exclusively borrowed by one task; par_chunks_mut joins them all
    buf.par_chunks_mut(range_len)
        .for_each(|range| encrypt_range(range, round_keys));

    Ok(())
}

/// ECB decryption in place. No padding is removed.
pub fn decrypt_ecb_serial(buf: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    check_block_multiple(buf, "ECB ciphertext not a multiple of 16 bytes")?;

    let round_keys = schedule.round_keys();
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let block: &Block = (&*chunk).try_into().unwrap(); // safe unwrap, exact chunks of 16
        let dec = decrypt_block(block, round_keys);
        chunk.copy_from_slice(&dec);
    }

    Ok(())
}

#[inline(always)]
fn encrypt_range(range: &mut [u8], round_keys: &[Block; NUM_ROUNDS + 1]) {
    for chunk in range.chunks_exact_mut(BLOCK_SIZE) {
        let block: &Block = (&*chunk).try_into().unwrap(); // safe unwrap, exact chunks of 16
        let enc = encrypt_block(block, round_keys);
        chunk.copy_from_slice(&enc);
    }
}

fn check_block_multiple(buf: &[u8], context: &'static str) -> Result<()> {
    if buf.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength {
            len: buf.len(),
            context,
        });
    }
    Ok(())
}
