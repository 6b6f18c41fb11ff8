//! Byte-at-a-time recovery of an unknown suffix from an ECB oracle.
//!
//! With `k` filler bytes in front, the first unknown byte that lands in the last slot of a block
//! is the one at position `block_size - 1 - k` (mod `block_size`). Encrypting the fifteen bytes
//! that precede it plus each of the 256 candidates reproduces that ciphertext block exactly once,
//! because ECB maps equal plaintext blocks to equal ciphertext blocks.

use crate::aes::{Error, Result};
use crate::attack::oracle::EncryptionOracle;

/// Longest prefix tried while looking for the block size.
pub const MAX_BLOCK_SIZE: usize = 256;

/// Value used for prefix filler. Any value works.
const FILLER: u8 = 0;

/// Reference ciphertexts, one per prefix length `0..block_size`, all from the same oracle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChosenCipherSet {
    block_size: usize,
    ciphertexts: Vec<Vec<u8>>,
}

impl ChosenCipherSet {
    /// Queries `oracle` once for each filler prefix length from 0 to `block_size - 1`.
    pub fn build<O: EncryptionOracle + ?Sized>(oracle: &O, block_size: usize) -> Result<Self> {
        let mut prefix = Vec::with_capacity(block_size);
        let mut ciphertexts = Vec::with_capacity(block_size);
        for _ in 0..block_size {
            ciphertexts.push(oracle.encrypt(&prefix)?);
            prefix.push(FILLER);
        }

        Ok(Self {
            block_size,
            ciphertexts,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Ciphertext produced with `prefix_len` filler bytes.
    pub fn get(&self, prefix_len: usize) -> Option<&[u8]> {
        self.ciphertexts.get(prefix_len).map(Vec::as_slice)
    }

    /// The block of the `prefix_len` ciphertext starting at byte `offset`.
    fn block(&self, prefix_len: usize, offset: usize) -> Option<&[u8]> {
        self.get(prefix_len)?.get(offset..offset + self.block_size)
    }

    /// Bytes of ciphertext covering the suffix with no prefix: secret plus padding.
    pub fn span(&self) -> usize {
        self.ciphertexts.first().map_or(0, Vec::len)
    }
}

/// Grows a filler prefix one byte at a time until the oracle output grows. The jump is the
/// block size.
pub fn detect_block_size<O: EncryptionOracle + ?Sized>(oracle: &O) -> Result<usize> {
    let base = oracle.encrypt(&[])?.len();

    let mut prefix = Vec::with_capacity(MAX_BLOCK_SIZE);
    for _ in 0..MAX_BLOCK_SIZE {
        prefix.push(FILLER);
        let len = oracle.encrypt(&prefix)?.len();
        if len > base {
            return Ok(len - base);
        }
    }

    Err(Error::BlockSizeNotFound {
        max: MAX_BLOCK_SIZE,
    })
}

/// Encrypts three blocks of filler and reports whether any two adjacent ciphertext blocks are
/// equal, which ECB guarantees and chained modes practically never produce.
pub fn detect_ecb<O: EncryptionOracle + ?Sized>(oracle: &O, block_size: usize) -> Result<bool> {
    if block_size == 0 {
        return Err(Error::InvalidLength {
            len: 0,
            context: "block size must be non-zero",
        });
    }
    let ct = oracle.encrypt(&vec![FILLER; 3 * block_size])?;
    let blocks: Vec<&[u8]> = ct.chunks_exact(block_size).collect();
    Ok(blocks.windows(2).any(|pair| pair[0] == pair[1]))
}

/// The attack. Holds the oracle (usually by reference) and the block size it works in.
///
/// ## Examples
/// ```
/// # fn main() -> aesbreak::Result<()> {
/// use aesbreak::{ByteAtATime, EcbSuffixOracle};
///
/// let oracle = EcbSuffixOracle::new(b"hello".to_vec())?;
/// let attack = ByteAtATime::discover(&oracle)?;
/// assert_eq!(attack.recover_secret()?, b"hello");
/// # Ok(())
/// # }
/// ```
pub struct ByteAtATime<O> {
    oracle: O,
    block_size: usize,
}

impl<O: EncryptionOracle> ByteAtATime<O> {
    /// Attack with a known block size.
    pub fn new(oracle: O, block_size: usize) -> Result<Self> {
        if block_size < 2 {
            return Err(Error::InvalidLength {
                len: block_size,
                context: "block size must be at least 2 bytes",
            });
        }
        Ok(Self { oracle, block_size })
    }

    /// Attack with the block size read off the oracle. Fails with [`Error::NotEcb`] if
    /// repeated input blocks do not repeat in the output.
    pub fn discover(oracle: O) -> Result<Self> {
        let block_size = detect_block_size(&oracle)?;
        if !detect_ecb(&oracle, block_size)? {
            return Err(Error::NotEcb);
        }
        Self::new(oracle, block_size)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Builds the reference table for this oracle.
    pub fn chosen_ciphers(&self) -> Result<ChosenCipherSet> {
        ChosenCipherSet::build(&self.oracle, self.block_size)
    }

    /// Tries every byte value after `window` and returns the one whose first ciphertext block
    /// equals `reference`, or `None` if no value does.
    pub fn recover_byte(&self, window: &[u8], reference: &[u8]) -> Result<Option<u8>> {
        let bs = self.block_size;
        if window.len() + 1 != bs || reference.len() != bs {
            return Err(Error::InvalidLength {
                len: window.len() + 1,
                context: "probe window and reference must cover exactly one block",
            });
        }

        let mut probe = Vec::with_capacity(bs);
        probe.extend_from_slice(window);
        probe.push(0);

        for candidate in 0..=u8::MAX {
            probe[bs - 1] = candidate;
            let ct = self.oracle.encrypt(&probe)?;
            if ct.get(..bs) == Some(reference) {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// Recovers the whole suffix, building a fresh reference table first.
    pub fn recover_secret(&self) -> Result<Vec<u8>> {
        let table = self.chosen_ciphers()?;
        self.recover_secret_with(&table)
    }

    /// Recovers the whole suffix against an existing reference table.
    ///
    /// Walks the ciphertext one block at a time and each block from its first byte to its last.
    /// The first padding byte always matches as `0x01`, and the byte after it never matches.
    /// That `0x01` is dropped from the result. A miss anywhere else means the oracle is not
    /// consistent with `table` and is reported as [`Error::NoCandidate`].
    pub fn recover_secret_with(&self, table: &ChosenCipherSet) -> Result<Vec<u8>> {
        let bs = self.block_size;
        if table.block_size() != bs {
            return Err(Error::InvalidLength {
                len: table.block_size(),
                context: "reference table built for a different block size",
            });
        }

        let span = table.span();
        let mut recovered = Vec::with_capacity(span);
        // last bs - 1 bytes of (filler || recovered)
        let mut window = vec![FILLER; bs - 1];

        for offset in (0..span).step_by(bs) {
            for prefix_len in (0..bs).rev() {
                let position = recovered.len();
                let reference = table
                    .block(prefix_len, offset)
                    .ok_or(Error::NoCandidate { position })?;

                match self.recover_byte(&window, reference)? {
                    Some(byte) => {
                        recovered.push(byte);
                        window.rotate_left(1);
                        window[bs - 2] = byte;
                    }
                    None => return strip_padding_byte(recovered),
                }
            }
        }

        strip_padding_byte(recovered)
    }
}

fn strip_padding_byte(mut recovered: Vec<u8>) -> Result<Vec<u8>> {
    match recovered.last() {
        Some(0x01) => {
            recovered.pop();
            Ok(recovered)
        }
        _ => Err(Error::NoCandidate {
            position: recovered.len(),
        }),
    }
}
