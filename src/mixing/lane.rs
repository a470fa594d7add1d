//! scrypt ROMix: the memory-hard lane mixer.
//!
//! Two passes over a table of `N` blocks:
//!
//! 1. **Fill**: `V[i] = X; X = BlockMix(X)` for `i` in `0..N`.
//! 2. **Mix**: `j = Integerify(X) mod N; X = BlockMix(X ⊕ V[j])`, `N` times.
//!
//! Every step depends on the previous one, and the second pass reads the
//! table at data-dependent positions, so an attacker must either keep all `N`
//! blocks or recompute them on demand.

use zeroize::Zeroizing;

use super::block_mix::{block_mix, ScratchArena};
use crate::consts::SALSA_BLOCK_WORDS;
use crate::utils::xor_words;

/// Mixes one lane (`32 · block_size` words) in place with cost `cost`.
///
/// The memory table and scratch arena live only for this call and are
/// zeroed before release, including when unwinding.
///
/// # Panics
///
/// Panics if `block_size` is zero, if `cost` is not a power of two, or if
/// `lane.len() != 32 · block_size`.
/// [`ScryptParams::layout`](crate::ScryptParams::layout) guarantees both for
/// the orchestrated path.
pub fn mix_lane(lane: &mut [u32], cost: usize, block_size: usize) {
    assert!(block_size >= 1, "block size must be at least 1");
    assert!(cost.is_power_of_two(), "cost must be a power of two");
    let block_words = 2 * block_size * SALSA_BLOCK_WORDS;
    assert_eq!(lane.len(), block_words, "lane length must be 32 · r words");

    let mut arena = ScratchArena::new(block_size);
    let mut table = Zeroizing::new(vec![0u32; cost * block_words]);

    for entry in table.chunks_exact_mut(block_words) {
        entry.copy_from_slice(lane);
        block_mix(lane, &mut arena);
    }

    let mask = (cost - 1) as u64;
    for _ in 0..cost {
        let j = integerify(lane, mask);
        xor_words(lane, &table[j * block_words..(j + 1) * block_words]);
        block_mix(lane, &mut arena);
    }
}

/// Reads the first 64-bit little-endian word of the last sub-block and masks
/// it to a table index.
#[inline(always)]
fn integerify(block: &[u32], mask: u64) -> usize {
    let tail = block.len() - SALSA_BLOCK_WORDS;
    let wide = u64::from(block[tail]) | u64::from(block[tail + 1]) << 32;
    (wide & mask) as usize
}
