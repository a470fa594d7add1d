//! scrypt BlockMix.
//!
//! Diffuses a `2r`-sub-block input through a chain of Salsa20/8 applications
//! and writes the results back in even/odd interleaved order.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{SALSA20_ROUNDS, SALSA_BLOCK_WORDS};
use crate::crypto::salsa::salsa20_core;

/// Scratch space for [`block_mix`], sized once from the block size.
///
/// One arena is owned by each lane mixer invocation and lent to every
/// BlockMix call, so the inner loop never allocates. Contents are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ScratchArena {
    #[zeroize(skip)]
    block_size: usize,
    /// Running accumulator `X`.
    x: [u32; SALSA_BLOCK_WORDS],
    /// `X ⊕ B[i]`, the permutation input.
    t: [u32; SALSA_BLOCK_WORDS],
    /// Interleaved output `Y` (`32 · r` words).
    y: Vec<u32>,
}

impl ScratchArena {
    /// Allocates scratch space for block size `r`.
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size,
            x: [0; SALSA_BLOCK_WORDS],
            t: [0; SALSA_BLOCK_WORDS],
            y: vec![0; 2 * block_size * SALSA_BLOCK_WORDS],
        }
    }

    /// Block size `r` this arena was sized for.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Mixes `block` (`32 · r` words) in place.
///
/// `X` starts as the last sub-block. For each sub-block `B[i]`,
/// `X = Salsa20/8(X ⊕ B[i])`, and `X` is written to output position `i / 2`
/// for even `i` and `r + i / 2` for odd `i`.
///
/// # Panics
///
/// Panics if the arena was sized for a block size of zero or if
/// `block.len()` differs from `32 · arena.block_size()`.
pub fn block_mix(block: &mut [u32], arena: &mut ScratchArena) {
    assert!(arena.block_size >= 1, "block size must be at least 1");
    let half = arena.block_size * SALSA_BLOCK_WORDS;
    assert_eq!(block.len(), 2 * half, "block length must be 32 · r words");

    arena.x.copy_from_slice(&block[block.len() - SALSA_BLOCK_WORDS..]);

    for (i, sub_block) in block.chunks_exact(SALSA_BLOCK_WORDS).enumerate() {
        for ((t, x), b) in arena.t.iter_mut().zip(arena.x.iter()).zip(sub_block) {
            *t = x ^ b;
        }
        salsa20_core(SALSA20_ROUNDS, &arena.t, &mut arena.x);

        let dst = (i / 2) * SALSA_BLOCK_WORDS + (i % 2) * half;
        arena.y[dst..dst + SALSA_BLOCK_WORDS].copy_from_slice(&arena.x);
    }

    block.copy_from_slice(&arena.y);
}
