//! Salsa20 core function.
//!
//! A pure, invertible-in-structure mixing function over a 16-word state. scrypt
//! uses the reduced-round Salsa20/8 variant as its block permutation; the round
//! count is a parameter so the full Salsa20/20 core can be checked as well.

use crate::consts::SALSA_BLOCK_WORDS;

#[inline(always)]
fn quarter_round(x: &mut [u32; SALSA_BLOCK_WORDS], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Applies `rounds` Salsa20 rounds to `input` and writes the feed-forward sum
/// `input + rounds(input)` into `output`.
///
/// `rounds` is expected to be even (one column round plus one row round per
/// double-round); an odd count is rounded down.
#[inline]
pub fn salsa20_core(
    rounds: usize,
    input: &[u32; SALSA_BLOCK_WORDS],
    output: &mut [u32; SALSA_BLOCK_WORDS],
) {
    let mut x = *input;

    for _ in 0..rounds / 2 {
        // Column round
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 5, 9, 13, 1);
        quarter_round(&mut x, 10, 14, 2, 6);
        quarter_round(&mut x, 15, 3, 7, 11);

        // Row round
        quarter_round(&mut x, 0, 1, 2, 3);
        quarter_round(&mut x, 5, 6, 7, 4);
        quarter_round(&mut x, 10, 11, 8, 9);
        quarter_round(&mut x, 15, 12, 13, 14);
    }

    for ((out, mixed), original) in output.iter_mut().zip(x.iter()).zip(input.iter()) {
        *out = mixed.wrapping_add(*original);
    }
}
