//! tests/mixing_tests.rs
//! BlockMix interleave, ROMix behavior and lane independence

mod common;

use common::{TEST_PASSWORD, TEST_SALT};
use scrypt_rs::consts::SALSA20_ROUNDS;
use scrypt_rs::crypto::kdf::pbkdf2::derive_pbkdf2_sha256;
use scrypt_rs::crypto::salsa::salsa20_core;
use scrypt_rs::mixing::{block_mix, mix_lane, ScratchArena};
use scrypt_rs::utils::{le_bytes_from_u32, u32_from_le_bytes};
use scrypt_rs::{effective_salt, ScryptParams};

fn seeded_block(block_size: usize, seed: u32) -> Vec<u32> {
    (0..32 * block_size as u32)
        .map(|i| i.wrapping_mul(0x0101_0101).wrapping_add(seed).rotate_left(i % 32))
        .collect()
}

fn to_words(bytes: &[u8]) -> Vec<u32> {
    (0..bytes.len() / 4).map(|i| u32_from_le_bytes(bytes, i * 4)).collect()
}

fn to_bytes(words: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0u8; words.len() * 4];
    for (i, word) in words.iter().enumerate() {
        le_bytes_from_u32(*word, &mut bytes, i * 4);
    }
    bytes
}

#[test]
fn block_mix_interleaves_even_and_odd_sub_blocks() {
    let r = 3;
    let input = seeded_block(r, 7);

    // Reference chain: X = B[2r-1]; X = Salsa(X ^ B[i]) for each sub-block
    let mut x: [u32; 16] = input[input.len() - 16..].try_into().unwrap();
    let mut chain = Vec::new();
    for sub_block in input.chunks_exact(16) {
        let t: [u32; 16] = core::array::from_fn(|k| x[k] ^ sub_block[k]);
        salsa20_core(SALSA20_ROUNDS, &t, &mut x);
        chain.push(x);
    }

    let mut block = input.clone();
    let mut arena = ScratchArena::new(r);
    block_mix(&mut block, &mut arena);

    for i in 0..r {
        assert_eq!(block[i * 16..(i + 1) * 16], chain[2 * i], "even sub-block {i}");
        assert_eq!(
            block[(r + i) * 16..(r + i + 1) * 16],
            chain[2 * i + 1],
            "odd sub-block {i}"
        );
    }
}

#[test]
fn scratch_arena_is_reusable() {
    let mut arena = ScratchArena::new(2);
    assert_eq!(arena.block_size(), 2);

    let mut a = seeded_block(2, 1);
    let mut b = seeded_block(2, 1);
    block_mix(&mut a, &mut arena);
    block_mix(&mut a, &mut arena);

    let mut fresh = ScratchArena::new(2);
    block_mix(&mut b, &mut fresh);
    let mut fresh = ScratchArena::new(2);
    block_mix(&mut b, &mut fresh);

    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "block length must be 32 · r words")]
fn block_mix_rejects_mismatched_arena() {
    let mut block = seeded_block(2, 0);
    let mut arena = ScratchArena::new(1);
    block_mix(&mut block, &mut arena);
}

#[test]
#[should_panic(expected = "block size must be at least 1")]
fn block_mix_rejects_zero_block_size() {
    let mut arena = ScratchArena::new(0);
    block_mix(&mut [], &mut arena);
}

#[test]
#[should_panic(expected = "block size must be at least 1")]
fn mix_lane_rejects_zero_block_size() {
    mix_lane(&mut [], 1, 0);
}

#[test]
fn mix_lane_is_deterministic_and_cost_sensitive() {
    let input = seeded_block(1, 42);

    let mut a = input.clone();
    let mut b = input.clone();
    let mut c = input.clone();
    mix_lane(&mut a, 16, 1);
    mix_lane(&mut b, 16, 1);
    mix_lane(&mut c, 32, 1);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, input);
}

#[test]
fn cost_one_mixes_twice() {
    // N = 1: fill stores X and mixes once, then X ^= V[0] and mixes again
    let input = seeded_block(1, 9);
    let mut arena = ScratchArena::new(1);

    let mut expected = input.clone();
    block_mix(&mut expected, &mut arena);
    for (e, v) in expected.iter_mut().zip(&input) {
        *e ^= v;
    }
    block_mix(&mut expected, &mut arena);

    let mut lane = input;
    mix_lane(&mut lane, 1, 1);
    assert_eq!(lane, expected);
}

#[test]
fn lanes_mix_independently() {
    let params = ScryptParams::new(16, 2, 4);
    let lane_bytes = 128 * 2;

    let mut work = vec![0u8; 4 * lane_bytes];
    derive_pbkdf2_sha256(TEST_PASSWORD, TEST_SALT, 1, &mut work).unwrap();

    let mut words = to_words(&work);
    for lane in words.chunks_exact_mut(lane_bytes / 4) {
        mix_lane(lane, 16, 2);
    }

    let mixed = effective_salt(TEST_PASSWORD, TEST_SALT, &params).unwrap();
    assert_eq!(mixed, to_bytes(&words));
}

#[test]
fn first_lane_matches_single_lane_run() {
    // PBKDF2 output for one lane is a prefix of the output for four lanes
    let single = effective_salt(TEST_PASSWORD, TEST_SALT, &ScryptParams::new(16, 2, 1)).unwrap();
    let multi = effective_salt(TEST_PASSWORD, TEST_SALT, &ScryptParams::new(16, 2, 4)).unwrap();

    assert_eq!(single.len(), 256);
    assert_eq!(single[..], multi[..256]);
}
