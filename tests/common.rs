//! tests/common.rs
//! Common constants and utilities shared across test files

use scrypt_rs::ScryptParams;

/// Cheap parameters for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const FAST_PARAMS: ScryptParams = ScryptParams::new(16, 1, 1);

/// Cheap multi-lane parameters, enough lanes to exercise the worker pool
#[allow(dead_code)] // Used across multiple test files
pub const MULTI_LANE_PARAMS: ScryptParams = ScryptParams::new(32, 2, 4);

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"correct horse battery staple";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"NaCl-and-pepper!";

/// Number of differing bits between two equal-length byte strings
#[allow(dead_code)] // Used across multiple test files
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}
