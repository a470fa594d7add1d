//! # Constants
//!
//! This module defines the fixed values of the scrypt construction and the
//! default cost parameters used by [`ScryptParams::default`](crate::ScryptParams).

/// Number of Salsa20 rounds applied by the block permutation (Salsa20/8).
///
/// Eight rounds are four double-rounds (column round + row round).
pub const SALSA20_ROUNDS: usize = 8;

/// Number of 32-bit words in one Salsa20 block (64 bytes).
pub const SALSA_BLOCK_WORDS: usize = 16;

/// Bytes contributed to a lane by each unit of the block size parameter `r`.
///
/// A lane is `128 · r` bytes, i.e. `2r` Salsa20 blocks.
pub const BYTES_PER_BLOCK_UNIT: usize = 128;

/// Output length of HMAC-SHA256 in bytes.
pub const HMAC_SHA256_LEN: usize = 32;

/// Largest output PBKDF2-HMAC-SHA256 can produce: `32 · (2^32 − 1)` bytes.
///
/// The block counter is a 32-bit big-endian integer starting at 1.
pub const PBKDF2_MAX_OUTPUT: u64 = HMAC_SHA256_LEN as u64 * u32::MAX as u64;

/// Default cost parameter `N` (2^18).
///
/// Memory per lane is `128 · r · N` bytes, so the default needs 256 MiB at `r = 8`.
pub const DEFAULT_COST: u64 = 1 << 18;

/// Default block size parameter `r`.
pub const DEFAULT_BLOCK_SIZE: u32 = 8;

/// Default parallelism parameter `p`.
pub const DEFAULT_PARALLEL: u32 = 1;
