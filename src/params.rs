//! Cost parameters for scrypt.
//!
//! [`ScryptParams`] is an immutable configuration value: it is built once by
//! the caller and passed by reference to every derivation. Validation happens
//! in [`ScryptParams::layout`], which turns the four parameters into concrete
//! buffer sizes with checked arithmetic before anything is allocated.
//!
//! # Recommended Parameters
//!
//! - `cost`: 2^14 for interactive logins, 2^18..2^20 for file encryption
//! - `block_size`: 8
//! - `parallel`: 1 unless the caller wants to spend extra CPU on the same memory
//! - `max_threads`: `None` (use every available core, capped by `parallel`)

use std::num::NonZeroUsize;
use std::thread;

use crate::consts::{
    BYTES_PER_BLOCK_UNIT, DEFAULT_BLOCK_SIZE, DEFAULT_COST, DEFAULT_PARALLEL, PBKDF2_MAX_OUTPUT,
};
use crate::error::ScryptError;

/// scrypt cost parameters.
///
/// Memory per lane is `128 · block_size · cost` bytes; time is proportional to
/// `cost · block_size · parallel`. `max_threads` only changes wall-clock time,
/// never the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    /// CPU/memory cost `N`. Must be a power of two (≥ 1).
    pub cost: u64,
    /// Block size `r` (≥ 1).
    pub block_size: u32,
    /// Parallelism `p`: number of independent lanes (≥ 1).
    pub parallel: u32,
    /// Upper bound on worker threads. `None` uses all available cores.
    pub max_threads: Option<usize>,
}

impl ScryptParams {
    /// Creates parameters with no thread limit.
    ///
    /// Nothing is validated here; see [`ScryptParams::layout`].
    #[must_use]
    pub const fn new(cost: u64, block_size: u32, parallel: u32) -> Self {
        Self {
            cost,
            block_size,
            parallel,
            max_threads: None,
        }
    }

    /// Caps the number of worker threads.
    #[must_use]
    pub const fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }

    /// Validates the parameters and computes the buffer layout.
    ///
    /// # Errors
    ///
    /// Returns [`ScryptError::InvalidParameter`] when `cost` is not a positive
    /// power of two, when `block_size`, `parallel` or `max_threads` is zero, or
    /// when the lane size, work-buffer size or memory-table size would overflow.
    pub fn layout(&self) -> Result<MemoryLayout, ScryptError> {
        if !self.cost.is_power_of_two() {
            return Err(ScryptError::invalid(
                "cost",
                format!("must be a positive power of 2, got {}", self.cost),
            ));
        }

        if self.block_size == 0 {
            return Err(ScryptError::invalid("block_size", "must be at least 1"));
        }
        let block_size = usize::try_from(self.block_size)
            .map_err(|_| ScryptError::invalid("block_size", "does not fit in usize"))?;
        let lane_bytes = block_size
            .checked_mul(BYTES_PER_BLOCK_UNIT)
            .ok_or_else(|| ScryptError::invalid("block_size", "128 · block_size overflows"))?;

        if self.parallel == 0 {
            return Err(ScryptError::invalid("parallel", "must be at least 1"));
        }
        let lanes = usize::try_from(self.parallel)
            .map_err(|_| ScryptError::invalid("parallel", "does not fit in usize"))?;
        let work_bytes = lanes.checked_mul(lane_bytes).ok_or_else(|| {
            ScryptError::invalid("parallel", "parallel · 128 · block_size overflows")
        })?;
        if work_bytes as u64 > PBKDF2_MAX_OUTPUT {
            return Err(ScryptError::invalid(
                "parallel",
                "parallel · 128 · block_size exceeds the PBKDF2-HMAC-SHA256 output limit",
            ));
        }

        if self.max_threads == Some(0) {
            return Err(ScryptError::invalid("max_threads", "must be at least 1"));
        }

        let cost = usize::try_from(self.cost)
            .map_err(|_| ScryptError::invalid("cost", "does not fit in usize"))?;
        let table_bytes = cost
            .checked_mul(lane_bytes)
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| {
                ScryptError::invalid("cost", "128 · block_size · cost exceeds addressable memory")
            })?;

        let lane_words = lane_bytes / 4;

        Ok(MemoryLayout {
            cost,
            block_size,
            lanes,
            lane_words,
            work_bytes,
            table_words: table_bytes / 4,
            workers: worker_count(self.max_threads, lanes),
        })
    }
}

impl Default for ScryptParams {
    /// Default parameters: `N = 2^18`, `r = 8`, `p = 1`, no thread limit.
    fn default() -> Self {
        Self::new(DEFAULT_COST, DEFAULT_BLOCK_SIZE, DEFAULT_PARALLEL)
    }
}

/// Buffer sizes derived from validated [`ScryptParams`].
///
/// - The work buffer holds `lanes` lanes of `lane_words` words each.
/// - Each lane mixer owns a memory table of `cost` blocks (`table_words` words).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryLayout {
    pub cost: usize,
    pub block_size: usize,
    pub lanes: usize,
    /// `32 · block_size`
    pub lane_words: usize,
    /// `lanes · 128 · block_size`
    pub work_bytes: usize,
    /// `cost · 32 · block_size`
    pub table_words: usize,
    /// `min(available parallelism, max_threads, lanes)`, at least 1.
    pub workers: usize,
}

fn worker_count(max_threads: Option<usize>, lanes: usize) -> usize {
    let available = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);

    available
        .min(max_threads.unwrap_or(usize::MAX))
        .min(lanes)
        .max(1)
}
