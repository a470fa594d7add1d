// src/lib.rs

//! # scrypt-rs
//!
//! Memory-hard password-based key derivation (scrypt).
//!
//! A password and salt are expanded with PBKDF2-HMAC-SHA256 into `p` lanes of
//! `128 · r` bytes. Each lane is mixed by ROMix over a table of `N` blocks,
//! lanes run on a bounded pool of worker threads, and the mixed buffer becomes
//! the salt of a final one-iteration PBKDF2 stream that yields the key.
//!
//! ```rust,ignore
//! use scrypt_rs::{compute_derived_key, ScryptParams};
//!
//! let params = ScryptParams::new(1 << 14, 8, 1);
//! let key = compute_derived_key(b"password", b"NaCl", &params, 32)?;
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod mixing;
pub mod params;
pub mod utils;

// High-level API
pub use builders::ScryptBuilder;
pub use crypto::kdf::scrypt::{compute_derived_key, derive_stream, effective_salt};
pub use error::ScryptError;
pub use params::{MemoryLayout, ScryptParams};

// Output stream adapter
pub use crypto::kdf::pbkdf2::Pbkdf2Stream;

#[cfg(feature = "batch-ops")]
pub use batch_ops::derive_batch;
