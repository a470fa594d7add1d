// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`salsa`] - Salsa20 core, the block permutation under the mixer
//! - [`kdf`] - PBKDF2 stream adapter and the scrypt orchestrator
//!
//! See crate root for re-exports of the high-level entry points.

pub mod hmac;
pub mod kdf;
pub mod salsa;
