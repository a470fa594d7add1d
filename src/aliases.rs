//! # Secure-Gate Type Aliases
//!
//! This module provides type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Secret types require an explicit `.expose_secret()` / `.expose_secret_mut()` to reach the
//! underlying bytes, so a password or derived key is never handed around by accident.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - PRF behind PBKDF2 (work-buffer expansion and final key stream)
//!
//! ### Dynamic Secrets
//! - [`Password`] - low-entropy input key material
//! - [`DerivedKey`] - output of a derivation, sized by the caller

use secure_gate::dynamic_alias;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitive
// ─────────────────────────────────────────────────────────────────────────────
pub use crate::crypto::hmac::HmacSha256;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(Password, Vec<u8>);
dynamic_alias!(DerivedKey, Vec<u8>);
