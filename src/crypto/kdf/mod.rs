//! # Key Derivation Functions (KDF)
//!
//! This module provides the key derivation functions built on HMAC-SHA256.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, one-shot and as a resumable [`Pbkdf2Stream`](pbkdf2::Pbkdf2Stream)
//! - [`scrypt`] - the scrypt orchestrator (validation, expansion, lane mixing)
//!
//! ## Usage
//!
//! For most use cases, use [`ScryptBuilder`](crate::ScryptBuilder) or the
//! re-exported [`compute_derived_key`](crate::compute_derived_key).

pub mod pbkdf2;
pub mod scrypt;
