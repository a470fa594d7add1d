//! # Builders
//!
//! This module provides builder patterns for configuring key derivation.
//!
//! ## Modules
//!
//! - [`scrypt_builder`] - Builder for scrypt key derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API for configuring cost parameters with
//! sensible defaults and work directly on secure-gate secret types.

pub mod scrypt_builder;

pub use scrypt_builder::ScryptBuilder;
