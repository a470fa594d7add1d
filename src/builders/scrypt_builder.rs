//! src/builders/scrypt_builder.rs
//! scrypt builder — fluent cost configuration over the secure-gate secret types

use zeroize::Zeroizing;

use crate::aliases::{DerivedKey, Password};
use crate::crypto::kdf::pbkdf2::Pbkdf2Stream;
use crate::crypto::kdf::scrypt::{compute_derived_key, derive_stream};
use crate::error::ScryptError;
use crate::params::ScryptParams;

/// scrypt key derivation builder
///
/// Starts from [`ScryptParams::default`] (`N = 2^18`, `r = 8`, `p = 1`).
/// A salt must be supplied with [`with_salt`](Self::with_salt) before deriving;
/// choosing it is the caller's job.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). All operations are pure
/// (no shared mutable state).
#[derive(Debug, Clone, Default)]
pub struct ScryptBuilder {
    params: ScryptParams,
    salt: Option<Zeroizing<Vec<u8>>>,
}

impl ScryptBuilder {
    /// Create builder with default cost parameters and no salt
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all cost parameters at once
    #[must_use]
    pub fn with_params(mut self, params: ScryptParams) -> Self {
        self.params = params;
        self
    }

    /// Set the cost parameter `N` (validated at derive time)
    #[must_use]
    pub fn with_cost(mut self, cost: u64) -> Self {
        self.params.cost = cost;
        self
    }

    /// Set the block size `r`
    #[must_use]
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.params.block_size = block_size;
        self
    }

    /// Set the parallelism `p`
    #[must_use]
    pub fn with_parallel(mut self, parallel: u32) -> Self {
        self.params.parallel = parallel;
        self
    }

    /// Cap the number of worker threads
    #[must_use]
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.params.max_threads = Some(max_threads);
        self
    }

    /// Set the salt — accepts `&[u8]`, `Vec<u8>`, `[u8; N]`, `&str`, …
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = Some(Zeroizing::new(salt.as_ref().to_vec()));
        self
    }

    /// Current cost parameters
    #[must_use]
    pub const fn params(&self) -> &ScryptParams {
        &self.params
    }

    /// Current salt, if one was set
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref().map(Vec::as_slice)
    }

    /// Derive key directly into caller-provided buffer — **preferred**
    ///
    /// Fills all of `out_key`.
    pub fn derive_secure(&self, password: &Password, out_key: &mut [u8]) -> Result<(), ScryptError> {
        let salt = self.require_salt()?;
        let key = Zeroizing::new(compute_derived_key(
            password.expose_secret(),
            salt,
            &self.params,
            out_key.len(),
        )?);
        out_key.copy_from_slice(&key);
        Ok(())
    }

    /// Convenience: derive and return a fresh secure key of `len` bytes
    pub fn derive_secure_new(&self, password: &Password, len: usize) -> Result<DerivedKey, ScryptError> {
        let salt = self.require_salt()?;
        let key = compute_derived_key(password.expose_secret(), salt, &self.params, len)?;
        Ok(DerivedKey::new(key))
    }

    /// Open a resumable key stream instead of a fixed-length key
    pub fn stream(&self, password: &Password) -> Result<Pbkdf2Stream, ScryptError> {
        let salt = self.require_salt()?;
        derive_stream(password.expose_secret(), salt, &self.params)
    }

    fn require_salt(&self) -> Result<&[u8], ScryptError> {
        self.salt().ok_or(ScryptError::NullInput("salt"))
    }
}
