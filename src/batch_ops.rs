#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::aliases::DerivedKey;
#[cfg(feature = "batch-ops")]
use crate::{compute_derived_key, ScryptError, ScryptParams};

/// Derives one key per `(key, salt)` pair in parallel.
///
/// Results keep the input order. Each derivation still runs its own lane
/// pool, so set `max_threads` on `params` to avoid oversubscription when the
/// batch is large. The first error aborts the batch.
#[cfg(feature = "batch-ops")]
pub fn derive_batch(
    batch: &[(&[u8], &[u8])],
    params: &ScryptParams,
    output_len: usize,
) -> Result<Vec<DerivedKey>, ScryptError> {
    batch
        .par_iter()
        .map(|(key, salt)| {
            compute_derived_key(key, salt, params, output_len).map(DerivedKey::new)
        })
        .collect()
}
