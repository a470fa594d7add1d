//! src/crypto/kdf/scrypt.rs
//! scrypt orchestration — validate, expand, mix lanes, stretch

use log::debug;
use zeroize::Zeroizing;

use super::pbkdf2::{derive_pbkdf2_sha256, Pbkdf2Stream};
use crate::consts::PBKDF2_MAX_OUTPUT;
use crate::error::ScryptError;
use crate::mixing::dispatch::mix_lanes;
use crate::params::ScryptParams;
use crate::utils::{le_bytes_from_u32, u32_from_le_bytes};

/// Derive an scrypt key of exactly `output_len` bytes.
///
/// Equivalent to reading `output_len` bytes from [`derive_stream`].
/// `output_len == 0` is valid and returns an empty vector after the full
/// memory-hard computation.
///
/// # Errors
///
/// [`ScryptError::InvalidParameter`] for invalid `params` or an `output_len`
/// above the PBKDF2-HMAC-SHA256 limit. Nothing is allocated in that case.
pub fn compute_derived_key(
    key: &[u8],
    salt: &[u8],
    params: &ScryptParams,
    output_len: usize,
) -> Result<Vec<u8>, ScryptError> {
    if output_len as u64 > PBKDF2_MAX_OUTPUT {
        return Err(ScryptError::invalid(
            "output_len",
            "exceeds the PBKDF2-HMAC-SHA256 output limit",
        ));
    }

    let mut stream = derive_stream(key, salt, params)?;
    stream.read_bytes(output_len)
}

/// Return the effective salt: the fully mixed work buffer
/// (`parallel · 128 · block_size` bytes).
///
/// The final key is PBKDF2-HMAC-SHA256(`key`, effective salt, 1). This is
/// exposed for callers that want to run that last, cheap step themselves.
pub fn effective_salt(
    key: &[u8],
    salt: &[u8],
    params: &ScryptParams,
) -> Result<Vec<u8>, ScryptError> {
    let mut mixed = mfcrypt(key, salt, params)?;
    Ok(std::mem::take(&mut *mixed))
}

/// Create a resumable key stream keyed by `key` over the effective salt.
///
/// Dropping the stream wipes its internal copy of the effective salt.
pub fn derive_stream(
    key: &[u8],
    salt: &[u8],
    params: &ScryptParams,
) -> Result<Pbkdf2Stream, ScryptError> {
    let mixed = mfcrypt(key, salt, params)?;
    Pbkdf2Stream::new(key, &mixed, 1)
}

/// Expands `key`/`salt` into the work buffer, mixes every lane and returns the
/// mixed bytes. All intermediate buffers are zeroed when dropped.
fn mfcrypt(
    key: &[u8],
    salt: &[u8],
    params: &ScryptParams,
) -> Result<Zeroizing<Vec<u8>>, ScryptError> {
    let layout = params.layout()?;

    debug!(
        "scrypt: N={} r={} p={} workers={} lane_bytes={}",
        layout.cost,
        layout.block_size,
        layout.lanes,
        layout.workers,
        layout.lane_words * 4
    );

    let mut bytes = Zeroizing::new(vec![0u8; layout.work_bytes]);
    derive_pbkdf2_sha256(key, salt, 1, &mut bytes)?;

    let mut words = Zeroizing::new(vec![0u32; layout.work_bytes / 4]);
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32_from_le_bytes(&bytes, i * 4);
    }

    mix_lanes(&mut words, &layout);

    for (i, word) in words.iter().enumerate() {
        le_bytes_from_u32(*word, &mut bytes, i * 4);
    }

    Ok(bytes)
}
