//! src/crypto/kdf/pbkdf2.rs
//! PBKDF2-HMAC-SHA256: one-shot expansion and a resumable output stream

use std::fmt;
use std::io::{self, Read};

use hmac::Mac;
use pbkdf2::pbkdf2;
use zeroize::{Zeroize, Zeroizing};

use crate::aliases::HmacSha256;
use crate::consts::{HMAC_SHA256_LEN, PBKDF2_MAX_OUTPUT};
use crate::error::ScryptError;
use crate::utils::be_bytes_from_u32;

/// Fills `out` with PBKDF2-HMAC-SHA256(`key`, `salt`, `iterations`).
///
/// Used by the orchestrator to expand the password into the work buffer.
#[inline(always)]
pub fn derive_pbkdf2_sha256(
    key: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), ScryptError> {
    if iterations == 0 {
        return Err(ScryptError::invalid("iterations", "PBKDF2 iterations must be ≥1"));
    }
    if out.len() as u64 > PBKDF2_MAX_OUTPUT {
        return Err(ScryptError::invalid(
            "output_len",
            "exceeds the PBKDF2-HMAC-SHA256 output limit",
        ));
    }

    pbkdf2::<HmacSha256>(key, salt, iterations, out)
        .map_err(|e| ScryptError::Crypto(format!("PBKDF2 failed: {e}")))
}

/// PBKDF2-HMAC-SHA256 as a lazily evaluated byte stream.
///
/// Output blocks `T_1, T_2, …` are computed on demand, so successive reads
/// of any sizes concatenate to exactly the one-shot PBKDF2 output of the
/// combined length. The stream ends after `2^32 − 1` blocks.
///
/// The stream keeps only the raw key, the salt and the pending output block,
/// all wiped on drop. The keyed HMAC state is rebuilt for each block and
/// dropped when the block is done, so no password-equivalent MAC state
/// outlives a read.
pub struct Pbkdf2Stream {
    key: Zeroizing<Vec<u8>>,
    salt: Zeroizing<Vec<u8>>,
    iterations: u32,
    /// Number of blocks computed so far; the next block index is `blocks + 1`.
    blocks: u32,
    block: Zeroizing<[u8; HMAC_SHA256_LEN]>,
    /// Read position inside `block`; `HMAC_SHA256_LEN` means exhausted.
    pos: usize,
}

impl Pbkdf2Stream {
    /// Copies `key` and `salt` into a new stream.
    ///
    /// # Errors
    ///
    /// [`ScryptError::InvalidParameter`] if `iterations` is zero.
    pub fn new(key: &[u8], salt: &[u8], iterations: u32) -> Result<Self, ScryptError> {
        if iterations == 0 {
            return Err(ScryptError::invalid("iterations", "PBKDF2 iterations must be ≥1"));
        }

        let stream = Self {
            key: Zeroizing::new(key.to_vec()),
            salt: Zeroizing::new(salt.to_vec()),
            iterations,
            blocks: 0,
            block: Zeroizing::new([0u8; HMAC_SHA256_LEN]),
            pos: HMAC_SHA256_LEN,
        };
        // Keying errors surface here, not on first read
        stream.prf()?;
        Ok(stream)
    }

    /// Fills `out` with the next `out.len()` bytes of the stream.
    ///
    /// # Errors
    ///
    /// [`ScryptError::Crypto`] if the stream runs past block `2^32 − 1`. Bytes
    /// already written to `out` before the error are part of the stream.
    pub fn fill(&mut self, out: &mut [u8]) -> Result<(), ScryptError> {
        let mut written = 0;
        while written < out.len() {
            if self.pos == HMAC_SHA256_LEN {
                self.next_block()?;
            }
            written += self.copy_pending(&mut out[written..]);
        }
        Ok(())
    }

    /// Returns the next `len` bytes of the stream.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, ScryptError> {
        let mut out = vec![0u8; len];
        self.fill(&mut out)?;
        Ok(out)
    }

    /// Copies as much of the current block as fits into `out`.
    fn copy_pending(&mut self, out: &mut [u8]) -> usize {
        let take = (HMAC_SHA256_LEN - self.pos).min(out.len());
        out[..take].copy_from_slice(&self.block[self.pos..self.pos + take]);
        self.pos += take;
        take
    }

    fn prf(&self) -> Result<HmacSha256, ScryptError> {
        <HmacSha256 as Mac>::new_from_slice(&self.key)
            .map_err(|e| ScryptError::Crypto(format!("HMAC keying failed: {e}")))
    }

    /// Computes `T_i = U_1 ⊕ … ⊕ U_c` for the next block index `i`.
    fn next_block(&mut self) -> Result<(), ScryptError> {
        if self.blocks == u32::MAX {
            return Err("PBKDF2 stream exhausted after 2^32 - 1 blocks".into());
        }
        let prf = self.prf()?;
        self.blocks += 1;

        let mut counter = [0u8; 4];
        be_bytes_from_u32(self.blocks, &mut counter, 0);

        let mut mac = prf.clone();
        mac.update(&self.salt);
        mac.update(&counter);
        let mut u = mac.finalize().into_bytes();
        self.block.copy_from_slice(&u);

        for _ in 1..self.iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            self.block
                .iter_mut()
                .zip(u.iter())
                .for_each(|(t, b)| *t ^= b);
        }

        u.as_mut_slice().zeroize();
        self.pos = 0;
        Ok(())
    }
}

impl Read for Pbkdf2Stream {
    /// Reads up to `buf.len()` bytes.
    ///
    /// At the end of the stream a partial read returns `Ok(n)`; the error is
    /// only reported once no byte can be produced.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut written = 0;
        while written < buf.len() {
            if self.pos == HMAC_SHA256_LEN {
                match self.next_block() {
                    Ok(()) => {}
                    Err(_) if written > 0 => break,
                    Err(e) => return Err(io::Error::other(e)),
                }
            }
            written += self.copy_pending(&mut buf[written..]);
        }
        Ok(written)
    }
}

impl fmt::Debug for Pbkdf2Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pbkdf2Stream")
            .field("iterations", &self.iterations)
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A stream positioned at the end of its last block.
    fn exhausted_stream() -> Pbkdf2Stream {
        let mut stream = Pbkdf2Stream::new(b"key", b"salt", 1).unwrap();
        stream.blocks = u32::MAX;
        stream.pos = HMAC_SHA256_LEN;
        stream
    }

    #[test]
    fn fill_past_last_block_is_crypto_error() {
        let mut stream = exhausted_stream();
        let mut out = [0u8; 1];
        let err = stream.fill(&mut out).unwrap_err();
        assert!(matches!(err, ScryptError::Crypto(_)), "{err:?}");
        assert!(err.to_string().contains("exhausted"));
    }

    #[test]
    fn read_returns_partial_block_before_error() {
        let mut stream = exhausted_stream();
        stream.pos = HMAC_SHA256_LEN - 8;

        let mut buf = [0u8; 32];
        assert_eq!(stream.read(&mut buf).unwrap(), 8);
        assert_eq!(stream.read(&mut buf[..4]).unwrap_err().kind(), io::ErrorKind::Other);
        assert_eq!(stream.blocks, u32::MAX);
    }

    #[test]
    fn keyed_state_is_rebuilt_per_block() {
        let mut expected = [0u8; 96];
        derive_pbkdf2_sha256(b"key", b"salt", 3, &mut expected).unwrap();

        let mut stream = Pbkdf2Stream::new(b"key", b"salt", 3).unwrap();
        assert_eq!(stream.key.as_slice(), b"key");
        let got = stream.read_bytes(96).unwrap();

        assert_eq!(got, expected);
        assert_eq!(stream.blocks, 3);
    }
}
