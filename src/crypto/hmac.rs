// src/crypto/hmac.rs

//! HMAC-SHA256, the PRF behind every PBKDF2 call in the crate.

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;
