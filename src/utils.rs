// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Word codec and word-level helpers used across the library.
//!
//! The codec moves data between byte streams and wide-word arithmetic:
//! big-endian 32/64-bit words (PBKDF2 block counters), little-endian 32-bit
//! words (the scrypt work buffer) and a dedicated 24-bit little-endian variant.
//!
//! # Panics (by contract)
//!
//! None of the codec functions validate `offset`. They panic if the slice is
//! shorter than `offset + width`; every caller in the crate sizes its buffers
//! from the validated [`MemoryLayout`](crate::params::MemoryLayout) first.

/// Decodes a big-endian `u32` from `bytes[offset..offset + 4]`.
#[inline(always)]
pub fn u32_from_be_bytes(bytes: &[u8], offset: usize) -> u32 {
    (bytes[offset] as u32) << 24
        | (bytes[offset + 1] as u32) << 16
        | (bytes[offset + 2] as u32) << 8
        | bytes[offset + 3] as u32
}

/// Decodes a big-endian `u64` from `bytes[offset..offset + 8]`.
#[inline(always)]
pub fn u64_from_be_bytes(bytes: &[u8], offset: usize) -> u64 {
    (u32_from_be_bytes(bytes, offset) as u64) << 32 | u32_from_be_bytes(bytes, offset + 4) as u64
}

/// Decodes a little-endian 24-bit value from `bytes[offset..offset + 3]`.
#[inline(always)]
pub fn u24_from_le_bytes(bytes: &[u8], offset: usize) -> u32 {
    (bytes[offset + 2] as u32) << 16 | (bytes[offset + 1] as u32) << 8 | bytes[offset] as u32
}

/// Decodes a little-endian `u32` from `bytes[offset..offset + 4]`.
#[inline(always)]
pub fn u32_from_le_bytes(bytes: &[u8], offset: usize) -> u32 {
    (bytes[offset + 3] as u32) << 24 | u24_from_le_bytes(bytes, offset)
}

/// Encodes `value` big-endian into `bytes[offset..offset + 4]`.
#[inline(always)]
pub fn be_bytes_from_u32(value: u32, bytes: &mut [u8], offset: usize) {
    bytes[offset] = (value >> 24) as u8;
    bytes[offset + 1] = (value >> 16) as u8;
    bytes[offset + 2] = (value >> 8) as u8;
    bytes[offset + 3] = value as u8;
}

/// Encodes `value` big-endian into `bytes[offset..offset + 8]`.
#[inline(always)]
pub fn be_bytes_from_u64(value: u64, bytes: &mut [u8], offset: usize) {
    be_bytes_from_u32((value >> 32) as u32, bytes, offset);
    be_bytes_from_u32(value as u32, bytes, offset + 4);
}

/// Encodes the low 24 bits of `value` little-endian into `bytes[offset..offset + 3]`.
#[inline(always)]
pub fn le_bytes_from_u24(value: u32, bytes: &mut [u8], offset: usize) {
    bytes[offset] = value as u8;
    bytes[offset + 1] = (value >> 8) as u8;
    bytes[offset + 2] = (value >> 16) as u8;
}

/// Encodes `value` little-endian into `bytes[offset..offset + 4]`.
#[inline(always)]
pub fn le_bytes_from_u32(value: u32, bytes: &mut [u8], offset: usize) {
    le_bytes_from_u24(value, bytes, offset);
    bytes[offset + 3] = (value >> 24) as u8;
}

/// XORs `src` into `dst` word by word.
///
/// Both slices are expected to have the same length; extra words in the
/// longer slice are ignored.
#[inline(always)]
pub fn xor_words(dst: &mut [u32], src: &[u32]) {
    dst.iter_mut().zip(src.iter()).for_each(|(a, b)| *a ^= b);
}
