//! # Memory-Hard Mixing
//!
//! The scrypt core below the PBKDF2 boundary.
//!
//! ## Modules
//!
//! - [`block_mix`] - BlockMix over `2r` Salsa20/8 sub-blocks, with its scratch arena
//! - [`lane`] - ROMix, the memory-hard per-lane mixer
//! - `dispatch` - bounded worker pool that mixes all lanes of a work buffer
//!
//! Lanes are independent: lane `j` of the output depends only on lane `j`
//! of the input, so mixing one lane in isolation with [`mix_lane`] gives the
//! same words as mixing it inside a larger work buffer.

pub mod block_mix;
pub(crate) mod dispatch;
pub mod lane;

pub use block_mix::{block_mix, ScratchArena};
pub use lane::mix_lane;
