#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod interpolate;
pub mod selectors;

/// Width and height of a block, in texels.
pub const BLOCK_DIMENSION: usize = 4;

/// Number of texels in a block.
pub const TEXELS_PER_BLOCK: usize = BLOCK_DIMENSION * BLOCK_DIMENSION;
