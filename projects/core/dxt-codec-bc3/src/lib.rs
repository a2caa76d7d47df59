#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod alpha;

/// The full 16-byte DXT5 block view.
pub mod block;

pub mod util;

pub use alpha::{
    apply_block_values, block_values, block_values6, block_values8, pack_endpoints,
    unpack_endpoint, Dxt5AlphaBlock, Dxt5AlphaMode,
};
pub use block::Dxt5Block;
