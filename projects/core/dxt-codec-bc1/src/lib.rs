#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// The 8-byte DXT1 block view and endpoint helpers.
pub mod block;

/// Palette generation for the 4-colour and 3-colour modes.
pub mod palette;

pub mod util;

pub use block::{pack_endpoints, unpack_endpoint, Dxt1Block};
pub use palette::{
    block_colors, block_colors3, block_colors4, block_colors_nv5x, Dxt1Mode, Dxt1Palette,
    PaletteVariant,
};
