#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// The DXT3 explicit alpha block and the full 16-byte block view.
pub mod block;

pub mod util;

pub use block::{Dxt3AlphaBlock, Dxt3Block};
