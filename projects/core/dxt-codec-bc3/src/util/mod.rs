//! Block decoding helpers working on raw pointers and slices.

mod bc3_decode;
mod bc4_decode;
mod dxn_decode;

pub use bc3_decode::*;
pub use bc4_decode::*;
pub use dxn_decode::*;
