//! Block decoding helpers working on raw pointers and slices.

mod bc2_decode;
pub use bc2_decode::*;
