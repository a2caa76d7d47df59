//! Block decoding helpers working on raw pointers and slices.

mod bc1_decode;
pub use bc1_decode::*;
