//! Error types for the slice-facing decode API.
//!
//! Compressed data itself never fails to decode: every 8 or 16 byte pattern is a valid
//! block. These errors describe caller buffers that do not fit the requested operation.

use crate::format::DxtFormat;
use thiserror::Error;

/// Errors that can occur when decoding through [`crate::decode_block`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The source slice is shorter than one block.
    #[error("Source too small: need {needed} bytes, but only {actual} bytes available.")]
    SourceTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The source length is not a whole number of blocks.
    #[error("Invalid input length: {0} bytes. Length must be divisible by the block size.")]
    InvalidLength(usize),

    /// The output buffer cannot hold every decoded block.
    #[error("Output buffer too small: need {needed} blocks, but only {actual} blocks available.")]
    OutputTooSmall {
        /// The required number of blocks
        needed: usize,
        /// The actual number of blocks
        actual: usize,
    },

    /// The format is known but this codec does not decode it.
    #[error("{0} blocks cannot be decoded by this codec.")]
    UnsupportedFormat(DxtFormat),

    /// A raw format tag does not name any [`DxtFormat`].
    #[error("Unknown format tag: {0}.")]
    UnknownFormatTag(u8),
}
