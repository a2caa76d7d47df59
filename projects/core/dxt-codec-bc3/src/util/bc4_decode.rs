//! DXT5A (BC4 unsigned) single channel decoding.
//!
//! A DXT5A block is a lone [`Dxt5AlphaBlock`]. As RGBA, the value lands in the alpha
//! channel and the colour channels are zero.

use crate::alpha::Dxt5AlphaBlock;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use likely_stable::unlikely;

/// Decodes a DXT5A block into its 16 values, row-major.
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
#[inline(always)]
pub unsafe fn decode_bc4_values(src: *const u8) -> [u8; 16] {
    Dxt5AlphaBlock::from_bytes(src.cast::<[u8; Dxt5AlphaBlock::SIZE]>().read_unaligned()).decode()
}

/// Decodes a DXT5A block as RGBA texels `(0, 0, 0, value)`.
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
#[inline(always)]
pub unsafe fn decode_bc4_block(src: *const u8) -> Decoded4x4Block {
    let values = decode_bc4_values(src);
    let mut result = Decoded4x4Block::default();
    for (pixel, value) in result.pixels.iter_mut().zip(values) {
        *pixel = Color8888::new(0, 0, 0, value);
    }
    result
}

/// Safely wraps the unsafe [`decode_bc4_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc4_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    if unlikely(src.len() < Dxt5AlphaBlock::SIZE) {
        return None;
    }

    // SAFETY: length checked above.
    unsafe { Some(decode_bc4_block(src.as_ptr())) }
}
