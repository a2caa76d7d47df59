//! DXN (BC5 unsigned) dual channel decoding.
//!
//! A DXN block is two [`Dxt5AlphaBlock`]s back to back. [`DxnOrder`] selects which
//! channel each half decodes into; blue is zero and alpha is opaque.

use crate::alpha::Dxt5AlphaBlock;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use likely_stable::unlikely;

/// Size of a DXN block in bytes.
pub const DXN_BLOCK_SIZE: usize = Dxt5AlphaBlock::SIZE * 2;

/// Channel order of a DXN block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DxnOrder {
    /// First half is red (X), second half is green (Y).
    Xy,
    /// First half is green (Y), second half is red (X).
    Yx,
}

/// Decodes a DXN block into RGBA texels `(x, y, 0, 255)`.
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 16 bytes of valid memory.
#[inline(always)]
pub unsafe fn decode_dxn_block(src: *const u8, order: DxnOrder) -> Decoded4x4Block {
    let first =
        Dxt5AlphaBlock::from_bytes(src.cast::<[u8; Dxt5AlphaBlock::SIZE]>().read_unaligned());
    let second = Dxt5AlphaBlock::from_bytes(
        src.add(Dxt5AlphaBlock::SIZE)
            .cast::<[u8; Dxt5AlphaBlock::SIZE]>()
            .read_unaligned(),
    );

    let (red, green) = match order {
        DxnOrder::Xy => (first.decode(), second.decode()),
        DxnOrder::Yx => (second.decode(), first.decode()),
    };

    let mut result = Decoded4x4Block::default();
    for (index, pixel) in result.pixels.iter_mut().enumerate() {
        *pixel = Color8888::new(red[index], green[index], 0, 255);
    }
    result
}

/// Safely wraps the unsafe [`decode_dxn_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_dxn_block_from_slice(src: &[u8], order: DxnOrder) -> Option<Decoded4x4Block> {
    if unlikely(src.len() < DXN_BLOCK_SIZE) {
        return None;
    }

    // SAFETY: length checked above.
    unsafe { Some(decode_dxn_block(src.as_ptr(), order)) }
}
