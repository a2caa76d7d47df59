//! BC2 (DXT3) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! The colour half is decoded exactly like a DXT1 block, 3-colour mode included, as
//! crunch and rgbcx do. Decoders following the OpenGL S3TC extension always use 4-colour
//! mode here, and differ on blocks with `color0 <= color1`.

use crate::block::Dxt3Block;
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC2 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source BC2 block (must point to at least 16 bytes of valid memory)
/// - `variant`: The palette family used for the colour half
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 16 bytes of valid memory.
///
/// # Example
///
/// ```
/// use dxt_codec_bc1::PaletteVariant;
/// use dxt_codec_bc2::util::decode_bc2_block;
///
/// let bc2_block = [0u8; 16];
///
/// let decoded = unsafe { decode_bc2_block(bc2_block.as_ptr(), PaletteVariant::Ideal) };
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// ```
#[inline(always)]
pub unsafe fn decode_bc2_block(src: *const u8, variant: PaletteVariant) -> Decoded4x4Block {
    let block = Dxt3Block::from_bytes(src.cast::<[u8; Dxt3Block::SIZE]>().read_unaligned());
    block.decode(variant)
}

/// Safely wraps the unsafe [`decode_bc2_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc2_block_from_slice(src: &[u8], variant: PaletteVariant) -> Option<Decoded4x4Block> {
    Dxt3Block::from_slice(src).map(|block| block.decode(variant))
}
