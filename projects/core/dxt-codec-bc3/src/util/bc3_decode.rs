//! BC3 (DXT5) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! The colour half is decoded exactly like a DXT1 block, 3-colour mode included, as
//! crunch and rgbcx do. Decoders following the OpenGL S3TC extension always use 4-colour
//! mode here, and differ on blocks with `color0 <= color1`.

use crate::block::Dxt5Block;
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source BC3 block (must point to at least 16 bytes of valid memory)
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
/// use dxt_codec_bc3::util::decode_bc3_block;
///
/// // Alpha 255 -> 0 (8-value ramp), all texels picking selector 0; white colour.
/// let bc3_block = [255, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0];
///
/// let decoded = unsafe { decode_bc3_block(bc3_block.as_ptr(), PaletteVariant::Ideal) };
/// assert_eq!(decoded.get_pixel(0, 0).a, 255);
/// ```
#[inline(always)]
pub unsafe fn decode_bc3_block(src: *const u8, variant: PaletteVariant) -> Decoded4x4Block {
    let block = Dxt5Block::from_bytes(src.cast::<[u8; Dxt5Block::SIZE]>().read_unaligned());
    block.decode(variant)
}

/// Safely wraps the unsafe [`decode_bc3_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc3_block_from_slice(src: &[u8], variant: PaletteVariant) -> Option<Decoded4x4Block> {
    Dxt5Block::from_slice(src).map(|block| block.decode(variant))
}
