//! BC1 (DXT1) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! The palette family is picked with [`PaletteVariant`]; [`PaletteVariant::Ideal`] matches
//! the OpenGL S3TC extension.

use crate::block::Dxt1Block;
use crate::palette::PaletteVariant;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC1 block into a structured representation of pixels
///
/// In 3-colour mode, texels selecting the fourth entry decode to transparent black.
///
/// # Parameters
///
/// - `src`: Pointer to the source BC1 block (must point to at least 8 bytes of valid memory)
/// - `variant`: The palette family to decode with
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
///
/// # Example
///
/// ```
/// use dxt_codec_bc1::util::decode_bc1_block;
/// use dxt_codec_bc1::PaletteVariant;
///
/// // Red, in 3-colour mode, all texels selecting entry 0.
/// let bc1_block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
///
/// let decoded = unsafe { decode_bc1_block(bc1_block.as_ptr(), PaletteVariant::Ideal) };
/// assert_eq!(decoded.get_pixel(0, 0).r, 255);
/// ```
#[inline(always)]
pub unsafe fn decode_bc1_block(src: *const u8, variant: PaletteVariant) -> Decoded4x4Block {
    let block = Dxt1Block::from_bytes(src.cast::<[u8; Dxt1Block::SIZE]>().read_unaligned());
    block.decode(variant)
}

/// Decodes a BC1 block as an opaque texture; alpha is 255 for every texel, including those
/// selecting the cut-out entry (whose colour stays black).
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
#[inline(always)]
pub unsafe fn decode_bc1_block_opaque(src: *const u8, variant: PaletteVariant) -> Decoded4x4Block {
    let mut decoded = decode_bc1_block(src, variant);
    decoded.make_opaque();
    decoded
}

/// Safely wraps the unsafe [`decode_bc1_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc1_block_from_slice(src: &[u8], variant: PaletteVariant) -> Option<Decoded4x4Block> {
    Dxt1Block::from_slice(src).map(|block| block.decode(variant))
}
