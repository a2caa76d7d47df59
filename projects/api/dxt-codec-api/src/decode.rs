//! Whole-block decoding, dispatched on [`DxtFormat`].

use crate::error::DecodeError;
use crate::format::DxtFormat;
use crate::settings::DecodeSettings;
use dxt_codec_bc1::util::{decode_bc1_block, decode_bc1_block_opaque};
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_bc2::util::decode_bc2_block;
use dxt_codec_bc3::util::{decode_bc3_block, decode_bc4_block, decode_dxn_block, DxnOrder};
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use likely_stable::unlikely;
use multiversion::multiversion;

/// Decodes the block at the start of `src`.
///
/// Only [`DxtFormat::block_size_bytes`] bytes are read; the rest of `src` is ignored.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] for formats the codec does not decode.
/// - [`DecodeError::SourceTooSmall`] if `src` is shorter than one block.
///
/// # Example
///
/// ```
/// use dxt_codec_api::{decode_block, Color8888, DecodeSettings, DxtFormat};
///
/// // Equal endpoints select 3-colour mode; selector 3 is the cut-out entry.
/// let block = [0x00, 0xF8, 0x00, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF];
///
/// let with_alpha = decode_block(DxtFormat::Dxt1A, &block, DecodeSettings::default()).unwrap();
/// assert_eq!(with_alpha.get_pixel(0, 0), Color8888::TRANSPARENT_BLACK);
///
/// let opaque = decode_block(DxtFormat::Dxt1, &block, DecodeSettings::default()).unwrap();
/// assert_eq!(opaque.get_pixel(0, 0), Color8888::new(0, 0, 0, 255));
/// ```
pub fn decode_block(
    format: DxtFormat,
    src: &[u8],
    settings: DecodeSettings,
) -> Result<Decoded4x4Block, DecodeError> {
    ensure_decodable(format)?;

    let needed = format.block_size_bytes();
    if unlikely(src.len() < needed) {
        return Err(DecodeError::SourceTooSmall {
            needed,
            actual: src.len(),
        });
    }

    // SAFETY: `src` holds at least one block of `format`.
    unsafe { Ok(decode_block_unchecked(format, src.as_ptr(), settings.palette)) }
}

/// Decodes every block of `src` into the start of `dst`, in order.
///
/// Returns the number of blocks decoded. Blocks are independent, so callers wanting to
/// parallelize can split `src` and `dst` into matching chunks and call this per chunk.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] for formats the codec does not decode.
/// - [`DecodeError::InvalidLength`] if `src` is not a whole number of blocks.
/// - [`DecodeError::OutputTooSmall`] if `dst` holds fewer blocks than `src`.
pub fn decode_blocks(
    format: DxtFormat,
    src: &[u8],
    dst: &mut [Decoded4x4Block],
    settings: DecodeSettings,
) -> Result<usize, DecodeError> {
    ensure_decodable(format)?;

    let block_size = format.block_size_bytes();
    if unlikely(src.len() % block_size != 0) {
        return Err(DecodeError::InvalidLength(src.len()));
    }

    let num_blocks = src.len() / block_size;
    if unlikely(dst.len() < num_blocks) {
        return Err(DecodeError::OutputTooSmall {
            needed: num_blocks,
            actual: dst.len(),
        });
    }

    // SAFETY: `src` holds exactly `num_blocks` blocks and `dst` has room for them.
    unsafe {
        decode_blocks_generic(
            format,
            src.as_ptr(),
            dst.as_mut_ptr(),
            num_blocks,
            settings.palette,
        )
    };

    Ok(num_blocks)
}

#[inline]
fn ensure_decodable(format: DxtFormat) -> Result<(), DecodeError> {
    if unlikely(!format.is_decodable()) {
        return Err(DecodeError::UnsupportedFormat(format));
    }
    Ok(())
}

/// # Safety
///
/// `src` must point to one readable block of `format`, and `format` must be decodable.
#[inline(always)]
pub(crate) unsafe fn decode_block_unchecked(
    format: DxtFormat,
    src: *const u8,
    palette: PaletteVariant,
) -> Decoded4x4Block {
    match format {
        DxtFormat::Dxt1 => decode_bc1_block_opaque(src, palette),
        DxtFormat::Dxt1A => decode_bc1_block(src, palette),
        DxtFormat::Dxt3 => decode_bc2_block(src, palette),
        DxtFormat::Dxt5 => decode_bc3_block(src, palette),
        DxtFormat::Dxt5A => decode_bc4_block(src),
        DxtFormat::DxnXy => decode_dxn_block(src, DxnOrder::Xy),
        DxtFormat::DxnYx => decode_dxn_block(src, DxnOrder::Yx),
        DxtFormat::Etc1 => Decoded4x4Block::default(),
    }
}

#[inline(always)]
unsafe fn decode_each(
    mut src: *const u8,
    mut dst: *mut Decoded4x4Block,
    num_blocks: usize,
    block_size: usize,
    decode: impl Fn(*const u8) -> Decoded4x4Block,
) {
    for _ in 0..num_blocks {
        dst.write(decode(src));
        src = src.add(block_size);
        dst = dst.add(1);
    }
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
unsafe fn decode_blocks_generic(
    format: DxtFormat,
    src: *const u8,
    dst: *mut Decoded4x4Block,
    num_blocks: usize,
    palette: PaletteVariant,
) {
    unsafe {
        let size = format.block_size_bytes();

        // One loop per format, so the per-block decode inlines into it.
        match format {
            DxtFormat::Dxt1 => decode_each(src, dst, num_blocks, size, |p| {
                decode_bc1_block_opaque(p, palette)
            }),
            DxtFormat::Dxt1A => decode_each(src, dst, num_blocks, size, |p| {
                decode_bc1_block(p, palette)
            }),
            DxtFormat::Dxt3 => decode_each(src, dst, num_blocks, size, |p| {
                decode_bc2_block(p, palette)
            }),
            DxtFormat::Dxt5 => decode_each(src, dst, num_blocks, size, |p| {
                decode_bc3_block(p, palette)
            }),
            DxtFormat::Dxt5A => decode_each(src, dst, num_blocks, size, |p| decode_bc4_block(p)),
            DxtFormat::DxnXy => decode_each(src, dst, num_blocks, size, |p| {
                decode_dxn_block(p, DxnOrder::Xy)
            }),
            DxtFormat::DxnYx => decode_each(src, dst, num_blocks, size, |p| {
                decode_dxn_block(p, DxnOrder::Yx)
            }),
            DxtFormat::Etc1 => {}
        }
    }
}
