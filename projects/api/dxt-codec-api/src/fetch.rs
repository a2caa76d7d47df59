//! Single texel decoding.
//!
//! [`fetch_texel`] decodes one texel of one block without decoding the rest of it.
//! [`TexelDecoder`] abstracts over where texels come from, so drivers such as
//! [`decode_block_with`] can run on the built in codec or on an injected alternative
//! (like the external library wrapper in `external`, with the `std` feature).

use crate::error::DecodeError;
use crate::format::DxtFormat;
use crate::settings::DecodeSettings;
use dxt_codec_bc1::Dxt1Block;
use dxt_codec_bc2::Dxt3Block;
use dxt_codec_bc3::{Dxt5AlphaBlock, Dxt5Block};
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::BLOCK_DIMENSION;
use likely_stable::unlikely;

/// Decodes the texel at (`x`, `y`) of the block at the start of `block`.
///
/// Only [`DxtFormat::block_size_bytes`] bytes are read.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] for formats the codec does not decode.
/// - [`DecodeError::SourceTooSmall`] if `block` is shorter than one block.
///
/// # Panics
///
/// If `x` or `y` is outside the block.
pub fn fetch_texel(
    format: DxtFormat,
    block: &[u8],
    x: usize,
    y: usize,
    settings: DecodeSettings,
) -> Result<Color8888, DecodeError> {
    assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
    if unlikely(!format.is_decodable()) {
        return Err(DecodeError::UnsupportedFormat(format));
    }

    let needed = format.block_size_bytes();
    if unlikely(block.len() < needed) {
        return Err(DecodeError::SourceTooSmall {
            needed,
            actual: block.len(),
        });
    }

    let palette = settings.palette;
    let texel = match format {
        DxtFormat::Dxt1 => dxt1(block).texel(x, y, palette).with_alpha(255),
        DxtFormat::Dxt1A => dxt1(block).texel(x, y, palette),
        DxtFormat::Dxt3 => {
            let block = Dxt3Block::from_slice(block).ok_or(too_small(needed, block.len()))?;
            let alpha = block.alpha.get_alpha(x, y, true) as u8;
            block.color.texel(x, y, palette).with_alpha(alpha)
        }
        DxtFormat::Dxt5 => {
            let block = Dxt5Block::from_slice(block).ok_or(too_small(needed, block.len()))?;
            let alpha = block.alpha.value(x, y);
            block.color.texel(x, y, palette).with_alpha(alpha)
        }
        DxtFormat::Dxt5A => Color8888::new(0, 0, 0, alpha_block(block, 0).value(x, y)),
        DxtFormat::DxnXy => Color8888::new(
            alpha_block(block, 0).value(x, y),
            alpha_block(block, 1).value(x, y),
            0,
            255,
        ),
        DxtFormat::DxnYx => Color8888::new(
            alpha_block(block, 1).value(x, y),
            alpha_block(block, 0).value(x, y),
            0,
            255,
        ),
        DxtFormat::Etc1 => return Err(DecodeError::UnsupportedFormat(format)),
    };

    Ok(texel)
}

#[inline]
fn too_small(needed: usize, actual: usize) -> DecodeError {
    DecodeError::SourceTooSmall { needed, actual }
}

/// Block view of a slice already checked to hold 8 bytes.
#[inline]
fn dxt1(block: &[u8]) -> Dxt1Block {
    let mut bytes = [0u8; Dxt1Block::SIZE];
    bytes.copy_from_slice(&block[..Dxt1Block::SIZE]);
    Dxt1Block::from_bytes(bytes)
}

/// The `index`th alpha block of a slice already checked to hold it.
#[inline]
fn alpha_block(block: &[u8], index: usize) -> Dxt5AlphaBlock {
    let start = index * Dxt5AlphaBlock::SIZE;
    let mut bytes = [0u8; Dxt5AlphaBlock::SIZE];
    bytes.copy_from_slice(&block[start..start + Dxt5AlphaBlock::SIZE]);
    Dxt5AlphaBlock::from_bytes(bytes)
}

/// A source of decoded texels.
pub trait TexelDecoder {
    /// Writes the texel at (`x`, `y`) of the block at the start of `block` into `dst`.
    ///
    /// Implementations that have nothing to offer for `format` leave `dst` untouched and
    /// return `Ok`.
    fn fetch_texel(
        &self,
        format: DxtFormat,
        block: &[u8],
        x: usize,
        y: usize,
        dst: &mut Color8888,
    ) -> Result<(), DecodeError>;
}

/// [`TexelDecoder`] backed by this codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuiltinTexelDecoder {
    /// Settings used for every texel.
    pub settings: DecodeSettings,
}

impl BuiltinTexelDecoder {
    /// Creates a decoder using `settings`.
    pub const fn new(settings: DecodeSettings) -> Self {
        Self { settings }
    }
}

impl TexelDecoder for BuiltinTexelDecoder {
    fn fetch_texel(
        &self,
        format: DxtFormat,
        block: &[u8],
        x: usize,
        y: usize,
        dst: &mut Color8888,
    ) -> Result<(), DecodeError> {
        *dst = fetch_texel(format, block, x, y, self.settings)?;
        Ok(())
    }
}

/// Decodes a whole block texel by texel through `decoder`.
///
/// Texels the decoder leaves untouched stay transparent black.
pub fn decode_block_with<D: TexelDecoder + ?Sized>(
    decoder: &D,
    format: DxtFormat,
    block: &[u8],
) -> Result<Decoded4x4Block, DecodeError> {
    let mut result = Decoded4x4Block::default();
    for y in 0..BLOCK_DIMENSION {
        for x in 0..BLOCK_DIMENSION {
            let mut texel = Color8888::TRANSPARENT_BLACK;
            decoder.fetch_texel(format, block, x, y, &mut texel)?;
            // SAFETY: both coordinates are below BLOCK_DIMENSION.
            unsafe { result.set_pixel_unchecked(x, y, texel) };
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_block;
    use dxt_codec_bc1::PaletteVariant;
    use rstest::rstest;

    fn sample_block(format: DxtFormat, seed: u32) -> Vec<u8> {
        (0..format.block_size_bytes() as u32)
            .map(|i| (i ^ seed).wrapping_mul(0x9E37_79B9).rotate_left(7) as u8)
            .collect()
    }

    #[rstest]
    fn texels_match_block_decode(
        #[values(
            DxtFormat::Dxt1,
            DxtFormat::Dxt1A,
            DxtFormat::Dxt3,
            DxtFormat::Dxt5,
            DxtFormat::Dxt5A,
            DxtFormat::DxnXy,
            DxtFormat::DxnYx
        )]
        format: DxtFormat,
        #[values(PaletteVariant::Ideal, PaletteVariant::IdealRound, PaletteVariant::Nv5x)]
        palette: PaletteVariant,
    ) {
        let settings = DecodeSettings::with_palette(palette);
        for seed in 0..32 {
            let block = sample_block(format, seed);
            let decoded = decode_block(format, &block, settings).unwrap();
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(
                        fetch_texel(format, &block, x, y, settings).unwrap(),
                        decoded.get_pixel(x, y),
                        "{format} seed {seed} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn builtin_driver_matches_block_decode() {
        let decoder = BuiltinTexelDecoder::default();
        let block = sample_block(DxtFormat::Dxt5, 3);
        assert_eq!(
            decode_block_with(&decoder, DxtFormat::Dxt5, &block).unwrap(),
            decode_block(DxtFormat::Dxt5, &block, DecodeSettings::default()).unwrap()
        );
    }

    #[test]
    fn fetch_reads_only_one_block() {
        let mut bytes = sample_block(DxtFormat::Dxt1, 9);
        let expected = fetch_texel(DxtFormat::Dxt1, &bytes, 1, 2, DecodeSettings::default());
        bytes.extend_from_slice(&[0xAB; 8]);
        assert_eq!(
            fetch_texel(DxtFormat::Dxt1, &bytes, 1, 2, DecodeSettings::default()),
            expected
        );
    }

    #[test]
    fn errors_are_reported() {
        let settings = DecodeSettings::default();
        assert_eq!(
            fetch_texel(DxtFormat::Dxt5, &[0u8; 12], 0, 0, settings),
            Err(DecodeError::SourceTooSmall {
                needed: 16,
                actual: 12
            })
        );
        assert_eq!(
            fetch_texel(DxtFormat::Etc1, &[0u8; 8], 0, 0, settings),
            Err(DecodeError::UnsupportedFormat(DxtFormat::Etc1))
        );
    }

    #[test]
    #[should_panic]
    fn out_of_block_coordinates_panic() {
        let _ = fetch_texel(DxtFormat::Dxt1, &[0u8; 8], 0, 4, DecodeSettings::default());
    }
}
