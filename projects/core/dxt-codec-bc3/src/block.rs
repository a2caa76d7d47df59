use crate::alpha::Dxt5AlphaBlock;
use dxt_codec_bc1::{Dxt1Block, PaletteVariant};
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use likely_stable::unlikely;

/// A single 16-byte DXT5 block: an interpolated alpha block followed by a DXT1 colour block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Dxt5Block {
    /// The alpha half.
    pub alpha: Dxt5AlphaBlock,
    /// The colour half.
    pub color: Dxt1Block,
}

impl Dxt5Block {
    /// Size of a block in bytes.
    pub const SIZE: usize = 16;

    /// Splits raw block bytes into their alpha and colour halves.
    #[inline]
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let mut alpha = [0u8; Dxt5AlphaBlock::SIZE];
        let mut color = [0u8; Dxt1Block::SIZE];
        alpha.copy_from_slice(&bytes[..8]);
        color.copy_from_slice(&bytes[8..]);
        Self {
            alpha: Dxt5AlphaBlock::from_bytes(alpha),
            color: Dxt1Block::from_bytes(color),
        }
    }

    /// Copies a block from the start of `src`.
    ///
    /// Returns [`None`] if the slice is shorter than [`Dxt5Block::SIZE`].
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        if unlikely(src.len() < Self::SIZE) {
            return None;
        }

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(&src[..Self::SIZE]);
        Some(Self::from_bytes(bytes))
    }

    /// Returns the raw block bytes.
    #[inline]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..8].copy_from_slice(&self.alpha.bytes);
        bytes[8..].copy_from_slice(&self.color.bytes);
        bytes
    }

    /// Decodes the block. Colour comes from the DXT1 palette (3-colour mode included),
    /// alpha from the interpolated ramp.
    pub fn decode(&self, variant: PaletteVariant) -> Decoded4x4Block {
        let mut result = self.color.decode(variant);
        let alphas = self.alpha.decode();
        for (pixel, alpha) in result.pixels.iter_mut().zip(alphas) {
            pixel.a = alpha;
        }
        result
    }
}
