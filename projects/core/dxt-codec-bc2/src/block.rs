use dxt_codec_bc1::{Dxt1Block, PaletteVariant};
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::BLOCK_DIMENSION;
use likely_stable::unlikely;

/// Largest value a 4-bit alpha nibble holds.
pub const MAX_ALPHA4: u32 = 15;

/// The 8 bytes of explicit 4-bit alpha at the start of a DXT3 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Dxt3AlphaBlock {
    /// Two nibbles per byte, low nibble first.
    pub bytes: [u8; Dxt3AlphaBlock::SIZE],
}

impl Dxt3AlphaBlock {
    /// Size of the alpha block in bytes.
    pub const SIZE: usize = 8;

    /// Wraps raw alpha bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self { bytes }
    }

    #[inline]
    const fn locate(x: usize, y: usize) -> (usize, u32) {
        ((y << 1) + (x >> 1), ((x & 1) as u32) * 4)
    }

    /// Alpha of the texel at (`x`, `y`).
    ///
    /// When `scaled`, the nibble is expanded to 8 bits (`v << 4 | v`); otherwise it is
    /// returned as stored (0-15).
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block.
    #[inline]
    pub fn get_alpha(&self, x: usize, y: usize, scaled: bool) -> u32 {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        let (byte, shift) = Self::locate(x, y);
        let value = ((self.bytes[byte] >> shift) & 0xF) as u32;
        if scaled {
            (value << 4) | value
        } else {
            value
        }
    }

    /// Sets the alpha of the texel at (`x`, `y`), leaving the other nibble of the byte as is.
    ///
    /// When `scaled`, `value` is an 8-bit alpha and is quantized with `(v * 15 + 128) / 255`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block, if `scaled` and `value` exceeds 255, or if not
    /// `scaled` and `value` exceeds 15.
    #[inline]
    pub fn set_alpha(&mut self, x: usize, y: usize, value: u32, scaled: bool) {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        let value = if scaled {
            assert!(value <= 255);
            (value * MAX_ALPHA4 + 128) / 255
        } else {
            assert!(value <= MAX_ALPHA4);
            value
        };

        let (byte, shift) = Self::locate(x, y);
        let byte = &mut self.bytes[byte];
        *byte = (*byte & !(0xF << shift)) | ((value as u8) << shift);
    }

    /// Decodes all 16 alpha values to 8 bits, row-major.
    pub fn decode(&self) -> [u8; 16] {
        let mut result = [0u8; 16];
        for (index, alpha) in result.iter_mut().enumerate() {
            let nibble = (self.bytes[index >> 1] >> ((index & 1) * 4)) & 0xF;
            *alpha = (nibble << 4) | nibble;
        }
        result
    }
}

/// A single 16-byte DXT3 block: explicit alpha followed by a DXT1 colour block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Dxt3Block {
    /// The explicit alpha half.
    pub alpha: Dxt3AlphaBlock,
    /// The colour half.
    pub color: Dxt1Block,
}

impl Dxt3Block {
    /// Size of a block in bytes.
    pub const SIZE: usize = 16;

    /// Splits raw block bytes into their alpha and colour halves.
    #[inline]
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        let mut alpha = [0u8; Dxt3AlphaBlock::SIZE];
        let mut color = [0u8; Dxt1Block::SIZE];
        alpha.copy_from_slice(&bytes[..8]);
        color.copy_from_slice(&bytes[8..]);
        Self {
            alpha: Dxt3AlphaBlock::from_bytes(alpha),
            color: Dxt1Block::from_bytes(color),
        }
    }

    /// Copies a block from the start of `src`.
    ///
    /// Returns [`None`] if the slice is shorter than [`Dxt3Block::SIZE`].
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
    /// alpha from the explicit nibbles.
    pub fn decode(&self, variant: PaletteVariant) -> Decoded4x4Block {
        let mut result = self.color.decode(variant);
        let alphas = self.alpha.decode();
        for (pixel, alpha) in result.pixels.iter_mut().zip(alphas) {
            pixel.a = alpha;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxt_codec_common::color_565::Color565;
    use dxt_codec_common::color_8888::Color8888;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(1, 0, 0, 4)]
    #[case(2, 0, 1, 0)]
    #[case(3, 2, 5, 4)]
    #[case(0, 3, 6, 0)]
    #[case(3, 3, 7, 4)]
    fn nibble_location(
        #[case] x: usize,
        #[case] y: usize,
        #[case] byte: usize,
        #[case] shift: u32,
    ) {
        assert_eq!(Dxt3AlphaBlock::locate(x, y), (byte, shift));
    }

    #[test]
    fn set_alpha_keeps_neighbour_nibble() {
        let mut block = Dxt3AlphaBlock::default();
        block.set_alpha(2, 1, 0xA, false);
        block.set_alpha(3, 1, 0x5, false);
        assert_eq!(block.bytes[3], 0x5A);

        block.set_alpha(2, 1, 0x3, false);
        assert_eq!(block.get_alpha(2, 1, false), 0x3);
        assert_eq!(block.get_alpha(3, 1, false), 0x5);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(255, 15, 255)]
    #[case(128, 8, 136)]
    #[case(8, 0, 0)]
    #[case(9, 1, 17)]
    fn scaled_alpha_quantizes(#[case] input: u32, #[case] nibble: u32, #[case] expanded: u32) {
        let mut block = Dxt3AlphaBlock::default();
        block.set_alpha(1, 1, input, true);
        assert_eq!(block.get_alpha(1, 1, false), nibble);
        assert_eq!(block.get_alpha(1, 1, true), expanded);
    }

    #[test]
    #[should_panic]
    fn unscaled_alpha_above_fifteen_panics() {
        Dxt3AlphaBlock::default().set_alpha(0, 0, 16, false);
    }

    #[test]
    #[should_panic]
    fn alpha_outside_block_panics() {
        Dxt3AlphaBlock::default().get_alpha(0, 4, true);
    }

    #[test]
    fn decode_gradient_alpha() {
        let block = Dxt3Block::from_bytes([
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, // alpha 0..=15
            0x00, 0xF8, 0x00, 0xF8, // red endpoints
            0x00, 0x00, 0x00, 0x00, // all index 0
        ]);

        let decoded = block.decode(PaletteVariant::Ideal);
        for (index, pixel) in decoded.pixels.iter().enumerate() {
            assert_eq!(*pixel, Color8888::new(255, 0, 0, (index * 17) as u8));
        }
    }

    #[test]
    fn colour_half_keeps_three_color_mode() {
        // c0 < c1, every texel picks the cut-out entry; alpha comes from the nibbles.
        let mut block = Dxt3Block {
            alpha: Dxt3AlphaBlock::from_bytes([0xFF; 8]),
            color: Dxt1Block::new(
                Color565::from_raw(0x0001),
                Color565::from_raw(0xFFFF),
                0xFFFF_FFFF,
            ),
        };
        block.alpha.set_alpha(0, 0, 0, false);

        let decoded = block.decode(PaletteVariant::Ideal);
        assert_eq!(decoded.get_pixel(0, 0), Color8888::TRANSPARENT_BLACK);
        assert_eq!(decoded.get_pixel(1, 0), Color8888::new(0, 0, 0, 255));
    }

    #[test]
    fn bytes_round_trip() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8 * 13);
        assert_eq!(Dxt3Block::from_bytes(bytes).to_bytes(), bytes);
        assert!(Dxt3Block::from_slice(&bytes[..15]).is_none());
    }
}
