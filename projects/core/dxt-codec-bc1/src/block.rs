use crate::palette::{Dxt1Mode, Dxt1Palette, PaletteVariant};
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use dxt_codec_common::selectors::{DXT1_FROM_LINEAR, DXT1_TO_LINEAR};
use dxt_codec_common::BLOCK_DIMENSION;
use likely_stable::unlikely;

/// A single 8-byte DXT1 block.
///
/// Layout:
///
/// ```text
/// offset 0: color0    (u16, little endian, RGB565)
/// offset 2: color1    (u16, little endian, RGB565)
/// offset 4: selectors (u32, little endian, 2 bits per texel, row-major, x-minor)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Dxt1Block {
    /// The raw block bytes.
    pub bytes: [u8; Dxt1Block::SIZE],
}

impl Dxt1Block {
    /// Size of a block in bytes.
    pub const SIZE: usize = 8;

    /// Wraps raw block bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self { bytes }
    }

    /// Copies a block from the start of `src`.
    ///
    /// Returns [`None`] if the slice is shorter than [`Dxt1Block::SIZE`].
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        if unlikely(src.len() < Self::SIZE) {
            return None;
        }

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(&src[..Self::SIZE]);
        Some(Self { bytes })
    }

    /// Builds a block from its endpoints and packed selector word.
    #[inline]
    pub fn new(color0: Color565, color1: Color565, selectors: u32) -> Self {
        let mut block = Self::default();
        block.set_color0(color0);
        block.set_color1(color1);
        block.set_selectors(selectors);
        block
    }

    /// Returns the raw block bytes.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.bytes
    }

    /// First endpoint.
    #[inline]
    pub const fn color0(&self) -> Color565 {
        Color565::from_raw(u16::from_le_bytes([self.bytes[0], self.bytes[1]]))
    }

    /// Second endpoint.
    #[inline]
    pub const fn color1(&self) -> Color565 {
        Color565::from_raw(u16::from_le_bytes([self.bytes[2], self.bytes[3]]))
    }

    /// Replaces the first endpoint.
    #[inline]
    pub fn set_color0(&mut self, color: Color565) {
        self.bytes[0..2].copy_from_slice(&color.raw_value().to_le_bytes());
    }

    /// Replaces the second endpoint.
    #[inline]
    pub fn set_color1(&mut self, color: Color565) {
        self.bytes[2..4].copy_from_slice(&color.raw_value().to_le_bytes());
    }

    /// Both endpoints as one word, `color0 | color1 << 16`.
    #[inline]
    pub const fn endpoints(&self) -> u32 {
        u32::from_le_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Sets both endpoints from a word produced by [`pack_endpoints`].
    #[inline]
    pub fn set_endpoints(&mut self, endpoints: u32) {
        self.bytes[0..4].copy_from_slice(&endpoints.to_le_bytes());
    }

    /// Whether the block is in 4-colour mode (`color0 > color1`).
    #[inline]
    pub const fn is_color4(&self) -> bool {
        self.color0().greater_than(&self.color1())
    }

    /// The palette mode of this block.
    #[inline]
    pub const fn mode(&self) -> Dxt1Mode {
        Dxt1Mode::from_endpoints(self.color0(), self.color1())
    }

    /// The packed selector word.
    #[inline]
    pub const fn selectors(&self) -> u32 {
        u32::from_le_bytes([self.bytes[4], self.bytes[5], self.bytes[6], self.bytes[7]])
    }

    /// Replaces all 16 selectors at once.
    #[inline]
    pub fn set_selectors(&mut self, selectors: u32) {
        self.bytes[4..8].copy_from_slice(&selectors.to_le_bytes());
    }

    /// Selector of the texel at (`x`, `y`), in bit order.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block.
    #[inline]
    pub fn selector(&self, x: usize, y: usize) -> u8 {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        let byte = self.bytes[4 + y];
        (byte >> (x * 2)) & 0b11
    }

    /// Sets the selector of the texel at (`x`, `y`), in bit order.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block, or `selector` is above 3.
    #[inline]
    pub fn set_selector(&mut self, x: usize, y: usize, selector: u8) {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        assert!(selector < 4);
        let shift = x * 2;
        let byte = &mut self.bytes[4 + y];
        *byte = (*byte & !(0b11 << shift)) | (selector << shift);
    }

    /// Selector of the texel at (`x`, `y`), as a position along the 4-colour ramp.
    #[inline]
    pub fn linear_selector(&self, x: usize, y: usize) -> u8 {
        DXT1_TO_LINEAR[self.selector(x, y) as usize]
    }

    /// Sets the selector of the texel at (`x`, `y`) from a position along the 4-colour ramp.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block, or `linear` is above 3.
    #[inline]
    pub fn set_linear_selector(&mut self, x: usize, y: usize, linear: u8) {
        assert!(linear < 4);
        self.set_selector(x, y, DXT1_FROM_LINEAR[linear as usize]);
    }

    /// Whether the block uses cut-out alpha: 3-colour mode with at least one texel
    /// selecting the transparent entry.
    pub fn is_alpha_block(&self) -> bool {
        if self.is_color4() {
            return false;
        }

        let selectors = self.selectors();
        (0..16).any(|i| (selectors >> (i * 2)) & 0b11 == 3)
    }

    /// The palette of this block.
    #[inline]
    pub fn palette(&self, variant: PaletteVariant) -> Dxt1Palette {
        variant.block_colors(self.color0(), self.color1())
    }

    /// Decodes the block, keeping the transparent black entry of 3-colour mode.
    pub fn decode(&self, variant: PaletteVariant) -> Decoded4x4Block {
        let palette = self.palette(variant);
        let selectors = self.selectors();

        let mut result = Decoded4x4Block::default();
        for (index, pixel) in result.pixels.iter_mut().enumerate() {
            let selector = (selectors >> (index * 2)) & 0b11;
            *pixel = palette.colors[selector as usize];
        }

        result
    }

    /// Decodes a single texel.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block.
    #[inline]
    pub fn texel(&self, x: usize, y: usize, variant: PaletteVariant) -> Color8888 {
        self.palette(variant).color(self.selector(x, y))
    }
}

/// Extracts one endpoint from a word produced by [`pack_endpoints`] and unpacks it.
///
/// # Panics
///
/// If `index` is not 0 or 1.
#[inline]
pub fn unpack_endpoint(endpoints: u32, index: u32, scaled: bool, alpha: u32) -> Color8888 {
    assert!(index < 2);
    Color565::from_raw((endpoints >> (index * 16)) as u16).unpack(scaled, alpha)
}

/// Packs two endpoints as `lo | hi << 16`.
///
/// # Panics
///
/// If either value does not fit in 16 bits.
#[inline]
pub fn pack_endpoints(lo: u32, hi: u32) -> u32 {
    assert!(lo <= 0xFFFF && hi <= 0xFFFF);
    lo | (hi << 16)
}
