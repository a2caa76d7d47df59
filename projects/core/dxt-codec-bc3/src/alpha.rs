//! # DXT5 Alpha Block
//!
//! An 8-byte block holding two 8-bit endpoints and sixteen 3-bit selectors:
//!
//! ```text
//! offset 0: low  endpoint (l)
//! offset 1: high endpoint (h)
//! offset 2: selectors (48 bits, little endian, 3 bits per texel, row-major, x-minor)
//! ```
//!
//! The ramp has two layouts, picked by comparing the raw endpoint bytes:
//!
//! - `l > h`: eight values,
//!   `[l, h, (6l+h)/7, (5l+2h)/7, (4l+3h)/7, (3l+4h)/7, (2l+5h)/7, (l+6h)/7]`
//! - `l <= h`: six values and two cut-out sentinels,
//!   `[l, h, (4l+h)/5, (3l+2h)/5, (2l+3h)/5, (l+4h)/5, 0, 255]`
//!
//! All divisions truncate.
//!
//! This block is the alpha half of DXT5, and the whole of the single channel (DXT5A) and
//! each half of the dual channel (DXN) formats.

use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::interpolate::{interpolate_u8, Rounding};
use dxt_codec_common::selectors::{DXT5_ALPHA6_TO_LINEAR, DXT5_SELECTOR_VALUES, DXT5_TO_LINEAR};
use dxt_codec_common::{BLOCK_DIMENSION, TEXELS_PER_BLOCK};
use likely_stable::unlikely;

/// Mask of the 48 selector bits.
const SELECTOR_MASK: u64 = (1 << 48) - 1;

/// The two ramp layouts of a DXT5 alpha block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dxt5AlphaMode {
    /// `l > h`: eight interpolated values.
    EightValue,
    /// `l <= h`: six interpolated values, then 0 and 255.
    SixValue,
}

impl Dxt5AlphaMode {
    /// Selects the mode from the raw endpoints. Equal endpoints select
    /// [`Dxt5AlphaMode::SixValue`].
    #[inline]
    pub const fn from_endpoints(low: u8, high: u8) -> Self {
        if low > high {
            Dxt5AlphaMode::EightValue
        } else {
            Dxt5AlphaMode::SixValue
        }
    }

    /// Number of interpolated (non sentinel) values; 6 or 8.
    #[inline]
    pub const fn num_values(self) -> usize {
        match self {
            Dxt5AlphaMode::EightValue => 8,
            Dxt5AlphaMode::SixValue => 6,
        }
    }
}

/// The 8-value ramp of two endpoints, regardless of their order.
pub fn block_values8(low: u8, high: u8) -> [u8; DXT5_SELECTOR_VALUES] {
    let mut values = [low, high, 0, 0, 0, 0, 0, 0];
    for (i, value) in values.iter_mut().enumerate().skip(2) {
        let weight_high = (i - 1) as u32;
        *value = interpolate_u8(low, high, 7 - weight_high, weight_high, Rounding::Truncate);
    }
    values
}

/// The 6-value ramp of two endpoints, regardless of their order, followed by 0 and 255.
pub fn block_values6(low: u8, high: u8) -> [u8; DXT5_SELECTOR_VALUES] {
    let mut values = [low, high, 0, 0, 0, 0, 0, 255];
    for (i, value) in values.iter_mut().enumerate().take(6).skip(2) {
        let weight_high = (i - 1) as u32;
        *value = interpolate_u8(low, high, 5 - weight_high, weight_high, Rounding::Truncate);
    }
    values
}

/// The ramp of two endpoints, choosing the layout from their order.
#[inline]
pub fn block_values(low: u8, high: u8) -> [u8; DXT5_SELECTOR_VALUES] {
    match Dxt5AlphaMode::from_endpoints(low, high) {
        Dxt5AlphaMode::EightValue => block_values8(low, high),
        Dxt5AlphaMode::SixValue => block_values6(low, high),
    }
}

/// Writes the ramp of two endpoints into the alpha channel of `colors`, leaving the colour
/// channels untouched.
///
/// Returns the layout used.
pub fn apply_block_values(
    colors: &mut [Color8888; DXT5_SELECTOR_VALUES],
    low: u8,
    high: u8,
) -> Dxt5AlphaMode {
    let mode = Dxt5AlphaMode::from_endpoints(low, high);
    let values = block_values(low, high);
    for (color, value) in colors.iter_mut().zip(values) {
        color.a = value;
    }
    mode
}

/// Extracts endpoint `index` (0 for low, 1 for high) from a word produced by
/// [`pack_endpoints`].
///
/// # Panics
///
/// If `index` is not 0 or 1.
#[inline]
pub fn unpack_endpoint(packed: u32, index: u32) -> u32 {
    assert!(index < 2);
    (packed >> (8 * index)) & 0xFF
}

/// Packs two endpoints as `low | high << 8`.
///
/// # Panics
///
/// If either value exceeds 255.
#[inline]
pub fn pack_endpoints(low: u32, high: u32) -> u32 {
    assert!(low <= 0xFF && high <= 0xFF);
    low | (high << 8)
}

/// A single 8-byte DXT5 alpha block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Dxt5AlphaBlock {
    /// The raw block bytes.
    pub bytes: [u8; Dxt5AlphaBlock::SIZE],
}

impl Dxt5AlphaBlock {
    /// Size of the alpha block in bytes.
    pub const SIZE: usize = 8;

    /// Wraps raw block bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self { bytes }
    }

    /// Copies a block from the start of `src`.
    ///
    /// Returns [`None`] if the slice is shorter than [`Dxt5AlphaBlock::SIZE`].
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        if unlikely(src.len() < Self::SIZE) {
            return None;
        }

        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(&src[..Self::SIZE]);
        Some(Self { bytes })
    }

    /// Builds a block from its endpoints and 48-bit selector field.
    #[inline]
    pub fn new(low: u8, high: u8, selectors: u64) -> Self {
        let mut block = Self::default();
        block.set_low(low);
        block.set_high(high);
        block.set_selectors(selectors);
        block
    }

    /// First (low) endpoint.
    #[inline]
    pub const fn low(&self) -> u8 {
        self.bytes[0]
    }

    /// Second (high) endpoint.
    #[inline]
    pub const fn high(&self) -> u8 {
        self.bytes[1]
    }

    /// Replaces the low endpoint.
    #[inline]
    pub fn set_low(&mut self, value: u8) {
        self.bytes[0] = value;
    }

    /// Replaces the high endpoint.
    #[inline]
    pub fn set_high(&mut self, value: u8) {
        self.bytes[1] = value;
    }

    /// Both endpoints as `low | high << 8`.
    #[inline]
    pub const fn endpoints(&self) -> u32 {
        self.bytes[0] as u32 | (self.bytes[1] as u32) << 8
    }

    /// Sets both endpoints from a word produced by [`pack_endpoints`].
    #[inline]
    pub fn set_endpoints(&mut self, packed: u32) {
        self.set_low(unpack_endpoint(packed, 0) as u8);
        self.set_high(unpack_endpoint(packed, 1) as u8);
    }

    /// The ramp layout of this block.
    #[inline]
    pub const fn mode(&self) -> Dxt5AlphaMode {
        Dxt5AlphaMode::from_endpoints(self.low(), self.high())
    }

    /// Whether the block uses the 8-value ramp.
    #[inline]
    pub const fn is_alpha8(&self) -> bool {
        matches!(self.mode(), Dxt5AlphaMode::EightValue)
    }

    /// The 48-bit selector field.
    #[inline]
    pub const fn selectors(&self) -> u64 {
        let b = &self.bytes;
        u64::from_le_bytes([b[2], b[3], b[4], b[5], b[6], b[7], 0, 0])
    }

    /// Replaces all 16 selectors; bits above 48 are ignored.
    #[inline]
    pub fn set_selectors(&mut self, selectors: u64) {
        let bytes = (selectors & SELECTOR_MASK).to_le_bytes();
        self.bytes[2..8].copy_from_slice(&bytes[..6]);
    }

    /// Selector of the texel at (`x`, `y`), in bit order.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block.
    #[inline]
    pub fn selector(&self, x: usize, y: usize) -> u8 {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        let shift = (y * BLOCK_DIMENSION + x) * 3;
        ((self.selectors() >> shift) & 0b111) as u8
    }

    /// Sets the selector of the texel at (`x`, `y`), in bit order.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block, or `selector` is above 7.
    #[inline]
    pub fn set_selector(&mut self, x: usize, y: usize, selector: u8) {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        assert!(selector < 8);
        let shift = (y * BLOCK_DIMENSION + x) * 3;
        let selectors = (self.selectors() & !(0b111 << shift)) | ((selector as u64) << shift);
        self.set_selectors(selectors);
    }

    /// Selector of the texel at (`x`, `y`) as a position along the ramp of this block's
    /// layout. The sentinels of the 6-value layout map to 0.
    #[inline]
    pub fn linear_selector(&self, x: usize, y: usize) -> u8 {
        let selector = self.selector(x, y) as usize;
        match self.mode() {
            Dxt5AlphaMode::EightValue => DXT5_TO_LINEAR[selector],
            Dxt5AlphaMode::SixValue => DXT5_ALPHA6_TO_LINEAR[selector],
        }
    }

    /// The ramp of this block.
    #[inline]
    pub fn values(&self) -> [u8; DXT5_SELECTOR_VALUES] {
        block_values(self.low(), self.high())
    }

    /// Decodes all 16 values, row-major.
    pub fn decode(&self) -> [u8; TEXELS_PER_BLOCK] {
        let values = self.values();
        let selectors = self.selectors();

        let mut result = [0u8; TEXELS_PER_BLOCK];
        for (index, value) in result.iter_mut().enumerate() {
            let selector = (selectors >> (index * 3)) & 0b111;
            *value = values[selector as usize];
        }
        result
    }

    /// Decodes the value of a single texel.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the block.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> u8 {
        self.values()[self.selector(x, y) as usize]
    }
}
