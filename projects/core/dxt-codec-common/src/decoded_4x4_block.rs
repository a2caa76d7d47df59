//! # Decoded 4x4 Block
//!
//! [`Decoded4x4Block`] holds the 16 texels of one decompressed DXT block.
//!
//! ## Memory Layout
//!
//! The texels are stored in row-major order, x-minor, which is also the order in which
//! the selectors of a block are packed:
//!
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Usage
//!
//! ```
//! use dxt_codec_common::color_8888::Color8888;
//! use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let red = Color8888::new(255, 0, 0, 255);
//! let mut block = Decoded4x4Block::new(red);
//! block.set_pixel(3, 1, Color8888::TRANSPARENT_BLACK);
//!
//! assert_eq!(block.get_pixel(3, 1), Color8888::TRANSPARENT_BLACK);
//! assert_eq!(block.pixels[7], Color8888::TRANSPARENT_BLACK);
//! ```

use crate::color_8888::Color8888;
use crate::{BLOCK_DIMENSION, TEXELS_PER_BLOCK};

/// Represents a decoded 4x4 block of DXT texels
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; TEXELS_PER_BLOCK],
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::TRANSPARENT_BLACK)
    }
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; TEXELS_PER_BLOCK],
        }
    }

    /// Gets the pixel at the specified coordinates.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not below 4.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(
            x < BLOCK_DIMENSION && y < BLOCK_DIMENSION,
            "texel ({x}, {y}) is outside of the 4x4 block"
        );
        self.pixels[y * BLOCK_DIMENSION + x]
    }

    /// Sets the pixel at the specified coordinates.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not below 4.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(
            x < BLOCK_DIMENSION && y < BLOCK_DIMENSION,
            "texel ({x}, {y}) is outside of the 4x4 block"
        );
        self.pixels[y * BLOCK_DIMENSION + x] = pixel;
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn get_pixel_unchecked(&self, x: usize, y: usize) -> Color8888 {
        *self.pixels.get_unchecked(y * BLOCK_DIMENSION + x)
    }

    /// Sets a pixel at the specified coordinates (0-3, 0-3) without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must ensure that `x < 4` and `y < 4`.
    #[inline]
    pub unsafe fn set_pixel_unchecked(&mut self, x: usize, y: usize, pixel: Color8888) {
        *self.pixels.get_unchecked_mut(y * BLOCK_DIMENSION + x) = pixel;
    }

    /// Forces every texel of the block to be opaque.
    #[inline]
    pub fn make_opaque(&mut self) {
        for pixel in &mut self.pixels {
            pixel.a = 255;
        }
    }

    /// Returns the block as 64 bytes of RGBA8 texels in row-major order.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; TEXELS_PER_BLOCK * 4] {
        let mut bytes = [0u8; TEXELS_PER_BLOCK * 4];
        for (chunk, pixel) in bytes.chunks_exact_mut(4).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&pixel.to_array());
        }
        bytes
    }

    /// Checks if all pixels in the block have the same alpha values
    #[inline]
    pub fn has_identical_alpha(&self) -> bool {
        let first_pixel_alpha = self.pixels[0].a;
        self.pixels.iter().all(|pixel| pixel.a == first_pixel_alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_are_row_major() {
        let mut block = Decoded4x4Block::default();
        for y in 0..4 {
            for x in 0..4 {
                block.set_pixel(x, y, Color8888::new(x as u8, y as u8, 0, 255));
            }
        }

        assert_eq!(block.pixels[0], Color8888::new(0, 0, 0, 255));
        assert_eq!(block.pixels[3], Color8888::new(3, 0, 0, 255));
        assert_eq!(block.pixels[4], Color8888::new(0, 1, 0, 255));
        assert_eq!(block.pixels[15], Color8888::new(3, 3, 0, 255));
        assert_eq!(unsafe { block.get_pixel_unchecked(2, 1) }, block.get_pixel(2, 1));
    }

    #[test]
    fn unchecked_accessors_match_checked_ones() {
        let mut block = Decoded4x4Block::default();
        let pixel = Color8888::new(4, 5, 6, 7);
        unsafe { block.set_pixel_unchecked(3, 2, pixel) };

        assert_eq!(block.get_pixel(3, 2), pixel);
        assert_eq!(block.pixels[11], pixel);
        assert_eq!(unsafe { block.get_pixel_unchecked(3, 2) }, pixel);
        assert_eq!(block.get_pixel(2, 3), Color8888::TRANSPARENT_BLACK);
    }

    #[test]
    fn make_opaque_keeps_colour() {
        let mut block = Decoded4x4Block::new(Color8888::new(1, 2, 3, 0));
        assert!(block.has_identical_alpha());
        block.make_opaque();
        assert!(block.pixels.iter().all(|&p| p == Color8888::new(1, 2, 3, 255)));
    }

    #[test]
    fn to_rgba8_serializes_each_texel() {
        let mut block = Decoded4x4Block::default();
        block.set_pixel(1, 0, Color8888::new(9, 8, 7, 6));
        let bytes = block.to_rgba8();
        assert_eq!(&bytes[4..8], &[9, 8, 7, 6]);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn get_pixel_out_of_bounds_panics() {
        Decoded4x4Block::default().get_pixel(4, 0);
    }
}
