//! # RGB565 Endpoint Packing
//!
//! DXT1, DXT3 and DXT5 colour blocks store their two endpoints as 16-bit RGB565 values:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! ## Scaled and unscaled values
//!
//! Both directions take a `scaled` flag:
//!
//! - When packing, a scaled channel is quantized from the 8-bit range to its field width
//!   with `(channel * max + bias) / 255`, where `max` is 31 or 63. The `bias` picks the
//!   rounding convention of the encoder (`0` truncates, `128` rounds to nearest).
//!   Unscaled channels are used as-is. Either way, the result is clamped to the field width.
//! - When unpacking, a scaled channel is expanded to 8 bits by replicating its top bits,
//!   following the D3D11 functional specification; unscaled channels stay in their 5/6-bit
//!   range, for callers doing arithmetic at field width.
//!
//! Packing with `bias = 128` is the exact inverse of scaled unpacking.
//!
//! ```rust
//! use dxt_codec_common::color_565::Color565;
//!
//! let color = Color565::pack(255, 128, 64, true, 128);
//! assert_eq!(color.raw_value(), 0xFC08);
//!
//! let rgba = color.unpack(true, 255);
//! assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 130, 66, 255));
//! ```
//!
//! ## Additional Reading
//!
//! - [GPU BCn Decoding by Fabian Giesen](https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/)

use crate::color_8888::Color8888;

/// Largest value of a 5-bit field.
pub const MAX_5BIT: u32 = 31;

/// Largest value of a 6-bit field.
pub const MAX_6BIT: u32 = 63;

/// Represents a 16-bit RGB565 colour (5 bits red, 6 bits green, 5 bits blue)
/// as stored in the endpoints of DXT colour blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Packs separate channels into a [`Color565`].
    ///
    /// # Parameters
    ///
    /// - `r`, `g`, `b`: The channels. 8-bit values when `scaled`, field-width values otherwise.
    /// - `scaled`: Quantize the channels from 8 bits down to 5/6 bits before packing.
    /// - `bias`: Rounding bias added before the division by 255 when `scaled`.
    ///   `0` truncates, `128` rounds to nearest.
    ///
    /// Channels which exceed their field width after quantization are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_common::color_565::Color565;
    ///
    /// assert_eq!(Color565::pack(255, 255, 255, true, 0).raw_value(), 0xFFFF);
    /// // Unscaled channels are clamped to their field width.
    /// assert_eq!(Color565::pack(200, 200, 200, false, 0).raw_value(), 0xFFFF);
    /// ```
    #[inline]
    pub fn pack(r: u8, g: u8, b: u8, scaled: bool, bias: u32) -> Self {
        let mut r = r as u32;
        let mut g = g as u32;
        let mut b = b as u32;

        if scaled {
            r = (r * MAX_5BIT).saturating_add(bias) / 255;
            g = (g * MAX_6BIT).saturating_add(bias) / 255;
            b = (b * MAX_5BIT).saturating_add(bias) / 255;
        }

        let r = r.min(MAX_5BIT);
        let g = g.min(MAX_6BIT);
        let b = b.min(MAX_5BIT);

        Self::from_raw((b | (g << 5) | (r << 11)) as u16)
    }

    /// Packs the colour channels of a [`Color8888`]; alpha is ignored.
    ///
    /// See [`Self::pack`] for the meaning of `scaled` and `bias`.
    #[inline]
    pub fn pack_color8888(color: Color8888, scaled: bool, bias: u32) -> Self {
        Self::pack(color.r, color.g, color.b, scaled, bias)
    }

    /// Unpacks this colour into a [`Color8888`].
    ///
    /// # Parameters
    ///
    /// - `scaled`: Expand the 5/6-bit fields to 8 bits by bit replication.
    ///   When `false`, the channels keep their raw field values.
    /// - `alpha`: Alpha of the result, clamped to 255.
    #[inline]
    pub fn unpack(&self, scaled: bool, alpha: u32) -> Color8888 {
        let alpha = alpha.min(255) as u8;
        if scaled {
            Color8888::new(self.red(), self.green(), self.blue(), alpha)
        } else {
            Color8888::new(self.red_bits(), self.green_bits(), self.blue_bits(), alpha)
        }
    }

    /// Raw 5-bit red field (0-31)
    #[inline]
    pub const fn red_bits(&self) -> u8 {
        ((self.value >> 11) & 0x1F) as u8
    }

    /// Raw 6-bit green field (0-63)
    #[inline]
    pub const fn green_bits(&self) -> u8 {
        ((self.value >> 5) & 0x3F) as u8
    }

    /// Raw 5-bit blue field (0-31)
    #[inline]
    pub const fn blue_bits(&self) -> u8 {
        (self.value & 0x1F) as u8
    }

    // NOTE: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/
    // BC1 as written in the D3D11 functional spec first expands the endpoint values from
    // 5 or 6 bits to 8 bits by replicating the top bits; all three vendors appear to do this
    // or something equivalent.

    /// Extracts the expanded 8-bit red component (0-255)
    ///
    /// The 5-bit value is expanded with `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = self.red_bits();
        (r << 3) | (r >> 2)
    }

    /// Extracts the expanded 8-bit green component (0-255)
    ///
    /// The 6-bit value is expanded with `(value << 2) | (value >> 4)`.
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = self.green_bits();
        (g << 2) | (g >> 4)
    }

    /// Extracts the expanded 8-bit blue component (0-255)
    ///
    /// The 5-bit value is expanded with `(value << 3) | (value >> 2)`.
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.blue_bits();
        (b << 3) | (b >> 2)
    }

    /// Returns if this value is greater than the other.
    ///
    /// This is the comparison which selects between the 4-colour and 3-colour
    /// modes of a DXT1 block; it operates on the packed values.
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255).
    ///
    /// Shorthand for `unpack(true, 255)`.
    ///
    /// ```
    /// use dxt_codec_common::color_565::Color565;
    ///
    /// let rgba = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 0, 0, 255));
    /// ```
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        self.unpack(true, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xF800, 31, 0, 0)]
    #[case(0x07E0, 0, 63, 0)]
    #[case(0x001F, 0, 0, 31)]
    #[case(0x8410, 16, 32, 16)]
    fn extracts_raw_fields(#[case] raw: u16, #[case] r: u8, #[case] g: u8, #[case] b: u8) {
        let color = Color565::from_raw(raw);
        assert_eq!(color.red_bits(), r);
        assert_eq!(color.green_bits(), g);
        assert_eq!(color.blue_bits(), b);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 8)]
    #[case(16, 132)]
    #[case(31, 255)]
    fn expands_five_bit_channels_by_replication(#[case] bits: u16, #[case] expected: u8) {
        let color = Color565::from_raw((bits << 11) | bits);
        assert_eq!(color.red(), expected);
        assert_eq!(color.blue(), expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 4)]
    #[case(32, 130)]
    #[case(63, 255)]
    fn expands_six_bit_channel_by_replication(#[case] bits: u16, #[case] expected: u8) {
        assert_eq!(Color565::from_raw(bits << 5).green(), expected);
    }

    #[test]
    fn unscaled_pack_uses_channels_as_is() {
        assert_eq!(Color565::pack(31, 63, 31, false, 0).raw_value(), 0xFFFF);
        assert_eq!(Color565::pack(1, 2, 3, false, 0).raw_value(), (1 << 11) | (2 << 5) | 3);
    }

    #[test]
    fn unscaled_pack_clamps_to_field_width() {
        let color = Color565::pack(32, 64, 255, false, 0);
        assert_eq!(color.red_bits(), 31);
        assert_eq!(color.green_bits(), 63);
        assert_eq!(color.blue_bits(), 31);
    }

    #[rstest]
    #[case(0, 127, 15)] // 127 * 31 / 255 = 15.44
    #[case(128, 127, 15)] // (3937 + 128) / 255 = 15.94
    #[case(0, 132, 16)]
    #[case(128, 140, 17)]
    fn scaled_pack_applies_bias(#[case] bias: u32, #[case] channel: u8, #[case] expected: u8) {
        let color = Color565::pack(channel, 0, channel, true, bias);
        assert_eq!(color.red_bits(), expected);
        assert_eq!(color.blue_bits(), expected);
    }

    #[test]
    fn scaled_pack_clamps_large_bias() {
        let color = Color565::pack(255, 255, 255, true, 1000);
        assert_eq!(color.raw_value(), 0xFFFF);
    }

    #[test]
    fn unpack_clamps_alpha() {
        assert_eq!(Color565::from_raw(0).unpack(true, 1000).a, 255);
        assert_eq!(Color565::from_raw(0).unpack(false, 17).a, 17);
    }

    #[test]
    fn unscaled_unpack_returns_field_values() {
        let rgba = Color565::from_raw(0xFFFF).unpack(false, 0);
        assert_eq!(rgba, Color8888::new(31, 63, 31, 0));
    }

    #[test]
    fn scaled_pack_inverts_scaled_unpack_for_every_value() {
        for raw in 0..=u16::MAX {
            let color = Color565::from_raw(raw);
            let repacked = Color565::pack_color8888(color.unpack(true, 255), true, 128);
            assert_eq!(repacked, color, "raw value {raw:#06X} did not survive a round trip");
        }
    }

    #[test]
    fn greater_than_compares_packed_values() {
        let a = Color565::from_raw(0x0020);
        let b = Color565::from_raw(0x001F);
        assert!(a.greater_than(&b));
        assert!(!b.greater_than(&a));
        assert!(!a.greater_than(&a));
    }
}
