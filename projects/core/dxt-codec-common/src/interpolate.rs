//! Weighted interpolation shared by the colour palettes and alpha ramps.
//!
//! DXT decoders in the wild disagree on whether the intermediate palette entries are
//! truncated (OpenGL S3TC extension, the DX9 "ideal" decoder) or rounded (as some DX
//! documentation describes). Both families compute
//!
//! ```text
//! (a * weight_a + b * weight_b + bias) / (weight_a + weight_b)
//! ```
//!
//! with `bias = 0` for [`Rounding::Truncate`] and `bias = divisor / 2` for [`Rounding::Round`].
//! A decode path picks one family and uses it for every entry.

/// Selects how intermediate palette entries are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Rounding {
    /// Integer division truncates towards zero.
    #[default]
    Truncate,
    /// Half the divisor is added before dividing.
    Round,
}

impl Rounding {
    /// Returns the bias added to the numerator for the given divisor.
    #[inline]
    pub const fn bias(self, divisor: u32) -> u32 {
        match self {
            Rounding::Truncate => 0,
            Rounding::Round => divisor / 2,
        }
    }
}

/// Blends `a` and `b` with integer weights.
///
/// # Examples
///
/// ```
/// use dxt_codec_common::interpolate::{interpolate, Rounding};
///
/// // 2/3 of the way from 0 towards 255
/// assert_eq!(interpolate(0, 255, 1, 2, Rounding::Truncate), 170);
/// assert_eq!(interpolate(255, 0, 2, 1, Rounding::Round), 170);
/// assert_eq!(interpolate(255, 0, 5, 2, Rounding::Truncate), 182);
/// ```
#[inline(always)]
pub const fn interpolate(a: u32, b: u32, weight_a: u32, weight_b: u32, rounding: Rounding) -> u32 {
    let divisor = weight_a + weight_b;
    (a * weight_a + b * weight_b + rounding.bias(divisor)) / divisor
}

/// [`interpolate`] for 8-bit channels.
#[inline(always)]
pub const fn interpolate_u8(a: u8, b: u8, weight_a: u32, weight_b: u32, rounding: Rounding) -> u8 {
    // The result lies between a and b, so it always fits.
    interpolate(a as u32, b as u32, weight_a, weight_b, rounding) as u8
}
