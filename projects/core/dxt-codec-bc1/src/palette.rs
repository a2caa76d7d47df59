//! DXT1 palette generation.
//!
//! All palettes hold four entries; in 3-colour mode the fourth is the transparent black
//! cut-out entry. Entries 0 and 1 are always the scaled endpoints.
//!
//! Based on the MSDN description of the format
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>

use derive_enum_all_values::AllValues;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::interpolate::{interpolate_u8, Rounding};

/// Which palette family to decode DXT1 colour blocks with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, AllValues)]
pub enum PaletteVariant {
    /// Truncating interpolation. Matches the OpenGL S3TC extension and the reference
    /// software decoders.
    #[default]
    Ideal,
    /// Rounding interpolation (`+1` before dividing by 3, `+1` before halving).
    IdealRound,
    /// Interpolation of NVIDIA NV5x hardware.
    Nv5x,
}

/// The two palette layouts of a DXT1 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dxt1Mode {
    /// `color0 > color1`: two endpoints and two interpolated colours.
    FourColor,
    /// `color0 <= color1`: two endpoints, their midpoint and transparent black.
    ThreeColor,
}

impl Dxt1Mode {
    /// Selects the mode from the packed endpoints.
    ///
    /// Equal endpoints select [`Dxt1Mode::ThreeColor`].
    #[inline]
    pub const fn from_endpoints(color0: Color565, color1: Color565) -> Self {
        if color0.greater_than(&color1) {
            Dxt1Mode::FourColor
        } else {
            Dxt1Mode::ThreeColor
        }
    }

    /// Number of distinct (non cut-out) colours in this mode.
    #[inline]
    pub const fn num_colors(self) -> usize {
        match self {
            Dxt1Mode::FourColor => 4,
            Dxt1Mode::ThreeColor => 3,
        }
    }
}

/// The colours a DXT1 block can select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dxt1Palette {
    /// Palette entries, indexed by the selector bits stored in the block.
    pub colors: [Color8888; 4],
    /// The mode which produced this palette.
    pub mode: Dxt1Mode,
}

impl Dxt1Palette {
    /// Number of distinct colours; 3 or 4.
    #[inline]
    pub const fn num_colors(&self) -> usize {
        self.mode.num_colors()
    }

    /// Returns the colour picked by a selector (as stored in the block).
    ///
    /// # Panics
    ///
    /// If `selector` is above 3.
    #[inline]
    pub fn color(&self, selector: u8) -> Color8888 {
        self.colors[selector as usize]
    }
}

/// Builds the 4-colour palette of two endpoints, regardless of their order.
///
/// Intermediate entries are `(2*c0 + c1) / 3` and `(c0 + 2*c1) / 3` per channel,
/// with the division rounded as requested. Alpha is 255 throughout.
pub fn block_colors4(color0: Color565, color1: Color565, rounding: Rounding) -> Dxt1Palette {
    let c0 = color0.to_color_8888();
    let c1 = color1.to_color_8888();

    let c2 = Color8888::new(
        interpolate_u8(c0.r, c1.r, 2, 1, rounding),
        interpolate_u8(c0.g, c1.g, 2, 1, rounding),
        interpolate_u8(c0.b, c1.b, 2, 1, rounding),
        255,
    );
    let c3 = Color8888::new(
        interpolate_u8(c0.r, c1.r, 1, 2, rounding),
        interpolate_u8(c0.g, c1.g, 1, 2, rounding),
        interpolate_u8(c0.b, c1.b, 1, 2, rounding),
        255,
    );

    Dxt1Palette {
        colors: [c0, c1, c2, c3],
        mode: Dxt1Mode::FourColor,
    }
}

/// Builds the 3-colour palette of two endpoints, regardless of their order.
///
/// The third entry is the per-channel midpoint, the fourth is transparent black.
pub fn block_colors3(color0: Color565, color1: Color565, rounding: Rounding) -> Dxt1Palette {
    let c0 = color0.to_color_8888();
    let c1 = color1.to_color_8888();

    let c2 = Color8888::new(
        interpolate_u8(c0.r, c1.r, 1, 1, rounding),
        interpolate_u8(c0.g, c1.g, 1, 1, rounding),
        interpolate_u8(c0.b, c1.b, 1, 1, rounding),
        255,
    );

    Dxt1Palette {
        colors: [c0, c1, c2, Color8888::TRANSPARENT_BLACK],
        mode: Dxt1Mode::ThreeColor,
    }
}

/// Builds the palette of a block, choosing the mode from the packed endpoints.
pub fn block_colors(color0: Color565, color1: Color565, rounding: Rounding) -> Dxt1Palette {
    match Dxt1Mode::from_endpoints(color0, color1) {
        Dxt1Mode::FourColor => block_colors4(color0, color1, rounding),
        Dxt1Mode::ThreeColor => block_colors3(color0, color1, rounding),
    }
}

/// Builds the palette produced by NVIDIA NV5x hardware.
///
/// Red and blue are interpolated at field width and scaled by `22/8`; green blends the
/// expanded endpoints in 1/256 steps. The weighting constants were measured from the
/// hardware's output and are kept literally.
///
/// `color4` selects the 4-colour layout; callers normally pass `color0 > color1`.
pub fn block_colors_nv5x(color0: Color565, color1: Color565, color4: bool) -> Dxt1Palette {
    let r0 = color0.red_bits() as i32;
    let b0 = color0.blue_bits() as i32;
    let r1 = color1.red_bits() as i32;
    let b1 = color1.blue_bits() as i32;
    let g0 = color0.green() as i32;
    let g1 = color1.green() as i32;

    let c0 = Color8888::new(((3 * r0 * 22) / 8) as u8, g0 as u8, ((3 * b0 * 22) / 8) as u8, 255);
    let c1 = Color8888::new(((3 * r1 * 22) / 8) as u8, g1 as u8, ((3 * b1 * 22) / 8) as u8, 255);

    let gdiff = g1 - g0;

    if color4 {
        let c2 = Color8888::new(
            (((2 * r0 + r1) * 22) / 8) as u8,
            ((256 * g0 + gdiff / 4 + 128 + gdiff * 80) / 256) as u8,
            (((2 * b0 + b1) * 22) / 8) as u8,
            255,
        );
        let c3 = Color8888::new(
            (((2 * r1 + r0) * 22) / 8) as u8,
            ((256 * g1 - gdiff / 4 + 128 - gdiff * 80) / 256) as u8,
            (((2 * b1 + b0) * 22) / 8) as u8,
            255,
        );

        Dxt1Palette {
            colors: [c0, c1, c2, c3],
            mode: Dxt1Mode::FourColor,
        }
    } else {
        let c2 = Color8888::new(
            (((r0 + r1) * 33) / 8) as u8,
            ((256 * g0 + gdiff / 4 + 128 + gdiff * 128) / 256) as u8,
            (((b0 + b1) * 33) / 8) as u8,
            255,
        );

        Dxt1Palette {
            colors: [c0, c1, c2, Color8888::TRANSPARENT_BLACK],
            mode: Dxt1Mode::ThreeColor,
        }
    }
}

impl PaletteVariant {
    /// Builds the palette of a block with this variant; the mode always follows the
    /// packed endpoint comparison.
    #[inline]
    pub fn block_colors(self, color0: Color565, color1: Color565) -> Dxt1Palette {
        match self {
            PaletteVariant::Ideal => block_colors(color0, color1, Rounding::Truncate),
            PaletteVariant::IdealRound => block_colors(color0, color1, Rounding::Round),
            PaletteVariant::Nv5x => {
                block_colors_nv5x(color0, color1, color0.greater_than(&color1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WHITE: Color565 = Color565::from_raw(0xFFFF);
    const BLACK: Color565 = Color565::from_raw(0x0000);

    #[test]
    fn four_color_white_to_black_truncates() {
        let palette = block_colors(WHITE, BLACK, Rounding::Truncate);
        assert_eq!(palette.mode, Dxt1Mode::FourColor);
        assert_eq!(palette.num_colors(), 4);
        assert_eq!(palette.colors[0], Color8888::new(255, 255, 255, 255));
        assert_eq!(palette.colors[1], Color8888::new(0, 0, 0, 255));
        assert_eq!(palette.colors[2], Color8888::new(170, 170, 170, 255));
        assert_eq!(palette.colors[3], Color8888::new(85, 85, 85, 255));
    }

    #[test]
    fn rounding_changes_only_intermediate_entries() {
        // Red 1 and 0 expand to 8 and 0.
        let c0 = Color565::from_raw(1 << 11);
        let c1 = Color565::from_raw(0);
        let truncated = block_colors4(c0, c1, Rounding::Truncate);
        let rounded = block_colors4(c0, c1, Rounding::Round);

        assert_eq!(truncated.colors[0], rounded.colors[0]);
        assert_eq!(truncated.colors[1], rounded.colors[1]);
        assert_eq!(truncated.colors[2].r, 5);
        assert_eq!(rounded.colors[2].r, 5);
        assert_eq!(truncated.colors[3].r, 2);
        assert_eq!(rounded.colors[3].r, 3);
    }

    #[test]
    fn three_color_midpoint_and_cut_out() {
        // Blue 1 and 3 expand to 8 and 24.
        let palette =
            block_colors(Color565::from_raw(1), Color565::from_raw(3), Rounding::Truncate);
        assert_eq!(palette.mode, Dxt1Mode::ThreeColor);
        assert_eq!(palette.num_colors(), 3);
        assert_eq!(palette.colors[2], Color8888::new(0, 0, 16, 255));
        assert_eq!(palette.colors[3], Color8888::TRANSPARENT_BLACK);

        let rounded = block_colors(Color565::from_raw(1), Color565::from_raw(2), Rounding::Round);
        // (8 + 16 + 1) / 2 = 12
        assert_eq!(rounded.colors[2].b, 12);
    }

    #[rstest]
    #[case(PaletteVariant::Ideal)]
    #[case(PaletteVariant::IdealRound)]
    #[case(PaletteVariant::Nv5x)]
    fn equal_endpoints_select_three_color_mode(#[case] variant: PaletteVariant) {
        let color = Color565::from_raw(0x1234);
        let palette = variant.block_colors(color, color);
        assert_eq!(palette.mode, Dxt1Mode::ThreeColor);
        assert_eq!(palette.colors[3], Color8888::TRANSPARENT_BLACK);
    }

    #[test]
    fn every_variant_reproduces_endpoints() {
        let pairs = [(0xFFFF, 0x0000), (0x0000, 0xFFFF), (0x1234, 0x1234), (0xF81F, 0x07E0)];
        for variant in PaletteVariant::all_values().iter() {
            for (c0, c1) in pairs {
                let (c0, c1) = (Color565::from_raw(c0), Color565::from_raw(c1));
                let palette = variant.block_colors(c0, c1);
                assert_eq!(palette.colors[0], c0.to_color_8888(), "{variant:?}");
                assert_eq!(palette.colors[1], c1.to_color_8888(), "{variant:?}");
            }
        }
    }

    #[test]
    fn nv5x_four_color_literal() {
        // c0: r=31 g=63 b=0, c1: r=0 g=0 b=31
        let c0 = Color565::from_raw(0xFFE0);
        let c1 = Color565::from_raw(0x001F);
        let palette = block_colors_nv5x(c0, c1, true);

        // gdiff = -255
        // g2 = (256*255 - 63 + 128 - 20400) / 256 = 44945 / 256 = 175
        // g3 = (0 + 63 + 128 + 20400) / 256 = 20591 / 256 = 80
        assert_eq!(palette.colors[2], Color8888::new(170, 175, 85, 255));
        assert_eq!(palette.colors[3], Color8888::new(85, 80, 170, 255));
    }

    #[test]
    fn nv5x_three_color_literal() {
        // c0: r=0 g=0 b=31, c1: r=31 g=63 b=0
        let c0 = Color565::from_raw(0x001F);
        let c1 = Color565::from_raw(0xFFE0);
        let palette = block_colors_nv5x(c0, c1, false);

        // r2 = 31 * 33 / 8 = 127, g2 = (0 + 63 + 128 + 32640) / 256 = 128
        assert_eq!(palette.colors[2], Color8888::new(127, 128, 127, 255));
        assert_eq!(palette.colors[3], Color8888::TRANSPARENT_BLACK);
    }

    #[test]
    fn nv5x_differs_from_ideal_green() {
        let c0 = Color565::from_raw(0xFFE0);
        let c1 = Color565::from_raw(0x001F);
        let nv = PaletteVariant::Nv5x.block_colors(c0, c1);
        let ideal = PaletteVariant::Ideal.block_colors(c0, c1);
        assert_eq!(ideal.colors[2].g, 170);
        assert_ne!(nv.colors[2].g, ideal.colors[2].g);
    }
}
