//! Run-time decode configuration.

use dxt_codec_bc1::PaletteVariant;

/// Options shared by every decode entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecodeSettings {
    /// Palette family for DXT1 style colour blocks (DXT1, DXT1A, and the colour half of
    /// DXT3/DXT5).
    pub palette: PaletteVariant,
}

impl DecodeSettings {
    /// Settings decoding with the given palette family.
    #[inline]
    pub const fn with_palette(palette: PaletteVariant) -> Self {
        Self { palette }
    }
}
