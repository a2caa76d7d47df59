//! Block format tags and their metadata.

use crate::error::DecodeError;
use core::fmt;
use derive_enum_all_values::AllValues;

/// The block formats known to the codec.
///
/// Raw tags (as stored by callers) convert with [`TryFrom<u8>`]; the tag of a format is its
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum DxtFormat {
    /// Opaque DXT1 (BC1). 3-colour mode cut-out texels decode as opaque black.
    Dxt1,
    /// DXT1 (BC1) with 1-bit cut-out alpha.
    Dxt1A,
    /// DXT3 (BC2): explicit 4-bit alpha.
    Dxt3,
    /// DXT5 (BC3): interpolated alpha.
    Dxt5,
    /// Single channel DXT5 alpha block (BC4 unsigned).
    Dxt5A,
    /// Two DXT5 alpha blocks holding X then Y (BC5 unsigned).
    DxnXy,
    /// Two DXT5 alpha blocks holding Y then X (3Dc / ATI2).
    DxnYx,
    /// ETC1. Metadata only; the codec does not decode it.
    Etc1,
}

impl DxtFormat {
    /// Display name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            DxtFormat::Dxt1 => "DXT1",
            DxtFormat::Dxt1A => "DXT1A",
            DxtFormat::Dxt3 => "DXT3",
            DxtFormat::Dxt5 => "DXT5",
            DxtFormat::Dxt5A => "DXT5A",
            DxtFormat::DxnXy => "DXN_XY",
            DxtFormat::DxnYx => "DXN_YX",
            DxtFormat::Etc1 => "ETC1",
        }
    }

    /// Compressed bits per texel.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            DxtFormat::Dxt1 | DxtFormat::Dxt1A | DxtFormat::Dxt5A | DxtFormat::Etc1 => 4,
            DxtFormat::Dxt3 | DxtFormat::Dxt5 | DxtFormat::DxnXy | DxtFormat::DxnYx => 8,
        }
    }

    /// Whether decoded texels carry meaningful alpha.
    pub const fn has_alpha(self) -> bool {
        match self {
            DxtFormat::Dxt1A | DxtFormat::Dxt3 | DxtFormat::Dxt5 | DxtFormat::Dxt5A => true,
            DxtFormat::Dxt1 | DxtFormat::DxnXy | DxtFormat::DxnYx | DxtFormat::Etc1 => false,
        }
    }

    /// Size of one 4x4 block in bytes.
    #[inline]
    pub const fn block_size_bytes(self) -> usize {
        (self.bits_per_pixel() as usize * 16) / 8
    }

    /// Whether [`decode_block`](crate::decode_block) and friends accept this format.
    pub const fn is_decodable(self) -> bool {
        !matches!(self, DxtFormat::Etc1)
    }

    /// The raw tag of this format.
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DxtFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DxtFormat {
    type Error = DecodeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        DxtFormat::all_values()
            .get(tag as usize)
            .copied()
            .ok_or(DecodeError::UnknownFormatTag(tag))
    }
}
