#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod decode;
pub mod error;
#[cfg(feature = "std")]
pub mod external;
pub mod fetch;
pub mod format;
pub mod settings;

pub use decode::{decode_block, decode_blocks};
pub use error::DecodeError;
pub use fetch::{decode_block_with, fetch_texel, BuiltinTexelDecoder, TexelDecoder};
pub use format::DxtFormat;
pub use settings::DecodeSettings;

// Types used in signatures of this crate.
pub use dxt_codec_bc1::PaletteVariant;
pub use dxt_codec_common::color_8888::Color8888;
pub use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
