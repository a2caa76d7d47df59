//! # Selector Remap Tables
//!
//! The selectors (per-texel indices) stored in DXT blocks are not ordered along the
//! interpolation ramp. For a 4-colour DXT1 block the bit patterns map to the ramp as
//!
//! ```text
//! bits:   0     2     3     1
//! ramp:  c0 -> 2/3 -> 1/3 -> c1
//! ```
//!
//! and an 8-value DXT5 alpha block as
//!
//! ```text
//! bits:   0  2  3  4  5  6  7  1
//! ramp:  a0 ----------------> a1
//! ```
//!
//! Encoders usually search in *linear* order (ascending position along the ramp), then
//! convert to bit order before writing the block. The `FROM_LINEAR` tables map a linear
//! position to its bit pattern, the `TO_LINEAR` tables map back.
//!
//! The invert tables map a selector to the one picking the same ramp value once the two
//! endpoints of a block are swapped.
//!
//! These values are consumed by hardware decoders and other codecs; they must never change.

/// Number of distinct selectors in a DXT1 colour block (2 bits).
pub const DXT1_SELECTOR_VALUES: usize = 4;

/// Number of distinct selectors in a DXT5 alpha block (3 bits).
pub const DXT5_SELECTOR_VALUES: usize = 8;

/// Linear ramp position → DXT1 selector bits.
pub const DXT1_FROM_LINEAR: [u8; DXT1_SELECTOR_VALUES] = [0, 2, 3, 1];

/// DXT1 selector bits → linear ramp position.
pub const DXT1_TO_LINEAR: [u8; DXT1_SELECTOR_VALUES] = [0, 3, 1, 2];

/// Linear ramp position → DXT5 selector bits (8-value ramp).
pub const DXT5_FROM_LINEAR: [u8; DXT5_SELECTOR_VALUES] = [0, 2, 3, 4, 5, 6, 7, 1];

/// DXT5 selector bits → linear ramp position (8-value ramp).
pub const DXT5_TO_LINEAR: [u8; DXT5_SELECTOR_VALUES] = [0, 7, 1, 2, 3, 4, 5, 6];

/// DXT5 selector bits → linear ramp position for the 6-value ramp.
///
/// Selectors 6 and 7 pick the constant 0 and 255 and have no ramp position; they map to 0.
pub const DXT5_ALPHA6_TO_LINEAR: [u8; DXT5_SELECTOR_VALUES] = [0, 5, 1, 2, 3, 4, 0, 0];

/// Selector equivalents after swapping the endpoints of a 6-value DXT5 alpha block.
///
/// The constant 0 and 255 entries (selectors 6 and 7) do not move.
pub const DXT5_SIX_ALPHA_INVERT: [u8; DXT5_SELECTOR_VALUES] = [1, 0, 5, 4, 3, 2, 6, 7];

/// Selector equivalents after swapping the endpoints of an 8-value DXT5 alpha block.
pub const DXT5_EIGHT_ALPHA_INVERT: [u8; DXT5_SELECTOR_VALUES] = [1, 0, 7, 6, 5, 4, 3, 2];

/// Converts a linear DXT1 ramp position into the selector stored in the block.
///
/// # Panics
///
/// If `linear` is not below [`DXT1_SELECTOR_VALUES`].
#[inline]
pub fn dxt1_selector_from_linear(linear: u8) -> u8 {
    DXT1_FROM_LINEAR[linear as usize]
}

/// Converts a stored DXT1 selector into its linear ramp position.
///
/// # Panics
///
/// If `selector` is not below [`DXT1_SELECTOR_VALUES`].
#[inline]
pub fn dxt1_selector_to_linear(selector: u8) -> u8 {
    DXT1_TO_LINEAR[selector as usize]
}

/// Converts a linear DXT5 ramp position into the selector stored in the block.
///
/// # Panics
///
/// If `linear` is not below [`DXT5_SELECTOR_VALUES`].
#[inline]
pub fn dxt5_selector_from_linear(linear: u8) -> u8 {
    DXT5_FROM_LINEAR[linear as usize]
}

/// Converts a stored DXT5 selector into its linear ramp position.
///
/// # Panics
///
/// If `selector` is not below [`DXT5_SELECTOR_VALUES`].
#[inline]
pub fn dxt5_selector_to_linear(selector: u8) -> u8 {
    DXT5_TO_LINEAR[selector as usize]
}
