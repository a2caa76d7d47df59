//! # External Texel Decoder
//!
//! Wrapper around an optional native DXTn decompression library (`libtxc_dxtn` and
//! compatibles), which exports one per-texel fetch function per format:
//!
//! ```text
//! void fetch_2d_texel_rgba_dxt5(uint32 row_stride, const uint8 *src, int x, int y, void *dst);
//! ```
//!
//! The library is resolved through an [`ExternalLibraryLoader`] supplied by the caller,
//! at most once per [`ExternalTexelDecoder`]. The outcome is fixed from then on:
//!
//! - every function resolved: texels are fetched from the library.
//! - library missing, or any function missing: the decoder is unavailable, and fetching
//!   leaves the destination untouched. This is not an error.
//!
//! There is no process-wide instance; construct one decoder and share it (it is
//! [`Sync`] when its loader is).

use crate::error::DecodeError;
use crate::fetch::TexelDecoder;
use crate::format::DxtFormat;
use core::ffi::c_void;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::BLOCK_DIMENSION;
use log::{debug, warn};
use std::sync::OnceLock;

/// Signature of the per-texel fetch functions exported by the library.
///
/// `row_stride` is the image width in texels, `src` the start of the compressed image,
/// and `dst` receives 4 bytes of RGBA.
pub type FetchTexelFn =
    unsafe extern "C" fn(row_stride: u32, src: *const u8, x: i32, y: i32, dst: *mut c_void);

/// File name of the library on this platform.
#[cfg(windows)]
pub const EXTERNAL_LIBRARY_NAME: &str = "dxtn.dll";

/// File name of the library on this platform.
#[cfg(not(windows))]
pub const EXTERNAL_LIBRARY_NAME: &str = "libtxc_dxtn.so";

/// Symbol of the opaque DXT1 fetch function.
pub const FETCH_RGB_DXT1: &str = "fetch_2d_texel_rgb_dxt1";
/// Symbol of the DXT1 with alpha fetch function.
pub const FETCH_RGBA_DXT1: &str = "fetch_2d_texel_rgba_dxt1";
/// Symbol of the DXT3 fetch function.
pub const FETCH_RGBA_DXT3: &str = "fetch_2d_texel_rgba_dxt3";
/// Symbol of the DXT5 fetch function.
pub const FETCH_RGBA_DXT5: &str = "fetch_2d_texel_rgba_dxt5";

/// Resolves functions of a dynamically loaded library.
///
/// Implementations typically open the library on first use and keep it loaded for as
/// long as the returned function pointers may be called.
pub trait ExternalLibraryLoader {
    /// Returns the function named `symbol` in `library`, or [`None`] if the library cannot
    /// be loaded or does not export it.
    fn resolve(&self, library: &str, symbol: &str) -> Option<FetchTexelFn>;
}

/// The complete set of library functions.
#[derive(Debug, Clone, Copy)]
pub struct ExternalTexelFunctions {
    /// Opaque DXT1.
    pub rgb_dxt1: FetchTexelFn,
    /// DXT1 with cut-out alpha.
    pub rgba_dxt1: FetchTexelFn,
    /// DXT3.
    pub rgba_dxt3: FetchTexelFn,
    /// DXT5.
    pub rgba_dxt5: FetchTexelFn,
}

impl ExternalTexelFunctions {
    /// Resolves every function through `loader`; [`None`] if any is missing.
    pub fn resolve<L: ExternalLibraryLoader + ?Sized>(loader: &L, library: &str) -> Option<Self> {
        let mut missing = false;
        let mut lookup = |symbol: &str| {
            let function = loader.resolve(library, symbol);
            if function.is_none() {
                warn!("{library}: missing symbol {symbol}");
                missing = true;
            }
            function
        };

        let rgb_dxt1 = lookup(FETCH_RGB_DXT1);
        let rgba_dxt1 = lookup(FETCH_RGBA_DXT1);
        let rgba_dxt3 = lookup(FETCH_RGBA_DXT3);
        let rgba_dxt5 = lookup(FETCH_RGBA_DXT5);
        if missing {
            return None;
        }

        Some(Self {
            rgb_dxt1: rgb_dxt1?,
            rgba_dxt1: rgba_dxt1?,
            rgba_dxt3: rgba_dxt3?,
            rgba_dxt5: rgba_dxt5?,
        })
    }

    /// The function decoding `format`, if the library has one.
    pub const fn for_format(&self, format: DxtFormat) -> Option<FetchTexelFn> {
        match format {
            DxtFormat::Dxt1 => Some(self.rgb_dxt1),
            DxtFormat::Dxt1A => Some(self.rgba_dxt1),
            DxtFormat::Dxt3 => Some(self.rgba_dxt3),
            DxtFormat::Dxt5 => Some(self.rgba_dxt5),
            DxtFormat::Dxt5A | DxtFormat::DxnXy | DxtFormat::DxnYx | DxtFormat::Etc1 => None,
        }
    }
}

/// Outcome of the one-time library load.
#[derive(Debug, Clone, Copy)]
pub enum ExternalLibraryState {
    /// Every function resolved.
    Available(ExternalTexelFunctions),
    /// The library, or one of its functions, is missing.
    Unavailable,
}

/// Per-texel decoding through an external library, loaded lazily and at most once.
pub struct ExternalTexelDecoder<L: ExternalLibraryLoader> {
    loader: L,
    library: &'static str,
    state: OnceLock<ExternalLibraryState>,
}

impl<L: ExternalLibraryLoader> ExternalTexelDecoder<L> {
    /// Creates a decoder loading [`EXTERNAL_LIBRARY_NAME`] through `loader`. Nothing is
    /// loaded until first use.
    pub fn new(loader: L) -> Self {
        Self::with_library(loader, EXTERNAL_LIBRARY_NAME)
    }

    /// Creates a decoder loading `library` through `loader`.
    pub fn with_library(loader: L, library: &'static str) -> Self {
        Self {
            loader,
            library,
            state: OnceLock::new(),
        }
    }

    /// Loads the library if no attempt was made yet, and returns the outcome.
    ///
    /// Later calls return the first outcome without touching the loader, including after
    /// a failed load.
    pub fn ensure_initialized(&self) -> &ExternalLibraryState {
        self.state.get_or_init(|| {
            match ExternalTexelFunctions::resolve(&self.loader, self.library) {
                Some(functions) => {
                    debug!("{}: loaded external DXTn texel functions", self.library);
                    ExternalLibraryState::Available(functions)
                }
                None => {
                    warn!(
                        "{}: external DXTn texel decoding unavailable",
                        self.library
                    );
                    ExternalLibraryState::Unavailable
                }
            }
        })
    }

    /// Whether the library's functions are usable. Loads the library on first call.
    pub fn is_available(&self) -> bool {
        matches!(self.ensure_initialized(), ExternalLibraryState::Available(_))
    }

    /// The loaded functions, if available. Loads the library on first call.
    pub fn functions(&self) -> Option<&ExternalTexelFunctions> {
        match self.ensure_initialized() {
            ExternalLibraryState::Available(functions) => Some(functions),
            ExternalLibraryState::Unavailable => None,
        }
    }

    /// Fetches the texel at (`x`, `y`) of a compressed image into `dst`.
    ///
    /// Leaves `dst` untouched if the library is unavailable or has no function for
    /// `format`.
    ///
    /// # Safety
    ///
    /// `src` must point to a compressed image of `format` at least `row_stride` texels
    /// wide that contains the block covering (`x`, `y`).
    pub unsafe fn fetch_image_texel(
        &self,
        format: DxtFormat,
        src: *const u8,
        row_stride: u32,
        x: i32,
        y: i32,
        dst: &mut [u8; 4],
    ) {
        let Some(fetch) = self.functions().and_then(|f| f.for_format(format)) else {
            return;
        };

        let mut texel = [0u8; 4];
        fetch(row_stride, src, x, y, texel.as_mut_ptr().cast());
        *dst = texel;
    }
}

impl<L: ExternalLibraryLoader> TexelDecoder for ExternalTexelDecoder<L> {
    fn fetch_texel(
        &self,
        format: DxtFormat,
        block: &[u8],
        x: usize,
        y: usize,
        dst: &mut Color8888,
    ) -> Result<(), DecodeError> {
        assert!(x < BLOCK_DIMENSION && y < BLOCK_DIMENSION);
        let needed = format.block_size_bytes();
        if block.len() < needed {
            return Err(DecodeError::SourceTooSmall {
                needed,
                actual: block.len(),
            });
        }

        let mut texel = dst.to_array();
        // SAFETY: `block` holds one whole block, which is a 4 texel wide image.
        unsafe {
            self.fetch_image_texel(
                format,
                block.as_ptr(),
                BLOCK_DIMENSION as u32,
                x as i32,
                y as i32,
                &mut texel,
            )
        };
        *dst = Color8888::from_array(texel);
        Ok(())
    }
}
