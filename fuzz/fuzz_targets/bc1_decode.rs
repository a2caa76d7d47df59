#![no_main]

// Compares the DXT1 decoder against rgbcx-sys using the Ideal palette.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use core::mem;
use dxt_codec_bc1::util::decode_bc1_block;
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt1Bytes {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Dxt1Bytes| {
    let ours = unsafe { decode_bc1_block(block.bytes.as_ptr(), PaletteVariant::Ideal) };
    let reference = rgbcx_decode_bc1(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1(block: &[u8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        // RGBA byte order matches the Color8888 layout.
        let pixels: [Color8888; 16] = mem::transmute(rgba);
        Decoded4x4Block { pixels }
    }
}
