#![no_main]

// Compares the DXT3 decoder against rgbcx-sys for colour and bcdec_rs for alpha.

use core::mem;
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_bc2::util::decode_bc2_block;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt3Bytes {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Dxt3Bytes| {
    let ours = unsafe { decode_bc2_block(block.bytes.as_ptr(), PaletteVariant::Ideal) };
    let reference = hybrid_decode_bc2(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn hybrid_decode_bc2(block: &[u8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];
    let mut bcdec = [0u8; 4 * 16];

    unsafe {
        // Colour half is a plain DXT1 block, 3-colour mode included.
        rgbcx::unpack_bc1(
            block.as_ptr().add(8) as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    bcdec_rs::bc2(block, &mut bcdec, 4 * 4);

    unsafe {
        let mut pixels: [Color8888; 16] = mem::transmute(rgba);
        let alphas: [Color8888; 16] = mem::transmute(bcdec);
        for (pixel, alpha) in pixels.iter_mut().zip(alphas) {
            pixel.a = alpha.a;
        }
        Decoded4x4Block { pixels }
    }
}
