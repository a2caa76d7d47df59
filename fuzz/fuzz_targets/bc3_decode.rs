#![no_main]

// Compares the DXT5 decoder against rgbcx-sys: the colour half as a DXT1 block (3-colour
// mode included), the alpha half as a BC4 block.

use core::mem;
use dxt_codec_bc1::PaletteVariant;
use dxt_codec_bc3::util::decode_bc3_block;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt5Bytes {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Dxt5Bytes| {
    let ours = unsafe { decode_bc3_block(block.bytes.as_ptr(), PaletteVariant::Ideal) };
    let reference = hybrid_decode_bc3(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn hybrid_decode_bc3(block: &[u8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr().add(8) as *const core::ffi::c_void,
            rgba.as_mut_ptr() as *mut core::ffi::c_void,
            true,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );

        // Alpha lands in every 4th byte, overwriting what unpack_bc1 wrote there.
        rgbcx::unpack_bc4(
            block.as_ptr() as *const core::ffi::c_void,
            rgba.as_mut_ptr().add(3),
            4,
        );

        let pixels: [Color8888; 16] = mem::transmute(rgba);
        Decoded4x4Block { pixels }
    }
}
