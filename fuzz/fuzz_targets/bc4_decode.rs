#![no_main]

// Compares the single channel alpha ramp decoder against rgbcx-sys.

use dxt_codec_bc3::util::decode_bc4_values;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt5AlphaBytes {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Dxt5AlphaBytes| {
    let ours = unsafe { decode_bc4_values(block.bytes.as_ptr()) };

    let mut reference = [0u8; 16];
    unsafe {
        rgbcx::unpack_bc4(
            block.bytes.as_ptr() as *const core::ffi::c_void,
            reference.as_mut_ptr(),
            1,
        );
    }

    assert_eq!(ours, reference, "Decoded values don't match");
});
