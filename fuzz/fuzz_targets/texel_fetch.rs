#![no_main]

// Single texel fetches must agree with whole-block decoding for every format and palette.

use dxt_codec_api::{decode_block, fetch_texel, DecodeSettings, DxtFormat, PaletteVariant};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub bytes: [u8; 16],
    pub format: u8,
    pub palette: u8,
}

fuzz_target!(|input: Input| {
    let Ok(format) = DxtFormat::try_from(input.format % 8) else {
        return;
    };
    if !format.is_decodable() {
        return;
    }

    let palettes = PaletteVariant::all_values();
    let palette = palettes[input.palette as usize % palettes.len()];
    let settings = DecodeSettings::with_palette(palette);

    let decoded = decode_block(format, &input.bytes, settings).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let texel = fetch_texel(format, &input.bytes, x, y, settings).unwrap();
            assert_eq!(texel, decoded.get_pixel(x, y), "{format} at ({x}, {y})");
        }
    }
});
