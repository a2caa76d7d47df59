use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;
use proptest::prelude::*;

#[test]
fn can_round_trip_exact_colours() {
    // Colours whose channels are exact expansions of 5/6-bit values survive unchanged.
    let test_colors = [
        Color8888::new(255, 0, 0, 255),
        Color8888::new(0, 255, 0, 255),
        Color8888::new(0, 0, 255, 255),
        Color8888::new(0, 0, 0, 255),
        Color8888::new(255, 255, 255, 255),
        Color8888::new(132, 130, 132, 255),
    ];

    for original in test_colors {
        let round_trip = Color565::pack_color8888(original, true, 128).unpack(true, 255);
        assert_eq!(original, round_trip, "colour {original:?} did not round trip");
    }
}

proptest! {
    #[test]
    fn rounded_pack_stays_within_quantization_error(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
    ) {
        let unpacked = Color565::pack(r, g, b, true, 128).unpack(true, 255);

        // Nearest 5-bit step is at most 255/62 away, plus one for bit replication.
        prop_assert!((unpacked.r as i32 - r as i32).abs() <= 4);
        prop_assert!((unpacked.b as i32 - b as i32).abs() <= 4);
        // Same for the 6-bit green channel: 255/126 plus one.
        prop_assert!((unpacked.g as i32 - g as i32).abs() <= 2);
    }

    #[test]
    fn truncating_pack_never_rounds_up(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let packed = Color565::pack(r, g, b, true, 0);
        prop_assert!(packed.red_bits() as u32 * 255 <= r as u32 * 31);
        prop_assert!(packed.green_bits() as u32 * 255 <= g as u32 * 63);
        prop_assert!(packed.blue_bits() as u32 * 255 <= b as u32 * 31);
    }

    #[test]
    fn unscaled_round_trip_is_exact(raw in any::<u16>()) {
        let color = Color565::from_raw(raw);
        let unpacked = color.unpack(false, 0);
        prop_assert_eq!(Color565::pack(unpacked.r, unpacked.g, unpacked.b, false, 0), color);
    }
}
