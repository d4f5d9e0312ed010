mod tests {
    use zip_strip::color::{
        Rgb, hsl, pack_rgb, packed_from_rgb, rgb_from_packed, unpack_blue, unpack_green,
        unpack_red,
    };

    fn channels(packed: u32) -> (u8, u8, u8) {
        (unpack_red(packed), unpack_green(packed), unpack_blue(packed))
    }

    fn assert_close(actual: u32, expected: u32) {
        let (ar, ag, ab) = channels(actual);
        let (er, eg, eb) = channels(expected);
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "{actual:06x} is not close to {expected:06x}"
        );
    }

    #[test]
    fn test_pack_rgb() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
        assert_eq!(pack_rgb(255, 255, 255), 0x00FF_FFFF);
        assert_eq!(pack_rgb(0, 0, 0), 0);
    }

    #[test]
    fn test_unpack_round_trip() {
        for value in 0..=255u8 {
            let packed = pack_rgb(value, 255 - value, value ^ 0x5A);
            assert_eq!(unpack_red(packed), value);
            assert_eq!(unpack_green(packed), 255 - value);
            assert_eq!(unpack_blue(packed), value ^ 0x5A);
        }
    }

    #[test]
    fn test_unpack_ignores_high_bits() {
        assert_eq!(channels(0xAB12_3456), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_rgb_conversion() {
        let color = Rgb {
            r: 0x11,
            g: 0x22,
            b: 0x33,
        };
        assert_eq!(packed_from_rgb(color), 0x0011_2233);
        assert_eq!(rgb_from_packed(0xFF11_2233), color);
    }

    #[test]
    fn test_hsl_primary_sectors() {
        // saturation is capped at 99, so primaries are one step off full
        assert_eq!(hsl(0, 100, 50), pack_rgb(254, 1, 1));
        assert_eq!(hsl(120, 100, 50), pack_rgb(1, 254, 1));
        assert_eq!(hsl(240, 100, 50), pack_rgb(1, 1, 254));

        assert_close(hsl(0, 100, 50), pack_rgb(255, 0, 0));
        assert_close(hsl(120, 100, 50), pack_rgb(0, 255, 0));
        assert_close(hsl(240, 100, 50), pack_rgb(0, 0, 255));
    }

    #[test]
    fn test_hsl_inside_sector() {
        assert_eq!(hsl(1, 100, 50), pack_rgb(254, 4, 1));
        assert_eq!(hsl(30, 100, 50), pack_rgb(254, 127, 1));
        assert_eq!(hsl(60, 100, 50), pack_rgb(254, 254, 1));
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(hsl(360, 100, 50), hsl(0, 100, 50));
        assert_eq!(hsl(432, 100, 50), hsl(72, 100, 50));
        assert_eq!(hsl(-120, 100, 50), hsl(240, 100, 50));
        assert_eq!(hsl(-1, 100, 50), hsl(359, 100, 50));
    }

    #[test]
    fn test_hsl_clamps_saturation_and_luminance() {
        assert_eq!(hsl(200, 100, 0), 0);
        assert_eq!(hsl(200, 40, -10), 0);
        assert_eq!(hsl(0, 0, 100), pack_rgb(253, 253, 253));
        assert_eq!(hsl(0, 150, 50), hsl(0, 99, 50));
    }
}
