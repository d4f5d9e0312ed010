mod common;

mod tests {
    use smart_leds::SmartLedsWrite;
    use zip_strip::{
        ChannelLayout, Rgb, Rgbw, SmartLedsTransport, StripConfig, StripError, ZipStrip,
    };

    use super::common::RecordingPins;

    /// Serializes colors green first, the way WS2812 drivers do
    #[derive(Debug, Default)]
    struct GrbWire {
        frames: Vec<Vec<u8>>,
        fail_next_write: bool,
    }

    impl SmartLedsWrite for GrbWire {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail_next_write {
                self.fail_next_write = false;
                return Err(());
            }
            let frame = iterator
                .into_iter()
                .map(Into::into)
                .flat_map(|c: Rgb| [c.g, c.r, c.b])
                .collect();
            self.frames.push(frame);
            Ok(())
        }
    }

    /// Serializes colors as GRBW, the way SK6812 RGBW drivers do
    #[derive(Debug, Default)]
    struct GrbwWire {
        frames: Vec<Vec<u8>>,
    }

    impl SmartLedsWrite for GrbwWire {
        type Error = ();
        type Color = Rgbw;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            let frame = iterator
                .into_iter()
                .map(Into::into)
                .flat_map(|c: Rgbw| [c.g, c.r, c.b, c.a.0])
                .collect();
            self.frames.push(frame);
            Ok(())
        }
    }

    fn config(layout: ChannelLayout) -> StripConfig {
        StripConfig::new(3).with_layout(layout)
    }

    #[test]
    fn test_wire_matches_buffer_for_three_channel_layouts() {
        for layout in [ChannelLayout::Grb, ChannelLayout::Rgb] {
            let mut pins = RecordingPins::default();
            let transport = SmartLedsTransport::new(GrbWire::default());
            let mut strip =
                ZipStrip::<_, 64>::with_config(&config(layout), transport, &mut pins).unwrap();
            strip.set_zip_led_color(0, 0x0011_2233);
            strip.set_zip_led_color(2, 0x0044_5566);
            strip.show();

            let frames = &strip.transport().writer().frames;
            assert_eq!(frames.len(), 1, "layout {layout:?}");
            assert_eq!(frames[0], strip.buffer().as_bytes(), "layout {layout:?}");
        }
    }

    #[test]
    fn test_red_first_layout_reaches_wire_red_first() {
        let mut pins = RecordingPins::default();
        let transport = SmartLedsTransport::new(GrbWire::default());
        let mut strip =
            ZipStrip::<_, 64>::with_config(&config(ChannelLayout::Rgb), transport, &mut pins)
                .unwrap();
        strip.set_zip_led_color(0, 0x0011_2233);
        strip.show();
        assert_eq!(strip.transport().writer().frames[0][..3], [0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_wire_carries_white_channel() {
        let mut pins = RecordingPins::default();
        let transport = SmartLedsTransport::new_rgbw(GrbwWire::default());
        let mut strip =
            ZipStrip::<_, 64>::with_config(&config(ChannelLayout::Grbw), transport, &mut pins)
                .unwrap();
        strip.set_zip_led_color(1, 0x0011_2233);
        strip.show();

        let frame = &strip.transport().writer().frames[0];
        assert_eq!(frame.len(), 12);
        assert_eq!(frame, strip.buffer().as_bytes());
        assert_eq!(frame[4..8], [0x22, 0x11, 0x33, 0x00]);
    }

    #[test]
    fn test_stride_mismatch_rejected_at_bind() {
        let mut pins = RecordingPins::default();
        let transport = SmartLedsTransport::new(GrbWire::default());
        let result =
            ZipStrip::<_, 64>::with_config(&config(ChannelLayout::Grbw), transport, &mut pins);
        assert_eq!(
            result.unwrap_err(),
            StripError::UnsupportedLayout {
                layout: ChannelLayout::Grbw
            }
        );

        let transport = SmartLedsTransport::new_rgbw(GrbwWire::default());
        let result =
            ZipStrip::<_, 64>::with_config(&config(ChannelLayout::Grb), transport, &mut pins);
        assert_eq!(
            result.unwrap_err(),
            StripError::UnsupportedLayout {
                layout: ChannelLayout::Grb
            }
        );
        assert!(pins.writes.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_buffer() {
        let writer = GrbWire {
            fail_next_write: true,
            ..GrbWire::default()
        };
        let mut pins = RecordingPins::default();
        let mut strip = ZipStrip::<_, 64>::with_config(
            &config(ChannelLayout::Grb),
            SmartLedsTransport::new(writer),
            &mut pins,
        )
        .unwrap();
        strip.show_color(0x0011_2233);
        assert!(strip.transport().writer().frames.is_empty());

        strip.show();
        let frames = &strip.transport().writer().frames;
        assert_eq!(frames[0], [0x22, 0x11, 0x33].repeat(3));
    }
}
