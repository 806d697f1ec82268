mod tests {
    use argb_controller_core::color::Rgb;
    use argb_controller_core::render::{FrameRenderer, StripBus, pack_grb, scale_channel};

    /// Bus double that records every pushed word.
    #[derive(Default)]
    struct RecordingBus {
        words: Vec<u32>,
    }

    impl StripBus for RecordingBus {
        fn push(&mut self, word: u32) {
            self.words.push(word);
        }
    }

    #[test]
    fn test_scale_channel_floors() {
        assert_eq!(scale_channel(255, 100), 255);
        assert_eq!(scale_channel(255, 0), 0);
        assert_eq!(scale_channel(255, 99), 252);
        assert_eq!(scale_channel(1, 99), 0);
        assert_eq!(scale_channel(10, 50), 5);
        assert_eq!(scale_channel(30, 40), 12);
    }

    #[test]
    fn test_scale_channel_identity_at_full_brightness() {
        for value in 0..=255u8 {
            assert_eq!(scale_channel(value, 100), value);
            assert_eq!(scale_channel(value, 0), 0);
        }
    }

    #[test]
    fn test_pack_grb_wire_order() {
        // Green rides in the top byte of the 24-bit word.
        assert_eq!(pack_grb(1, 2, 3), 0x0002_0103);
        assert_eq!(pack_grb(0xFF, 0, 0), 0x0000_FF00);
        assert_eq!(pack_grb(0, 0xFF, 0), 0x00FF_0000);
        assert_eq!(pack_grb(0, 0, 0xFF), 0x0000_00FF);
    }

    #[test]
    fn test_show_writes_pixels_in_order() {
        let mut renderer = FrameRenderer::new(RecordingBus::default());
        let frame = [
            Rgb {
                r: 255,
                g: 128,
                b: 64,
            },
            Rgb { r: 1, g: 2, b: 3 },
        ];
        renderer.show(&frame, 100);
        assert_eq!(
            renderer.bus().words,
            vec![pack_grb(255, 128, 64), pack_grb(1, 2, 3)]
        );
    }

    #[test]
    fn test_show_applies_brightness() {
        let mut renderer = FrameRenderer::new(RecordingBus::default());
        let frame = [
            Rgb {
                r: 255,
                g: 128,
                b: 64,
            },
            Rgb { r: 1, g: 2, b: 3 },
        ];
        renderer.show(&frame, 50);
        assert_eq!(
            renderer.bus().words,
            vec![pack_grb(127, 64, 32), pack_grb(0, 1, 1)]
        );
    }

    #[test]
    fn test_show_at_zero_brightness_is_dark() {
        let mut renderer = FrameRenderer::new(RecordingBus::default());
        let frame = [Rgb {
            r: 200,
            g: 200,
            b: 200,
        }; 8];
        renderer.show(&frame, 0);
        assert_eq!(renderer.bus().words.len(), 8);
        assert!(renderer.bus().words.iter().all(|word| *word == 0));
    }

    #[test]
    fn test_boot_animation_walks_the_strip() {
        use argb_controller_core::animation::play_boot;

        let mut renderer = FrameRenderer::new(RecordingBus::default());
        play_boot::<_, 2>(&mut renderer, 100);
        // One frame per cursor position plus the final blank frame.
        let cursor = pack_grb(50, 50, 150);
        assert_eq!(
            renderer.bus().words,
            vec![cursor, 0, 0, cursor, 0, 0]
        );
    }

    #[test]
    fn test_one_word_per_pixel() {
        let mut renderer = FrameRenderer::new(RecordingBus::default());
        let frame = [Rgb { r: 9, g: 9, b: 9 }; 8];
        renderer.show(&frame, 100);
        renderer.show(&frame, 100);
        assert_eq!(renderer.bus().words.len(), 16);
    }
}
