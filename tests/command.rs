mod tests {
    use argb_controller_core::color::Rgb;
    use argb_controller_core::command::{Command, DecodeError, decode};
    use argb_controller_core::effect::EffectId;

    #[test]
    fn test_set_color_bare_framing() {
        assert_eq!(
            decode(&[0x03, 10, 20, 30]),
            Ok(Command::SetColor(Rgb {
                r: 10,
                g: 20,
                b: 30
            }))
        );
    }

    #[test]
    fn test_set_color_prefixed_framing() {
        assert_eq!(
            decode(&[0x00, 0x03, 10, 20, 30]),
            Ok(Command::SetColor(Rgb {
                r: 10,
                g: 20,
                b: 30
            }))
        );
    }

    #[test]
    fn test_framings_are_equivalent() {
        let pairs: &[(&[u8], &[u8])] = &[
            (&[0x03, 1, 2, 3], &[0x00, 0x03, 1, 2, 3]),
            (&[0x04], &[0x00, 0x04]),
            (&[0x05, 0x02], &[0x00, 0x05, 0x02]),
            (&[0x06, 0x80], &[0x00, 0x06, 0x80]),
            (&[0x07, 0x32], &[0x00, 0x07, 0x32]),
            (&[0xAA], &[0x00, 0xAA]),
        ];
        for (bare, prefixed) in pairs {
            assert_eq!(decode(bare), decode(prefixed));
        }
    }

    #[test]
    fn test_empty_report_rejected() {
        assert_eq!(decode(&[]), Err(DecodeError::Empty));
    }

    #[test]
    fn test_opcode_zero_is_reserved() {
        // A single zero byte cannot select the prefixed framing, so it
        // decodes as bare opcode 0, which is not a command.
        assert_eq!(decode(&[0x00]), Err(DecodeError::UnknownOpcode(0)));
        // A zero opcode behind the prefix is equally unusable.
        assert_eq!(decode(&[0x00, 0x00]), Err(DecodeError::UnknownOpcode(0)));
    }

    #[test]
    fn test_short_color_payload_rejected() {
        assert_eq!(
            decode(&[0x03, 10, 20]),
            Err(DecodeError::ShortPayload {
                opcode: 0x03,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            decode(&[0x00, 0x03, 10, 20]),
            Err(DecodeError::ShortPayload {
                opcode: 0x03,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_short_mode_payload_rejected() {
        assert_eq!(
            decode(&[0x05]),
            Err(DecodeError::ShortPayload {
                opcode: 0x05,
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert_eq!(decode(&[0x05, 9]), Err(DecodeError::UnknownMode(9)));
    }

    #[test]
    fn test_set_mode_rainbow() {
        assert_eq!(
            decode(&[0x05, 0x02]),
            Ok(Command::SetMode(EffectId::Rainbow))
        );
    }

    #[test]
    fn test_music_level() {
        assert_eq!(decode(&[0x06, 200]), Ok(Command::SetMusicLevel(200)));
    }

    #[test]
    fn test_brightness_is_clamped() {
        assert_eq!(decode(&[0x07, 55]), Ok(Command::SetBrightness(55)));
        assert_eq!(decode(&[0x07, 150]), Ok(Command::SetBrightness(100)));
        assert_eq!(decode(&[0x07, 255]), Ok(Command::SetBrightness(100)));
    }

    #[test]
    fn test_off_ignores_extra_payload() {
        assert_eq!(decode(&[0x04]), Ok(Command::Off));
        assert_eq!(decode(&[0x04, 1, 2, 3]), Ok(Command::Off));
    }

    #[test]
    fn test_ping() {
        assert_eq!(decode(&[0xAA]), Ok(Command::Ping));
    }

    #[test]
    fn test_unknown_opcode_rejected() {
        assert_eq!(decode(&[0x99]), Err(DecodeError::UnknownOpcode(0x99)));
        assert_eq!(decode(&[0x01, 1, 2]), Err(DecodeError::UnknownOpcode(0x01)));
    }
}
