//! Property tests for the frame codec

use focuscube_protocol::{
    CubeMessage, Frame, FrameDecoder, TelemetryRecord, FRAME_START, MAX_PAYLOAD_SIZE,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut decoder = FrameDecoder::new();
        for byte in bytes {
            let _ = decoder.push(byte);
        }
    }

    #[test]
    fn frame_survives_leading_noise(
        noise in prop::collection::vec(any::<u8>(), 0..64),
        kind in any::<u8>(),
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let frame = Frame::new(kind, &payload).unwrap();
        let bytes = frame.to_bytes().unwrap();

        // Noise may leave the decoder mid-frame; a reset puts it back in sync
        let mut decoder = FrameDecoder::new();
        for byte in noise {
            let _ = decoder.push(byte);
        }
        decoder.reset();

        let (decoded, used) = decoder.push_slice(&bytes).unwrap().unwrap();
        prop_assert_eq!(decoded, frame);
        prop_assert_eq!(used, bytes.len());
    }

    #[test]
    fn frame_survives_stray_starts(
        noise in prop::collection::vec(any::<u8>().prop_filter("not START", |b| *b != FRAME_START), 0..64),
        stray in 1usize..4,
        kind in any::<u8>(),
        payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
    ) {
        let frame = Frame::new(kind, &payload).unwrap();
        let bytes = frame.to_bytes().unwrap();

        let mut decoder = FrameDecoder::new();
        for byte in noise {
            prop_assert_eq!(decoder.push(byte), Ok(None));
        }
        for _ in 0..stray {
            prop_assert_eq!(decoder.push(FRAME_START), Ok(None));
        }

        let (decoded, used) = decoder.push_slice(&bytes).unwrap().unwrap();
        prop_assert_eq!(decoded, frame);
        prop_assert_eq!(used, bytes.len());
    }

    #[test]
    fn telemetry_frame_fits(
        time in any::<u32>(),
        mode in prop_oneof![Just("none"), Just("work"), Just("personal")],
        active in any::<bool>(),
        running in any::<bool>(),
    ) {
        let record = TelemetryRecord { mode, time, active, running };
        let frame = CubeMessage::Telemetry(record).to_frame().unwrap();
        prop_assert_eq!(CubeMessage::from_frame(&frame), Ok(CubeMessage::Telemetry(record)));
    }
}
