//! Sources used interchangeably behind `DepthSource`

use depthmesh_core::{DepthFrame, DepthSource, Error};
use depthmesh_io::*;
use std::thread;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(200);

#[test]
fn test_boxed_sources_share_the_contract() {
    let (channel, sender) = ChannelDepthSource::unbounded();
    sender.send(DepthFrame::filled(8, 6, 0.4)).unwrap();

    let mut sources: Vec<Box<dyn DepthSource>> = vec![
        Box::new(SyntheticDepthSource::new(8, 6, 11)),
        Box::new(ReplayDepthSource::new(vec![DepthFrame::filled(8, 6, 0.4)])),
        Box::new(channel),
    ];

    for source in &mut sources {
        assert!(matches!(source.wait_for_frame(TIMEOUT), Err(Error::Disconnected(_))));
        source.start().unwrap();
        source.start().unwrap();
        assert_eq!(source.wait_for_frame(TIMEOUT).unwrap().dimensions(), (8, 6));
    }
}

#[test]
fn test_producer_thread_feeds_channel() {
    let (mut source, sender) = ChannelDepthSource::bounded(2);

    let producer = thread::spawn(move || {
        let mut synthetic = SyntheticDepthSource::new(16, 12, 5).with_dropout_probability(0.1);
        for _ in 0..4 {
            let frame = synthetic.generate().unwrap();
            if sender.send(frame).is_err() {
                break;
            }
        }
    });

    source.start().unwrap();
    let mut received = 0;
    loop {
        match source.wait_for_frame(TIMEOUT) {
            Ok(frame) => {
                assert_eq!(frame.dimensions(), (16, 12));
                received += 1;
            }
            Err(Error::Disconnected(_)) => break,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    producer.join().unwrap();
    assert_eq!(received, 4);
}

#[test]
fn test_synthetic_frames_round_trip_through_a_recording() {
    let mut synthetic = SyntheticDepthSource::new(10, 10, 99);
    let frames: Vec<DepthFrame> = (0..3).map(|_| synthetic.generate().unwrap()).collect();

    let path = std::env::temp_dir().join("depthmesh_sources_recording.json");
    save_frames(&frames, &path).unwrap();
    let mut replay = ReplayDepthSource::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    replay.start().unwrap();
    for expected in &frames {
        assert_eq!(&replay.wait_for_frame(TIMEOUT).unwrap(), expected);
    }
}
