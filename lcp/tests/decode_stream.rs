//! Drives the decoder from a channel-fed source on another thread, the way
//! an embedding capture pipeline would, and checks that chunk boundaries
//! never change what gets decoded.

use std::sync::mpsc;
use std::thread;

use lcp::{ChannelByteSource, ESC, Frame, FrameDecoder, SYNC_BYTE};

fn escape_into(out: &mut Vec<u8>, bytes: &[u8]) {
    for &b in bytes {
        if b == ESC || b == SYNC_BYTE {
            out.push(ESC);
        }
        out.push(b);
    }
}

fn encode(frame: &Frame) -> Vec<u8> {
    let mut out = vec![SYNC_BYTE, SYNC_BYTE];
    escape_into(
        &mut out,
        &[frame.to, frame.from, frame.status, frame.length()],
    );
    escape_into(&mut out, &frame.data);
    escape_into(&mut out, &frame.crc);
    out
}

fn sample_frame(to: u8, payload: &[u8]) -> Frame {
    Frame {
        to,
        from: 0x42,
        status: 0x80,
        data: payload.to_vec(),
        crc: [0xAA, 0xBB],
    }
}

fn collect_frames(rx: mpsc::Receiver<Vec<u8>>) -> thread::JoinHandle<Vec<Frame>> {
    thread::spawn(move || {
        FrameDecoder::new(ChannelByteSource::new(rx))
            .frames()
            .collect::<Result<_, _>>()
            .unwrap()
    })
}

#[test]
fn frame_arriving_byte_by_byte() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let expected = sample_frame(0x01, &[0x10, 0x7E, 0x1B, 0x20]);
    for byte in encode(&expected) {
        tx.send(vec![byte]).unwrap();
    }
    drop(tx);

    assert_eq!(handle.join().unwrap(), vec![expected]);
}

#[test]
fn sync_marker_split_across_chunks() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let expected = sample_frame(0x01, b"hello");
    let raw = encode(&expected);

    tx.send(vec![0x55, 0x66, raw[0]]).unwrap(); // garbage + first sync byte
    tx.send(raw[1..].to_vec()).unwrap();
    drop(tx);

    assert_eq!(handle.join().unwrap(), vec![expected]);
}

#[test]
fn escape_pair_split_across_chunks() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let expected = sample_frame(0x01, &[0x7E]);
    let raw = encode(&expected);
    let esc_at = raw
        .iter()
        .position(|&b| b == ESC)
        .expect("payload escape present");

    tx.send(raw[..=esc_at].to_vec()).unwrap();
    tx.send(raw[esc_at + 1..].to_vec()).unwrap();
    drop(tx);

    assert_eq!(handle.join().unwrap(), vec![expected]);
}

#[test]
fn two_frames_with_garbage_before_between_and_after() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let first = sample_frame(0x01, b"one");
    let second = sample_frame(0x02, b"two");

    tx.send(vec![0x00, 0x7E, 0x33]).unwrap(); // garbage
    tx.send(encode(&first)).unwrap();
    tx.send(vec![0x13, 0x37]).unwrap(); // garbage
    tx.send(encode(&second)).unwrap();
    tx.send(vec![0x7E, 0x00]).unwrap(); // garbage
    drop(tx);

    assert_eq!(handle.join().unwrap(), vec![first, second]);
}

#[test]
fn quiet_interval_then_traffic_decodes_on_retry() {
    // An empty chunk is a timed-out read: read_frame reports exhaustion and
    // the session owner polls again, picking up the later traffic.
    let (tx, rx) = mpsc::channel();
    let expected = sample_frame(0x01, b"late");

    tx.send(vec![]).unwrap();
    tx.send(encode(&expected)).unwrap();
    drop(tx);

    let mut decoder = FrameDecoder::new(ChannelByteSource::new(rx));
    assert!(matches!(
        decoder.read_frame(),
        Err(lcp::DecodeError::TransportExhausted)
    ));
    assert_eq!(decoder.read_frame().unwrap(), expected);
}

#[test]
fn sender_disconnect_mid_frame_emits_nothing() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let raw = encode(&sample_frame(0x01, b"cut short"));
    tx.send(raw[..raw.len() - 4].to_vec()).unwrap();
    drop(tx);

    assert_eq!(handle.join().unwrap(), vec![]);
}

#[test]
fn heavy_noise_between_many_frames() {
    let (tx, rx) = mpsc::channel();
    let handle = collect_frames(rx);

    let mut expected = Vec::new();
    for i in 0..20u8 {
        let frame = sample_frame(i + 1, &[i, 0x7E, i, 0x1B]);
        tx.send(vec![0xAA; 300]).unwrap(); // noise burst, no sync in it
        tx.send(encode(&frame)).unwrap();
        expected.push(frame);
    }
    drop(tx);

    assert_eq!(handle.join().unwrap(), expected);
}
