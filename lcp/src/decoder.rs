use std::io;

use log::debug;
use thiserror::Error;

use crate::buffer::StreamBuffer;
use crate::frame::{Frame, SYNC_BYTE};
use crate::source::ByteSource;
use crate::unescape::Unescaper;

/// Session-terminating decode failures.
///
/// Desynchronization and truncated frames are recovered internally by
/// reseeking the sync marker; they are counted, not surfaced.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source produced nothing across an attempt (timeout or closed).
    /// The session owner decides whether to keep polling or stop.
    #[error("byte source exhausted while waiting for a frame")]
    TransportExhausted,
    /// Unrecoverable transport fault (e.g. device disconnected).
    #[error("transport fault: {0}")]
    Transport(#[from] io::Error),
}

/// Assembles frames from the unescaped byte stream.
///
/// Walks seek-sync → header → data → crc. Any sanity failure or short read
/// along the way abandons the attempt and goes back to seeking sync, so a
/// noisy or desynchronized stream costs frames but never emits a wrong one.
pub struct FrameDecoder<S> {
    input: Unescaper<S>,
    discarded: u64,
}

impl<S: ByteSource> FrameDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            input: Unescaper::new(StreamBuffer::new(source)),
            discarded: 0,
        }
    }

    /// Number of frame attempts abandoned since the decoder was created.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Blocks until the next complete frame.
    ///
    /// Aborted attempts are retried internally; only transport conditions
    /// come back to the caller.
    pub fn read_frame(&mut self) -> Result<Frame, DecodeError> {
        loop {
            if !self.input.find_and_consume_sync()? {
                return Err(DecodeError::TransportExhausted);
            }
            match self.read_after_sync()? {
                Some(frame) => return Ok(frame),
                None => {
                    self.discarded += 1;
                    debug!("frame attempt discarded ({} so far)", self.discarded);
                }
            }
        }
    }

    /// Reads header, data and CRC after a consumed sync marker. `None` means
    /// the attempt was abandoned (sanity failure or short read).
    fn read_after_sync(&mut self) -> Result<Option<Frame>, DecodeError> {
        let Some(to) = self.input.next_byte()? else {
            return Ok(None);
        };
        let Some(from) = self.input.next_byte()? else {
            return Ok(None);
        };
        let Some(status) = self.input.next_byte()? else {
            return Ok(None);
        };
        let Some(length) = self.input.next_byte()? else {
            return Ok(None);
        };

        // A sync byte in an address field means we latched onto noise. Drop
        // the whole attempt and reseek instead of skipping a byte at a time.
        if to == SYNC_BYTE || from == SYNC_BYTE {
            return Ok(None);
        }

        let mut data = Vec::with_capacity(usize::from(length));
        for _ in 0..length {
            let Some(b) = self.input.next_byte()? else {
                return Ok(None);
            };
            data.push(b);
        }

        let Some(crc0) = self.input.next_byte()? else {
            return Ok(None);
        };
        let Some(crc1) = self.input.next_byte()? else {
            return Ok(None);
        };

        Ok(Some(Frame {
            to,
            from,
            status,
            data,
            crc: [crc0, crc1],
        }))
    }

    /// Turns the decoder into an iterator over decoded frames.
    ///
    /// Iteration ends when the source is exhausted; a transport fault is
    /// yielded as a final `Err` item.
    pub fn frames(self) -> Frames<S> {
        Frames {
            decoder: self,
            done: false,
        }
    }
}

/// Iterator over decoded frames; see [`FrameDecoder::frames`].
pub struct Frames<S> {
    decoder: FrameDecoder<S>,
    done: bool,
}

impl<S: ByteSource> Iterator for Frames<S> {
    type Item = Result<Frame, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.read_frame() {
            Ok(frame) => Some(Ok(frame)),
            Err(DecodeError::TransportExhausted) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
