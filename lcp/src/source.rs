use std::collections::VecDeque;
use std::io;
use std::sync::mpsc;

/// A byte-oriented transport feeding the decoder.
///
/// `read` blocks for at most the transport's own timeout. `Ok(0)` means the
/// source had nothing this attempt (timed out or closed); an error is an
/// unrecoverable transport fault.
pub trait ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Reads from an in-process channel of byte chunks.
///
/// Useful for driving the decoder from another thread that owns the actual
/// capture. An empty chunk reads as "no data this interval"; a disconnected
/// sender reads as an exhausted source.
pub struct ChannelByteSource {
    rx: mpsc::Receiver<Vec<u8>>,
    pending: VecDeque<u8>,
}

impl ChannelByteSource {
    pub fn new(rx: mpsc::Receiver<Vec<u8>>) -> Self {
        Self {
            rx,
            pending: VecDeque::new(),
        }
    }
}

impl ByteSource for ChannelByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.rx.recv() {
                Ok(chunk) => self.pending.extend(chunk),
                Err(mpsc::RecvError) => return Ok(0),
            }
        }

        let n = buf.len().min(self.pending.len());
        for (slot, byte) in buf.iter_mut().zip(self.pending.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl ByteSource for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(self, buf)
    }
}
