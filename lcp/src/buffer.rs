use std::collections::VecDeque;
use std::io;

use crate::frame::SYNC;
use crate::source::ByteSource;

const READ_CHUNK: usize = 256;

/// Accumulates raw (still-escaped) bytes pulled from a [`ByteSource`] and
/// locates the frame sync pattern.
///
/// The backing store is a ring buffer. While seeking sync, every scanned
/// prefix that can no longer start a match is dropped on the spot, so a noisy
/// line that never syncs holds at most one fetch chunk plus a carry byte.
pub struct StreamBuffer<S> {
    source: S,
    buf: VecDeque<u8>,
}

impl<S: ByteSource> StreamBuffer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: VecDeque::with_capacity(READ_CHUNK),
        }
    }

    /// Number of raw bytes currently buffered.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    fn fetch(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.source.read(&mut chunk)?;
        self.buf.extend(&chunk[..n]);
        Ok(n)
    }

    /// Pulls from the source until at least `n` bytes are buffered. Returns
    /// `Ok(false)` as soon as one read yields nothing before the target is
    /// reached.
    pub fn fill(&mut self, n: usize) -> io::Result<bool> {
        while self.buf.len() < n {
            if self.fetch()? == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Consumes and returns exactly `n` buffered bytes, or `None` if the
    /// source ends first. Never returns a partial result.
    pub fn read_raw(&mut self, n: usize) -> io::Result<Option<Vec<u8>>> {
        if !self.fill(n)? {
            return Ok(None);
        }
        Ok(Some(self.buf.drain(..n).collect()))
    }

    /// Consumes and returns the next raw byte.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if !self.fill(1)? {
            return Ok(None);
        }
        Ok(self.buf.pop_front())
    }

    /// Scans for the literal sync pattern, fetching more bytes on a miss,
    /// and consumes everything up to and including it.
    ///
    /// Returns `Ok(false)` only when the source is exhausted with no match.
    /// The unscanned tail is kept across fetches, so a marker straddling two
    /// reads is still found.
    pub fn find_and_consume_sync(&mut self) -> io::Result<bool> {
        loop {
            let mut from = 0;
            while from + SYNC.len() <= self.buf.len() {
                if self.buf[from] == SYNC[0] && self.buf[from + 1] == SYNC[1] {
                    self.buf.drain(..from + SYNC.len());
                    return Ok(true);
                }
                from += 1;
            }

            // Positions before `from` can no longer start a match.
            self.buf.drain(..from);

            if self.fetch()? == 0 {
                return Ok(false);
            }
        }
    }
}
