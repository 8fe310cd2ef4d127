use std::io;

use crate::buffer::StreamBuffer;
use crate::frame::ESC;
use crate::source::ByteSource;

/// Produces logical bytes from the raw stream, undoing byte-stuffing.
pub struct Unescaper<S> {
    raw: StreamBuffer<S>,
}

impl<S: ByteSource> Unescaper<S> {
    pub fn new(raw: StreamBuffer<S>) -> Self {
        Self { raw }
    }

    /// Next logical byte. The byte following the escape sentinel is taken
    /// verbatim, whatever its value. `Ok(None)` if the stream ends, including
    /// mid-escape; never a substituted default.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.raw.read_byte()? {
            None => Ok(None),
            Some(ESC) => self.raw.read_byte(),
            Some(b) => Ok(Some(b)),
        }
    }

    /// Seeks the sync pattern in the underlying raw stream.
    pub fn find_and_consume_sync(&mut self) -> io::Result<bool> {
        self.raw.find_and_consume_sync()
    }
}
