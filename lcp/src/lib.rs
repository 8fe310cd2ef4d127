//! Passive decoder for the byte-stuffed LCP link-control framing.
//!
//! The pipeline is pull-based: a [`ByteSource`] yields raw bytes, a
//! [`StreamBuffer`] accumulates them and locates the `0x7E 0x7E` sync
//! marker, an [`Unescaper`] strips the `0x1B` byte-stuffing, and a
//! [`FrameDecoder`] assembles complete frames, resynchronizing on any
//! anomaly instead of emitting a partial frame.

mod buffer;
mod decoder;
mod frame;
mod source;
mod status;
mod unescape;

pub use buffer::StreamBuffer;
pub use decoder::{DecodeError, FrameDecoder, Frames};
pub use frame::{ESC, Frame, MAX_DATA_LEN, SYNC, SYNC_BYTE, hex, printable_ascii};
pub use source::{ByteSource, ChannelByteSource};
pub use status::Status;
pub use unescape::Unescaper;
