use crate::status::Status;

/// Byte value framing the start of every frame; the sync marker is two of
/// them back to back.
pub const SYNC_BYTE: u8 = 0x7E;

/// Literal frame-start pattern. Never itself escaped.
pub const SYNC: [u8; 2] = [SYNC_BYTE, SYNC_BYTE];

/// Escape sentinel: the byte that follows it is literal content.
pub const ESC: u8 = 0x1B;

/// Upper bound on the data portion of a frame.
pub const MAX_DATA_LEN: usize = 255;

/// One fully decoded link-control frame.
///
/// Constructed transiently per successful decode and handed to the reporter;
/// the decoder retains nothing. The wire length field is derived from `data`,
/// so `length() == data.len()` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub to: u8,
    pub from: u8,
    /// Raw status byte; see [`Status`] for the decoded fields.
    pub status: u8,
    pub data: Vec<u8>,
    /// CRC trailer, surfaced as-is and never validated here.
    pub crc: [u8; 2],
}

impl Frame {
    /// Length of the data portion as carried on the wire.
    pub fn length(&self) -> u8 {
        self.data.len() as u8
    }

    /// Decoded, direction-tagged view of the status byte.
    pub fn status_fields(&self) -> Status {
        Status::from(self.status)
    }

    /// The fully reconstructed decoded byte sequence: sync marker, header,
    /// data and CRC trailer, all unescaped. For diagnostic echo.
    pub fn decoded_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SYNC.len() + 4 + self.data.len() + 2);
        out.extend_from_slice(&SYNC);
        out.push(self.to);
        out.push(self.from);
        out.push(self.status);
        out.push(self.length());
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc);
        out
    }

    pub fn data_hex(&self) -> String {
        hex(&self.data)
    }

    pub fn data_ascii(&self) -> String {
        printable_ascii(&self.data)
    }
}

/// Renders bytes as space-separated uppercase hex pairs.
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders printable ASCII (0x20..=0x7E) as-is and everything else as `.`.
pub fn printable_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
        .collect()
}
