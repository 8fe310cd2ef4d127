use std::fmt;

/// Decoded view of the status byte.
///
/// Bit 7 selects the direction and the meaning of the remaining bits depends
/// on it, so the two directions are distinct variants: a field that only
/// exists for the opposite direction is absent, not defaulted to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Command {
        /// Sequence toggle (bit 0), alternating between consecutive messages.
        message_id: u8,
        /// Synchronization flag (bit 1).
        synchronization: bool,
        check_request: bool,
        abort_request: bool,
        /// Bits 4-6 are reserved; any of them set marks an anomalous frame.
        reserved_bits_set: bool,
    },
    Response {
        message_id: u8,
        synchronization: bool,
        busy: bool,
        request_aborted: bool,
        no_request_active: bool,
        buffer_overrun: bool,
        not_supported: bool,
    },
}

impl From<u8> for Status {
    fn from(status: u8) -> Self {
        let message_id = status & 0x01;
        let synchronization = status & 0x02 != 0;

        if status & 0x80 == 0 {
            Status::Command {
                message_id,
                synchronization,
                check_request: status & 0x04 != 0,
                abort_request: status & 0x08 != 0,
                reserved_bits_set: status & 0x70 != 0,
            }
        } else {
            Status::Response {
                message_id,
                synchronization,
                busy: status & 0x04 != 0,
                request_aborted: status & 0x08 != 0,
                no_request_active: status & 0x10 != 0,
                buffer_overrun: status & 0x20 != 0,
                not_supported: status & 0x40 != 0,
            }
        }
    }
}

impl Status {
    pub fn message_type(&self) -> &'static str {
        match self {
            Status::Command { .. } => "command",
            Status::Response { .. } => "response",
        }
    }
}

/// Renders the flag list, e.g. `sync, id=1, busy` or `id=0, ok`.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        match *self {
            Status::Command {
                message_id,
                synchronization,
                check_request,
                abort_request,
                reserved_bits_set,
            } => {
                if synchronization {
                    flags.push("sync".to_string());
                }
                flags.push(format!("id={message_id}"));
                if check_request {
                    flags.push("check_request".to_string());
                }
                if abort_request {
                    flags.push("abort_request".to_string());
                }
                // Reserved bits only show up when set; helps spot bad frames.
                if reserved_bits_set {
                    flags.push("reserved_bits_set".to_string());
                }
            }
            Status::Response {
                message_id,
                synchronization,
                busy,
                request_aborted,
                no_request_active,
                buffer_overrun,
                not_supported,
            } => {
                if synchronization {
                    flags.push("sync".to_string());
                }
                flags.push(format!("id={message_id}"));
                if busy {
                    flags.push("busy".to_string());
                }
                if request_aborted {
                    flags.push("request_aborted".to_string());
                }
                if no_request_active {
                    flags.push("no_request_active".to_string());
                }
                if buffer_overrun {
                    flags.push("buffer_overrun".to_string());
                }
                if not_supported {
                    flags.push("not_supported".to_string());
                }
                let faulted =
                    busy || request_aborted || no_request_active || buffer_overrun || not_supported;
                if !faulted {
                    flags.push("ok".to_string());
                }
            }
        }
        write!(f, "{}", flags.join(", "))
    }
}
