use std::io::{self, Read};
use std::time::Duration;

use lcp::ByteSource;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

/// Byte source backed by a serial port opened 8N1 with no flow control.
pub struct SerialByteSource {
    port: Box<dyn SerialPort>,
}

impl SerialByteSource {
    /// Opens the device. The timeout bounds every blocking read; an expired
    /// timeout surfaces as an empty read, not an error.
    pub fn open(path: &str, baud: u32, timeout: Duration) -> serialport::Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(timeout)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .open()?;

        Ok(Self { port })
    }
}

impl ByteSource for SerialByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }
}
