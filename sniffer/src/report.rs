use lcp::Frame;

/// Renders one decoded frame in the dumper's multi-line record layout.
pub fn render(frame: &Frame, show_frame_hex: bool) -> String {
    let status = frame.status_fields();

    let mut out = format!(
        "to={:02X} from={:02X} type={} status={:02X} ({}) len={}\n",
        frame.to,
        frame.from,
        status.message_type(),
        frame.status,
        status,
        frame.length(),
    );
    out.push_str(&format!("  data_hex: {}\n", frame.data_hex()));
    out.push_str(&format!("  data_txt: {}\n", frame.data_ascii()));
    out.push_str(&format!("  crc: {:02X} {:02X}\n", frame.crc[0], frame.crc[1]));

    if show_frame_hex {
        let hex: String = frame
            .decoded_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        out.push_str(&format!("  frame_hex: {hex}\n"));
    }

    out
}

pub fn print_frame(frame: &Frame, show_frame_hex: bool) {
    println!("{}", render(frame, show_frame_hex));
}
