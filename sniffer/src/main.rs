mod config;
mod report;
mod serial;

use clap::Parser;
use lcp::{DecodeError, FrameDecoder};
use log::{debug, error, info};

use crate::config::Config;
use crate::serial::SerialByteSource;

/// Passive LCP frame dumper (~~ framed, ESC unescape, len-based)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Serial device (e.g. /dev/ttyUSB0 or /dev/serial/by-id/...)
    #[arg(long)]
    port: Option<String>,

    /// Baud rate
    #[arg(long)]
    baud: Option<u32>,

    /// Read timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Also print full decoded frame hex
    #[arg(long)]
    show_frame_hex: bool,
}

fn overlay(mut cfg: Config, args: &Args) -> Config {
    if let Some(port) = &args.port {
        cfg.port = Some(port.clone());
    }
    if let Some(baud) = args.baud {
        cfg.baud = baud;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        cfg.timeout_ms = timeout_ms;
    }
    if args.show_frame_hex {
        cfg.show_frame_hex = true;
    }
    cfg
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let cfg = Config::load().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });
    let cfg = overlay(cfg, &args);

    let Some(port) = cfg.port.clone() else {
        eprintln!("No serial port given; pass --port or set LCP_PORT.");
        std::process::exit(1);
    };

    let source = SerialByteSource::open(&port, cfg.baud, cfg.timeout()).unwrap_or_else(|err| {
        eprintln!("Failed to open {port}: {err}");
        std::process::exit(1);
    });

    info!("listening on {port} @ {} baud", cfg.baud);

    let mut decoder = FrameDecoder::new(source);
    let fault = loop {
        match decoder.read_frame() {
            Ok(frame) => report::print_frame(&frame, cfg.show_frame_hex),
            // A quiet interval is normal for a passive tap; poll again.
            Err(DecodeError::TransportExhausted) => {
                debug!(
                    "no frame this interval ({} attempts discarded)",
                    decoder.discarded()
                );
            }
            Err(DecodeError::Transport(err)) => break err,
        }
    };

    error!("transport fault, stopping capture: {fault}");
    drop(decoder); // closes the port before exiting
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_loaded_config() {
        let args = Args {
            port: Some("/dev/ttyUSB1".to_string()),
            baud: Some(115200),
            timeout_ms: None,
            show_frame_hex: true,
        };

        let cfg = overlay(Config::default(), &args);
        assert_eq!(cfg.port.as_deref(), Some("/dev/ttyUSB1"));
        assert_eq!(cfg.baud, 115200);
        assert_eq!(cfg.timeout_ms, 1000);
        assert!(cfg.show_frame_hex);
    }
}
