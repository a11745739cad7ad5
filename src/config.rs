//! Runtime configuration assembled from the command line, read once at
//! startup. There is no runtime reconfiguration.

use std::time::Duration;

use clap::Parser;

use crate::bot::common::error::Result;
use crate::bot::device::{Address, default_candidates};
use crate::bot::runner::Pacing;
use crate::bot::vision::ColorRange;

#[derive(Parser, Debug)]
#[command(
    name = "blobtap",
    version,
    about = "Watch an emulator's screen and tap the largest region matching an HSV color range"
)]
pub struct Cli {
    /// Lower HSV bound as H,S,V (H 0-179, S and V 0-255)
    #[arg(long, default_value = "3,97,142", value_parser = parse_triple)]
    pub lower: [u8; 3],

    /// Upper HSV bound as H,S,V
    #[arg(long, default_value = "23,177,222", value_parser = parse_triple)]
    pub upper: [u8; 3],

    /// Minimum region area in square pixels; smaller matches are ignored.
    /// Raise it if the bot taps noise, lower it if it misses the target.
    #[arg(long, default_value_t = 800.0)]
    pub min_area: f64,

    /// Candidate emulator adb port on 127.0.0.1 (repeatable; defaults to
    /// the ports of the common emulators)
    #[arg(long = "port")]
    pub ports: Vec<u16>,

    /// Path to the adb executable
    #[arg(long, default_value = "adb")]
    pub adb: String,

    /// Pause after a dispatched tap, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub cooldown_ms: u64,

    /// Pause between idle iterations, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub idle_ms: u64,

    /// Pause after a transient fault, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub backoff_ms: u64,
}

impl Cli {
    /// Candidate addresses to scan, in order.
    pub fn candidates(&self) -> Vec<Address> {
        if self.ports.is_empty() {
            default_candidates()
        } else {
            self.ports.iter().map(|&port| Address::local(port)).collect()
        }
    }

    /// The validated color range.
    pub fn color_range(&self) -> Result<ColorRange> {
        ColorRange::new(self.lower, self.upper)
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            cooldown: Duration::from_millis(self.cooldown_ms),
            idle: Duration::from_millis(self.idle_ms),
            fault_backoff: Duration::from_millis(self.backoff_ms),
        }
    }
}

fn parse_triple(s: &str) -> std::result::Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected H,S,V, got {s:?}"));
    }
    let mut out = [0u8; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid channel value {part:?}"))?;
    }
    Ok(out)
}
