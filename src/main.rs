use anyhow::Context;
use clap::Parser;

use blobtap::bot::device::{AdbTransport, locate};
use blobtap::bot::frame::FrameSource;
use blobtap::bot::runner::{CancelToken, Dispatcher, Supervisor};
use blobtap::bot::vision::RegionDetector;
use blobtap::config::Cli;
use blobtap::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    let range = cli.color_range().context("invalid color range")?;
    let detector = RegionDetector::new(range, cli.min_area);

    info!("Starting blobtap...");

    let transport = AdbTransport::new(cli.adb.clone());
    let endpoint = match locate(&transport, &cli.candidates()) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            error!("Could not reach an emulator: {e}");
            error!(
                "Restart the emulator, make sure root and ADB debugging are enabled, \
                 then run again."
            );
            std::process::exit(1);
        }
    };
    info!("Connected to device {}", endpoint.serial);
    info!("Only tapping regions with area above {}", cli.min_area);

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())
            .context("failed to install the Ctrl-C handler")?;
    }

    let capture = FrameSource::new(transport.clone(), endpoint.clone());
    let tap = Dispatcher::new(transport, endpoint);
    let mut supervisor = Supervisor::new(capture, tap, detector, cli.pacing(), cancel);
    supervisor.run();

    Ok(())
}
