use clap::Parser;
use dtrpulse::Pulser;
use dtrpulse::error::PulseResult;

/// Reset an attached device by pulsing DTR on its serial port
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub(crate) struct PulseOptions {
    /// Serial device to pulse, e.g. /dev/ttyUSB0
    device: String,
}

pub(crate) fn handle_pulse(opts: PulseOptions) -> PulseResult<()> {
    let pulser = Pulser::open(&opts.device)?;
    pulser.pulse()?;

    Ok(())
}
