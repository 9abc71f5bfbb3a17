use std::{thread, time::Duration};

use constants::DTR_DWELL_MS;
use error::{PulseError, PulseResult};
use interface::ControlLine;
use interface::serialport::SerialPortLine;
use tracing::info;

pub(crate) mod constants;
pub mod error;
pub mod interface;

/// Drives a single reset pulse on the DTR line of a serial device.
/// Microcontroller boards wired the usual way treat the pulse as a
/// hardware reset.
pub struct Pulser {
    line: Box<dyn ControlLine>,
}

impl std::fmt::Debug for Pulser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pulser").finish_non_exhaustive()
    }
}

impl Pulser {
    /// Open the named serial device with DTR deasserted. Fails before
    /// any hardware effect when the device cannot be opened.
    pub fn open(device: &str) -> PulseResult<Pulser> {
        if device.is_empty() {
            return Err(PulseError::DeviceOpen(
                "device path must not be empty".to_string(),
            ));
        }

        let line = SerialPortLine::open(device.to_string())?;
        Ok(Pulser::from_line(Box::new(line)))
    }

    /// Build a pulser over any control line implementation
    pub fn from_line(line: Box<dyn ControlLine>) -> Pulser {
        Pulser { line }
    }

    /// Assert DTR, hold for the dwell time, deassert, then release the
    /// device. The device is released even when a DTR write fails; a
    /// pulse error takes precedence over a close error.
    pub fn pulse(self) -> PulseResult<()> {
        let Pulser { mut line } = self;

        let pulsed = Self::drive(line.as_mut());
        let closed = line.close();

        pulsed?;
        closed?;

        info!("Pulse delivered");
        Ok(())
    }

    fn drive(line: &mut dyn ControlLine) -> PulseResult<()> {
        line.set_dtr(true)?;
        thread::sleep(Duration::from_millis(DTR_DWELL_MS));
        line.set_dtr(false)
    }
}
