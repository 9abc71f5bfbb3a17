use tracing::{info, trace};

use super::ControlLine;
use crate::constants::NOMINAL_BAUD;

use crate::error::{PulseError, PulseResult};

pub type DevicePath = String;
/// Serial port control line layer
pub(crate) struct SerialPortLine {
    pub serial_port: Box<dyn serialport::SerialPort>,
}

impl SerialPortLine {
    pub fn open(device: DevicePath) -> PulseResult<SerialPortLine> {
        let serial_port = serialport::new(device.clone(), NOMINAL_BAUD)
            .dtr_on_open(false)
            .open()
            .map_err(|e| PulseError::DeviceOpen(format!("{:?}", e)))?;

        info!("Opened {} with DTR deasserted", device);
        Ok(SerialPortLine { serial_port })
    }
}

impl ControlLine for SerialPortLine {
    fn set_dtr(&mut self, level: bool) -> PulseResult<()> {
        self.serial_port
            .write_data_terminal_ready(level)
            .map_err(|e| PulseError::Signal(format!("Failed to set DTR {}: {:?}", level, e)))?;
        trace!("DTR {}", if level { "asserted" } else { "deasserted" });
        Ok(())
    }

    fn close(self: Box<Self>) -> PulseResult<()> {
        // Dropping the handle is the only close the serialport API offers
        drop(self.serial_port);
        trace!("Released serial device");
        Ok(())
    }
}
