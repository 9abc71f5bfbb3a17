pub mod fake;
pub mod serialport;

use crate::error::PulseResult;

pub trait ControlLine {
    /// Drive the DTR line to the given logic level
    fn set_dtr(&mut self, level: bool) -> PulseResult<()>;

    /// Release the underlying device
    fn close(self: Box<Self>) -> PulseResult<()>;
}
