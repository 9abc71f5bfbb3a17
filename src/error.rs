use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Device open error: {0}")]
    DeviceOpen(String),

    #[error("Device close error: {0}")]
    DeviceClose(String),

    #[error("Control line error: {0}")]
    Signal(String),
}

pub type PulseResult<T> = std::result::Result<T, PulseError>;
