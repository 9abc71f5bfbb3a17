pub(crate) const DTR_DWELL_MS: u64 = 250;

// No data bytes move during a pulse; the open still needs a baud rate.
pub(crate) const NOMINAL_BAUD: u32 = 9600;
