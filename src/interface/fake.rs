use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::ControlLine;
use crate::error::{PulseError, PulseResult};

/// Everything a fake line observed: timestamped DTR transitions and
/// whether the device was released.
#[derive(Default)]
pub struct LineLog {
    pub transitions: Vec<(bool, Instant)>,
    pub closed: bool,
}

/// Minimal fake control line used in tests to record DTR transitions.
pub struct FakeLine {
    log: Arc<Mutex<LineLog>>,
    fail_set_dtr: bool,
    fail_close: bool,
}

impl FakeLine {
    pub fn new() -> (FakeLine, Arc<Mutex<LineLog>>) {
        Self::with_failures(false, false)
    }

    /// Script a failure into the DTR write or the close.
    pub fn with_failures(fail_set_dtr: bool, fail_close: bool) -> (FakeLine, Arc<Mutex<LineLog>>) {
        let log = Arc::new(Mutex::new(LineLog::default()));
        let line = FakeLine {
            log: Arc::clone(&log),
            fail_set_dtr,
            fail_close,
        };

        (line, log)
    }
}

impl ControlLine for FakeLine {
    fn set_dtr(&mut self, level: bool) -> PulseResult<()> {
        if self.fail_set_dtr {
            return Err(PulseError::Signal("scripted DTR failure".to_string()));
        }

        self.log
            .lock()
            .expect("Failed to lock line log")
            .transitions
            .push((level, Instant::now()));
        Ok(())
    }

    fn close(self: Box<Self>) -> PulseResult<()> {
        let mut log = self.log.lock().expect("Failed to lock line log");
        log.closed = true;

        if self.fail_close {
            return Err(PulseError::DeviceClose("scripted close failure".to_string()));
        }
        Ok(())
    }
}
