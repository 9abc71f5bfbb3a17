use std::time::Duration;

use dtrpulse::Pulser;
use dtrpulse::error::PulseError;
use dtrpulse::interface::fake::FakeLine;

#[test]
fn pulse_asserts_then_deasserts_and_closes() {
    let (line, log) = FakeLine::new();
    Pulser::from_line(Box::new(line)).pulse().unwrap();

    let log = log.lock().unwrap();
    let levels: Vec<bool> = log.transitions.iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec![true, false]);
    assert!(log.closed);
}

#[test]
fn dwell_holds_for_at_least_250ms() {
    let (line, log) = FakeLine::new();
    Pulser::from_line(Box::new(line)).pulse().unwrap();

    let log = log.lock().unwrap();
    let (_, asserted_at) = log.transitions[0];
    let (_, deasserted_at) = log.transitions[1];
    assert!(deasserted_at.duration_since(asserted_at) >= Duration::from_millis(250));
}

#[test]
fn failed_dtr_write_still_releases_device() {
    let (line, log) = FakeLine::with_failures(true, false);
    let err = Pulser::from_line(Box::new(line)).pulse().unwrap_err();

    assert!(matches!(err, PulseError::Signal(_)));
    let log = log.lock().unwrap();
    assert!(log.transitions.is_empty());
    assert!(log.closed);
}

#[test]
fn close_error_surfaces_after_completed_pulse() {
    let (line, log) = FakeLine::with_failures(false, true);
    let err = Pulser::from_line(Box::new(line)).pulse().unwrap_err();

    assert!(matches!(err, PulseError::DeviceClose(_)));
    let log = log.lock().unwrap();
    let levels: Vec<bool> = log.transitions.iter().map(|(level, _)| *level).collect();
    assert_eq!(levels, vec![true, false]);
}

#[test]
fn empty_device_path_is_rejected() {
    let err = Pulser::open("").unwrap_err();
    assert!(matches!(err, PulseError::DeviceOpen(_)));
}

#[test]
fn nonexistent_device_fails_to_open() {
    let err = Pulser::open("/dev/nonexistent").unwrap_err();
    assert!(matches!(err, PulseError::DeviceOpen(_)));
}
