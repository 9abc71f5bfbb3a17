#[cfg(test)]
mod tests {
    use dtrpulse::Pulser;

    // Needs a board attached on /dev/ttyUSB0
    #[test]
    #[ignore]
    fn pulse_resets_attached_board() {
        let port = "/dev/ttyUSB0".to_string();

        Pulser::open(&port).unwrap().pulse().unwrap();

        // The handle must be released: reopening right away has to work
        let pulser = Pulser::open(&port).unwrap();
        pulser.pulse().unwrap();
    }
}
