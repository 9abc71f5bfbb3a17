use clap::Parser;
use dtrpulse::error::PulseResult;
use reset::{PulseOptions, handle_pulse};

mod reset;

fn main() -> PulseResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let opts = PulseOptions::parse();
    handle_pulse(opts)
}
