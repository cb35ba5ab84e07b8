//! This example prints the packet order of a tile with the given number of
//! layers, decomposition levels and components, where each resolution level
//! has twice as many precincts as the previous one.
//!
//! Usage: `cargo run --example order -- <order> <layers> <levels> <components>`

use hayro_progression::{IteratorInput, ProgressionIterator, ProgressionOrder};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Trace);
    }

    let mut args = env::args().skip(1);
    let mut next_arg = |default: u16| -> Result<u16, Box<dyn Error>> {
        match args.next() {
            Some(arg) => Ok(arg.parse()?),
            None => Ok(default),
        }
    };

    let order = ProgressionOrder::from_u8(u8::try_from(next_arg(0)?)?)?;
    let num_layers = next_arg(2)?;
    let max_decomposition_levels = u8::try_from(next_arg(1)?)?;
    let num_components = next_arg(3)?;

    let input = IteratorInput::new(num_layers, max_decomposition_levels, num_components);
    let precinct_count = |resolution: u16, _: u16| -> u32 { 1 << resolution.min(16) };

    println!("{order} progression for {input:?}");

    for packet in order.iterator(input, precinct_count)?.packets() {
        println!(
            "  layer {:>2}  resolution {:>2}  component {:>2}  precinct {:>3}",
            packet.layer_num, packet.resolution, packet.component, packet.precinct
        );
    }

    Ok(())
}

#[cfg(feature = "logging")]
static LOGGER: SimpleLogger = SimpleLogger;

#[cfg(feature = "logging")]
struct SimpleLogger;

#[cfg(feature = "logging")]
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::LevelFilter::Trace
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}
