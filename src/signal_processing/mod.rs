pub mod spectrum;
mod stats;

pub use stats::{SignalStats, peak, rms};
