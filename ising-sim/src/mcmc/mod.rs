pub mod sweep;

pub use sweep::{metropolis_sweep, SweepStats};
