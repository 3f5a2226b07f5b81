//! Metropolis Monte Carlo simulation of the 2D Ising model.
//!
//! A run sweeps an evenly spaced temperature schedule. At every temperature a
//! fresh random `N×N` periodic lattice is equilibrated, then sampled, and the
//! per-site energy, magnetization, specific heat and susceptibility are
//! recorded in a [`ResultStore`].
//!
//! ```no_run
//! use ising_sim::{run, SimConfig};
//!
//! let config = SimConfig {
//!     lattice_size: 16,
//!     n_temps: 32,
//!     ..SimConfig::default()
//! };
//! let results = run(&config).unwrap();
//! for row in results.rows() {
//!     println!("{:.3} {:.4}", row.temperature, row.specific_heat);
//! }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;
pub mod statistics;

mod parallel;
#[cfg(feature = "python")]
mod python;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use geometry::SquareTorus;
pub use mcmc::{metropolis_sweep, SweepStats};
pub use simulation::{run, run_temperature, run_with_progress, TemperatureSchedule};
pub use spins::{energy, magnetization, Lattice};
pub use statistics::{ResultRow, ResultStore, TemperaturePoint};
