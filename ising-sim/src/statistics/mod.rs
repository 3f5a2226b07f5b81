pub mod autocorrelation;
pub mod equilibration;
pub mod moments;
pub mod results;

pub use autocorrelation::{sokal_tau, AutocorrAccum};
pub use equilibration::{EquilCheckpoint, EquilDiagnosticAccum};
pub use moments::{Moments, Thermodynamics};
pub use results::{ResultRow, ResultStore, TemperaturePoint};
