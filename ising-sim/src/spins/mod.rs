pub mod energy;
pub mod lattice;

pub use energy::{energy, magnetization};
pub use lattice::Lattice;
