pub mod torus;

pub use torus::{SquareTorus, COORDINATION};
