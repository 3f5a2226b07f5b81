use rand::Rng;

use crate::error::{Result, SimError};
use crate::geometry::torus::site_count;
use crate::geometry::SquareTorus;

/// Spin configuration of an `N×N` periodic lattice.
///
/// Spins are stored row-major, one `i8` per site, each either `+1` or `-1`.
/// Constructors reject anything else, and the only mutation exposed is
/// negation, so the invariant holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Random initial state: every site independently `+1` or `-1` with equal
    /// probability, drawn from `rng`.
    pub fn initial_state<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        let n_sites = check_size(size)?;
        let spins = (0..n_sites)
            .map(|_| if rng.gen::<bool>() { 1 } else { -1 })
            .collect();
        Ok(Self { size, spins })
    }

    /// Fully ordered lattice with every site set to `spin`.
    pub fn uniform(size: usize, spin: i8) -> Result<Self> {
        let n_sites = check_size(size)?;
        check_spin(spin)?;
        Ok(Self {
            size,
            spins: vec![spin; n_sites],
        })
    }

    /// Build a lattice from explicit row-major spins.
    pub fn from_spins(size: usize, spins: Vec<i8>) -> Result<Self> {
        let n_sites = check_size(size)?;
        if spins.len() != n_sites {
            return Err(SimError::InvalidConfiguration(format!(
                "expected {n_sites} spins for a {size}x{size} lattice, got {}",
                spins.len()
            )));
        }
        for &s in &spins {
            check_spin(s)?;
        }
        Ok(Self { size, spins })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn n_sites(&self) -> usize {
        self.spins.len()
    }

    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.size + col]
    }

    /// Sum of the four periodic neighbors of site `i`.
    #[inline]
    pub fn neighbor_sum(&self, geometry: &SquareTorus, i: usize) -> i32 {
        geometry
            .neighbors(i)
            .iter()
            .map(|&j| self.spins[j as usize] as i32)
            .sum()
    }

    #[inline]
    pub(crate) fn spin_at(&self, i: usize) -> i8 {
        self.spins[i]
    }

    #[inline]
    pub(crate) fn flip(&mut self, i: usize) {
        self.spins[i] = -self.spins[i];
    }

    /// Global spin inversion.
    pub fn flip_all(&mut self) {
        for s in self.spins.iter_mut() {
            *s = -*s;
        }
    }
}

/// Returns the site count `N²` of a valid size.
fn check_size(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(SimError::InvalidConfiguration(
            "lattice size must be >= 1".to_string(),
        ));
    }
    site_count(size)
}

fn check_spin(spin: i8) -> Result<()> {
    if spin != 1 && spin != -1 {
        return Err(SimError::InvalidConfiguration(format!(
            "spin values must be +1 or -1, got {spin}"
        )));
    }
    Ok(())
}
