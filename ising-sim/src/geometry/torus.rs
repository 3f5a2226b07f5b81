use crate::error::{Result, SimError};

/// Number of nearest neighbors of a site on the square lattice.
pub const COORDINATION: usize = 4;

/// Periodic `N×N` square lattice with a precomputed neighbor table.
///
/// Sites are indexed in row-major order, `i = row * size + col`. The table is
/// built once per run and shared read-only by every temperature point.
#[derive(Debug, Clone)]
pub struct SquareTorus {
    /// Linear extent `N`.
    pub size: usize,
    /// Total number of sites (`N²`).
    pub n_sites: usize,
    /// Layout: `neighbors[i * 4 + k]` with `k` = down, right, up, left.
    /// For `N ≤ 2` opposite neighbors coincide and appear twice.
    neighbors: Vec<u32>,
}

/// `N²` without overflow.
pub(crate) fn site_count(size: usize) -> Result<usize> {
    size.checked_mul(size).ok_or_else(|| too_large(size))
}

fn too_large(size: usize) -> SimError {
    SimError::InvalidConfiguration(format!("lattice of {size}x{size} sites is too large"))
}

impl SquareTorus {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SimError::InvalidConfiguration(
                "lattice size must be >= 1".to_string(),
            ));
        }
        let n_sites = site_count(size)?;
        if n_sites > u32::MAX as usize {
            return Err(too_large(size));
        }

        let mut neighbors = vec![0u32; n_sites * COORDINATION];
        for row in 0..size {
            for col in 0..size {
                let i = row * size + col;
                let down = (row + 1) % size;
                let right = (col + 1) % size;
                let up = (row + size - 1) % size;
                let left = (col + size - 1) % size;
                let base = i * COORDINATION;
                neighbors[base] = (down * size + col) as u32;
                neighbors[base + 1] = (row * size + right) as u32;
                neighbors[base + 2] = (up * size + col) as u32;
                neighbors[base + 3] = (row * size + left) as u32;
            }
        }

        Ok(Self {
            size,
            n_sites,
            neighbors,
        })
    }

    /// The four periodic neighbors of site `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[u32] {
        &self.neighbors[i * COORDINATION..(i + 1) * COORDINATION]
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i / self.size, i % self.size)
    }
}
