use crate::geometry::SquareTorus;
use crate::spins::Lattice;
use rand::Rng;

/// Outcome counters for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Candidate flips attempted, always `N²`.
    pub attempts: usize,
    /// Candidate flips accepted.
    pub accepted: usize,
}

impl SweepStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.attempts as f64
    }
}

impl std::ops::AddAssign for SweepStats {
    fn add_assign(&mut self, rhs: Self) {
        self.attempts += rhs.attempts;
        self.accepted += rhs.accepted;
    }
}

/// Boltzmann weights `exp(-ΔE·β)` for the non-negative energy changes of a
/// single flip on the square lattice, indexed by `ΔE / 4` (ΔE ∈ {0, 4, 8}).
///
/// Very large `β` underflows to 0, which simply rejects every uphill move.
#[inline]
fn acceptance_table(inverse_temperature: f64) -> [f64; 3] {
    [
        1.0,
        (-4.0 * inverse_temperature).exp(),
        (-8.0 * inverse_temperature).exp(),
    ]
}

/// Metropolis single-spin-flip sweep.
///
/// Performs `N²` attempts. Each attempt picks a site uniformly at random
/// (with replacement, so a site may be visited several times or not at all),
/// computes `ΔE = 2·s·Σ_nb`, and flips the spin if `ΔE < 0` or if a uniform
/// draw in `[0, 1)` falls below `exp(-ΔE·β)`. Downhill moves consume no
/// acceptance draw.
#[cfg_attr(feature = "profile", inline(never))]
pub fn metropolis_sweep<R: Rng + ?Sized>(
    geometry: &SquareTorus,
    lattice: &mut Lattice,
    inverse_temperature: f64,
    rng: &mut R,
) -> SweepStats {
    debug_assert_eq!(geometry.n_sites, lattice.n_sites());
    let n_sites = lattice.n_sites();
    let weights = acceptance_table(inverse_temperature);
    let mut accepted = 0usize;

    for _ in 0..n_sites {
        let i = rng.gen_range(0..n_sites);
        let si = lattice.spin_at(i) as i32;
        let cost = 2 * si * lattice.neighbor_sum(geometry, i);
        let flip = cost < 0 || rng.gen::<f64>() < weights[(cost / 4) as usize];
        if flip {
            lattice.flip(i);
            accepted += 1;
        }
    }

    SweepStats {
        attempts: n_sites,
        accepted,
    }
}
