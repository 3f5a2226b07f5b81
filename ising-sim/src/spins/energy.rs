use crate::geometry::SquareTorus;
use crate::spins::Lattice;

/// Total energy of a configuration.
///
/// Sums `-s_i * Σ_nb s_j` over every site, so each bond is visited twice,
/// then divides by 4. Coupling and Boltzmann constants are 1.
pub fn energy(geometry: &SquareTorus, lattice: &Lattice) -> f64 {
    debug_assert_eq!(geometry.n_sites, lattice.n_sites());
    let mut total = 0i64;
    for i in 0..lattice.n_sites() {
        let si = lattice.spin_at(i) as i64;
        total -= lattice.neighbor_sum(geometry, i) as i64 * si;
    }
    total as f64 / 4.0
}

/// Total (signed) magnetization, the sum of all spins.
pub fn magnetization(lattice: &Lattice) -> f64 {
    lattice.spins().iter().map(|&s| s as i64).sum::<i64>() as f64
}
