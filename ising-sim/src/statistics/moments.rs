/// Running sums of the sampled observables for one temperature point.
///
/// Only measurement-phase samples are pushed here.
#[derive(Debug, Clone, Default)]
pub struct Moments {
    count: usize,
    /// Σ E
    e1: f64,
    /// Σ E²
    e2: f64,
    /// Σ M
    m1: f64,
    /// Σ M²
    m2: f64,
    /// Σ |M|
    m_abs: f64,
}

/// Per-site thermodynamic averages derived from [`Moments`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermodynamics {
    pub energy: f64,
    pub magnetization: f64,
    pub abs_magnetization: f64,
    pub specific_heat: f64,
    pub susceptibility: f64,
}

impl Moments {
    /// Record one sample of total energy and total magnetization.
    pub fn push(&mut self, energy: f64, magnetization: f64) {
        self.count += 1;
        self.e1 += energy;
        self.e2 += energy * energy;
        self.m1 += magnetization;
        self.m2 += magnetization * magnetization;
        self.m_abs += magnetization.abs();
    }

    /// Number of samples pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Normalize to per-site quantities at inverse temperature `beta`.
    ///
    /// Requires at least one sample; the driver guarantees `mc_steps >= 1`.
    /// With `n1 = 1/(count·N²)` and `n2 = 1/(count²·N²)`:
    /// `C = (n1·ΣE² − n2·(ΣE)²)·β²` and `X = (n1·ΣM² − n2·(ΣM)²)·β`.
    /// The bracketed variances are clamped at zero.
    pub fn finish(&self, n_sites: usize, beta: f64) -> Thermodynamics {
        debug_assert!(self.count > 0, "no samples accumulated");
        let c = self.count as f64;
        let n = n_sites as f64;
        let n1 = 1.0 / (c * n);
        let n2 = 1.0 / (c * c * n);

        // A constant series can come out a few ulps below zero
        let energy_var = (n1 * self.e2 - n2 * self.e1 * self.e1).max(0.0);
        let mag_var = (n1 * self.m2 - n2 * self.m1 * self.m1).max(0.0);

        Thermodynamics {
            energy: n1 * self.e1,
            magnetization: n1 * self.m1,
            abs_magnetization: n1 * self.m_abs,
            specific_heat: energy_var * beta * beta,
            susceptibility: mag_var * beta,
        }
    }
}
