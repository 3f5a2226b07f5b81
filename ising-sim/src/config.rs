use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.lattice_size < 1 {
        return Err(ValidationError::new("lattice_size must be >= 1"));
    }
    if cfg.n_temps < 1 {
        return Err(ValidationError::new("n_temps must be >= 1"));
    }
    if cfg.mc_steps < 1 {
        return Err(ValidationError::new("mc_steps must be >= 1"));
    }
    // Site indices are stored as u32
    match cfg.lattice_size.checked_mul(cfg.lattice_size) {
        Some(n) if n <= u32::MAX as usize => {}
        _ => return Err(ValidationError::new("lattice_size is too large")),
    }
    let total_sweeps = cfg
        .eq_steps
        .checked_add(cfg.mc_steps)
        .and_then(|per_point| per_point.checked_mul(cfg.n_temps));
    if total_sweeps.is_none() {
        return Err(ValidationError::new("total sweep count overflows"));
    }
    if !cfg.t_start.is_finite() || !cfg.t_end.is_finite() {
        return Err(ValidationError::new("temperature range must be finite"));
    }
    if cfg.t_start <= 0.0 {
        return Err(ValidationError::new("t_start must be > 0"));
    }
    if cfg.t_start >= cfg.t_end {
        return Err(ValidationError::new("t_start must be < t_end"));
    }
    if cfg.autocorrelation_max_lag == Some(0) {
        return Err(ValidationError::new("autocorrelation_max_lag must be >= 1"));
    }
    Ok(())
}

/// Parameters of a full temperature sweep.
///
/// Immutable for the lifetime of a run. Defaults follow the classic
/// 88-point sweep over `T ∈ [1.53, 3.28]` straddling `T_c ≈ 2.269`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    /// Linear extent `N` of the `N×N` lattice.
    pub lattice_size: usize,
    /// Number of temperature points in the schedule.
    pub n_temps: usize,
    /// Sweeps discarded before measuring. Zero is allowed.
    pub eq_steps: usize,
    /// Sweeps sampled per temperature point.
    pub mc_steps: usize,
    /// First temperature of the schedule (inclusive).
    pub t_start: f64,
    /// Last temperature of the schedule (inclusive).
    pub t_end: f64,
    /// Temperature point `t` draws from a stream seeded with `seed + t`.
    pub seed: u64,
    /// Run temperature points on the calling thread instead of the rayon pool.
    pub sequential: bool,
    /// Record running energy averages during equilibration.
    pub equilibration_diagnostic: bool,
    /// Largest lag for the energy autocorrelation estimate; `None` disables it.
    pub autocorrelation_max_lag: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lattice_size: 16,
            n_temps: 88,
            eq_steps: 1024,
            mc_steps: 1024,
            t_start: 1.53,
            t_end: 3.28,
            seed: 42,
            sequential: false,
            equilibration_diagnostic: false,
            autocorrelation_max_lag: None,
        }
    }
}

impl SimConfig {
    /// Number of sites `N²`. Saturates on configurations that fail validation.
    pub fn n_sites(&self) -> usize {
        self.lattice_size.saturating_mul(self.lattice_size)
    }

    /// Sweeps performed per temperature point (equilibration + measurement).
    pub fn sweeps_per_temperature(&self) -> usize {
        self.eq_steps.saturating_add(self.mc_steps)
    }

    /// Sweeps performed over the whole schedule.
    pub fn total_sweeps(&self) -> usize {
        self.n_temps.saturating_mul(self.sweeps_per_temperature())
    }
}
