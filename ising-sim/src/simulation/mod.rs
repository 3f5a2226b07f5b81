pub mod schedule;

pub use schedule::TemperatureSchedule;

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::geometry::SquareTorus;
use crate::mcmc::{metropolis_sweep, SweepStats};
use crate::parallel::map_temperatures;
use crate::spins::{energy, magnetization, Lattice};
use crate::statistics::{
    sokal_tau, AutocorrAccum, EquilDiagnosticAccum, Moments, ResultStore, TemperaturePoint,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info, trace};
use validator::Validate;

/// Run the full temperature sweep and return the per-temperature observables.
///
/// Blocks until every point of the schedule is processed.
pub fn run(config: &SimConfig) -> Result<ResultStore> {
    run_with_progress(config, &|| {})
}

/// Like [`run`], calling `on_sweep` once per sweep (useful for progress bars).
///
/// The configuration is validated before any sweep starts. Temperature point
/// `t` draws from its own `Xoshiro256StarStar` stream seeded with `seed + t`,
/// so the result does not depend on `sequential` or on the thread count.
pub fn run_with_progress(
    config: &SimConfig,
    on_sweep: &(dyn Fn() + Sync),
) -> Result<ResultStore> {
    config.validate()?;

    let schedule = TemperatureSchedule::linspace(config.t_start, config.t_end, config.n_temps)?;
    let geometry = SquareTorus::new(config.lattice_size)?;

    info!(
        lattice_size = config.lattice_size,
        n_temps = config.n_temps,
        eq_steps = config.eq_steps,
        mc_steps = config.mc_steps,
        t_start = config.t_start,
        t_end = config.t_end,
        seed = config.seed,
        sequential = config.sequential,
        "starting temperature sweep"
    );

    let results = map_temperatures(
        schedule.temperatures(),
        config.sequential,
        |temp_id, temperature| {
            let seed = config.seed.wrapping_add(temp_id as u64);
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            run_temperature_with_progress(&geometry, temperature, config, &mut rng, on_sweep)
        },
    );
    let points = results.into_iter().collect::<Result<Vec<_>>>()?;

    info!(n_points = points.len(), "temperature sweep finished");
    Ok(ResultStore::from_points(points))
}

/// Simulate a single temperature point with an explicit random source.
///
/// `geometry` fixes the lattice size; `config` supplies the sweep counts and
/// optional diagnostics.
pub fn run_temperature<R: Rng + ?Sized>(
    geometry: &SquareTorus,
    temperature: f64,
    config: &SimConfig,
    rng: &mut R,
) -> Result<TemperaturePoint> {
    run_temperature_with_progress(geometry, temperature, config, rng, &|| {})
}

/// One temperature point: fresh random lattice, `eq_steps` equilibration
/// sweeps, then `mc_steps` measurement sweeps with moment accumulation.
fn run_temperature_with_progress<R: Rng + ?Sized>(
    geometry: &SquareTorus,
    temperature: f64,
    config: &SimConfig,
    rng: &mut R,
    on_sweep: &(dyn Fn() + Sync),
) -> Result<TemperaturePoint> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(SimError::InvalidConfiguration(format!(
            "temperature must be finite and > 0, got {temperature}"
        )));
    }
    if config.mc_steps < 1 {
        return Err(SimError::InvalidConfiguration(
            "mc_steps must be >= 1".to_string(),
        ));
    }

    let beta = 1.0 / temperature;
    let n_sites = geometry.n_sites as f64;
    let mut lattice = Lattice::initial_state(geometry.size, rng)?;
    let mut sweep_stats = SweepStats::default();

    let mut equil_accum = config
        .equilibration_diagnostic
        .then(|| EquilDiagnosticAccum::new(config.eq_steps));

    for _ in 0..config.eq_steps {
        on_sweep();
        sweep_stats += metropolis_sweep(geometry, &mut lattice, beta, rng);

        if let Some(acc) = equil_accum.as_mut() {
            acc.push(
                energy(geometry, &lattice) / n_sites,
                magnetization(&lattice).abs() / n_sites,
            );
        }
    }

    let equilibration = equil_accum.map(|acc| acc.finish()).unwrap_or_default();
    for ckpt in &equilibration {
        trace!(
            temperature,
            sweep = ckpt.sweep,
            energy = ckpt.energy_avg,
            abs_magnetization = ckpt.abs_magnetization_avg,
            "equilibration checkpoint"
        );
    }

    let ac_max_lag = config
        .autocorrelation_max_lag
        .map(|k| k.min(config.mc_steps / 4).max(1));
    let mut autocorr = ac_max_lag.map(AutocorrAccum::new);
    let mut moments = Moments::default();

    for _ in 0..config.mc_steps {
        on_sweep();
        sweep_stats += metropolis_sweep(geometry, &mut lattice, beta, rng);

        let ene = energy(geometry, &lattice);
        let mag = magnetization(&lattice);
        moments.push(ene, mag);

        if let Some(acc) = autocorr.as_mut() {
            acc.push(ene / n_sites);
        }
    }

    let thermo = moments.finish(geometry.n_sites, beta);
    let energy_tau = autocorr.map(|acc| sokal_tau(&acc.finish()));
    let acceptance_rate = sweep_stats.acceptance_rate();

    debug!(
        temperature,
        energy = thermo.energy,
        magnetization = thermo.magnetization,
        specific_heat = thermo.specific_heat,
        susceptibility = thermo.susceptibility,
        acceptance_rate,
        "temperature point recorded"
    );

    Ok(TemperaturePoint {
        temperature,
        energy: thermo.energy,
        magnetization: thermo.magnetization,
        abs_magnetization: thermo.abs_magnetization,
        specific_heat: thermo.specific_heat,
        susceptibility: thermo.susceptibility,
        acceptance_rate,
        energy_tau,
        equilibration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small() -> SimConfig {
        SimConfig {
            lattice_size: 4,
            n_temps: 4,
            eq_steps: 20,
            mc_steps: 30,
            t_start: 1.0,
            t_end: 4.0,
            seed: 11,
            sequential: true,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_result_lengths_match_schedule() {
        let res = run(&small()).unwrap();
        assert_eq!(res.len(), 4);
        assert_eq!(res.temperatures(), &[1.0, 2.0, 3.0, 4.0]);
        for col in [
            res.energy(),
            res.magnetization(),
            res.specific_heat(),
            res.susceptibility(),
            res.acceptance_rate(),
        ] {
            assert_eq!(col.len(), 4);
        }
        assert!(res.energy_tau().is_empty());
        assert!(res.equilibration().iter().all(|e| e.is_empty()));
    }

    #[test]
    fn test_invalid_config_fails_before_sweeping() {
        let calls = AtomicUsize::new(0);
        let cfg = SimConfig {
            t_start: 3.0,
            t_end: 1.0,
            ..small()
        };
        let err = run_with_progress(&cfg, &|| {
            calls.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_oversized_inputs_are_rejected_not_panicking() {
        for cfg in [
            SimConfig {
                lattice_size: 1 << 32,
                ..small()
            },
            SimConfig {
                eq_steps: usize::MAX,
                ..small()
            },
        ] {
            assert!(matches!(run(&cfg), Err(SimError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_progress_called_once_per_sweep() {
        let calls = AtomicUsize::new(0);
        let cfg = SimConfig {
            sequential: false,
            ..small()
        };
        run_with_progress(&cfg, &|| {
            calls.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), cfg.total_sweeps());
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let seq = run(&small()).unwrap();
        let par = run(&SimConfig {
            sequential: false,
            ..small()
        })
        .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_same_seed_reproduces() {
        assert_eq!(run(&small()).unwrap(), run(&small()).unwrap());
        let other = run(&SimConfig {
            seed: 12,
            ..small()
        })
        .unwrap();
        assert_ne!(run(&small()).unwrap().energy(), other.energy());
    }

    #[test]
    fn test_run_temperature_matches_driver_stream() {
        let cfg = small();
        let geometry = SquareTorus::new(cfg.lattice_size).unwrap();
        let mut rng = Xoshiro256StarStar::seed_from_u64(cfg.seed + 2);
        let point = run_temperature(&geometry, 3.0, &cfg, &mut rng).unwrap();
        let res = run(&cfg).unwrap();
        assert_eq!(point.energy, res.energy()[2]);
        assert_eq!(point.susceptibility, res.susceptibility()[2]);
    }

    #[test]
    fn test_run_temperature_rejects_bad_temperature() {
        let cfg = small();
        let geometry = SquareTorus::new(4).unwrap();
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for t in [0.0, -1.0, f64::NAN] {
            assert!(run_temperature(&geometry, t, &cfg, &mut rng).is_err());
        }
    }

    #[test]
    fn test_diagnostics_are_collected_on_request() {
        let cfg = SimConfig {
            eq_steps: 300,
            mc_steps: 200,
            n_temps: 2,
            equilibration_diagnostic: true,
            autocorrelation_max_lag: Some(20),
            ..small()
        };
        let res = run(&cfg).unwrap();
        assert_eq!(res.energy_tau().len(), 2);
        assert!(res.energy_tau().iter().all(|&tau| tau.is_finite()));
        for ckpts in res.equilibration() {
            let sweeps: Vec<usize> = ckpts.iter().map(|c| c.sweep).collect();
            assert_eq!(sweeps, vec![128, 256, 300]);
        }
    }

    #[test]
    fn test_diagnostics_do_not_change_observables() {
        let plain = run(&small()).unwrap();
        let diag = run(&SimConfig {
            equilibration_diagnostic: true,
            autocorrelation_max_lag: Some(5),
            ..small()
        })
        .unwrap();
        assert_eq!(plain.energy(), diag.energy());
        assert_eq!(plain.specific_heat(), diag.specific_heat());
    }
}
