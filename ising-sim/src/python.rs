use numpy::IntoPyArray;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::SimConfig;

/// Run a temperature sweep of the 2D Ising model.
///
/// Arguments:
///   lattice_size: linear extent N of the N x N lattice
///   n_temps: number of temperature points (default 88)
///   eq_steps: equilibration sweeps per point (default 1024)
///   mc_steps: measurement sweeps per point (default 1024)
///   t_range: (start, end) temperature range, inclusive (default (1.53, 3.28))
///   seed: base seed; point t uses seed + t (default 42)
///   sequential: run points on one thread (default False)
///   equilibration_diagnostic: record equilibration checkpoints (default False)
///   autocorrelation_max_lag: largest lag for the energy autocorrelation
///     time, or None to skip it (default None)
///
/// Returns: dict with keys "temperatures", "energy", "magnetization",
///   "abs_magnetization", "specific_heat", "susceptibility", "acceptance_rate",
///   and "energy_tau" when autocorrelation_max_lag is set. Each is a numpy
///   array of shape (n_temps,). With equilibration_diagnostic, "equilibration"
///   holds one list of (sweep, energy, abs_magnetization) tuples per temperature.
#[pyfunction]
#[pyo3(signature = (lattice_size, n_temps=88, eq_steps=1024, mc_steps=1024, t_range=(1.53, 3.28), seed=None, sequential=false, equilibration_diagnostic=false, autocorrelation_max_lag=None))]
#[allow(clippy::too_many_arguments)]
fn simulate<'py>(
    py: Python<'py>,
    lattice_size: usize,
    n_temps: usize,
    eq_steps: usize,
    mc_steps: usize,
    t_range: (f64, f64),
    seed: Option<u64>,
    sequential: bool,
    equilibration_diagnostic: bool,
    autocorrelation_max_lag: Option<usize>,
) -> PyResult<Bound<'py, PyDict>> {
    let config = SimConfig {
        lattice_size,
        n_temps,
        eq_steps,
        mc_steps,
        t_start: t_range.0,
        t_end: t_range.1,
        seed: seed.unwrap_or(42),
        sequential,
        equilibration_diagnostic,
        autocorrelation_max_lag,
    };

    let results = py
        .allow_threads(|| crate::simulation::run(&config))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let dict = PyDict::new(py);
    for (name, column) in results.columns() {
        dict.set_item(name, column.to_vec().into_pyarray(py))?;
    }
    if equilibration_diagnostic {
        let checkpoints: Vec<Vec<(usize, f64, f64)>> = results
            .equilibration()
            .iter()
            .map(|point| {
                point
                    .iter()
                    .map(|c| (c.sweep, c.energy_avg, c.abs_magnetization_avg))
                    .collect()
            })
            .collect();
        dict.set_item("equilibration", checkpoints)?;
    }

    Ok(dict)
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    Ok(())
}
