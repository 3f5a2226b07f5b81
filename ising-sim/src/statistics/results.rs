use serde::Serialize;

use super::equilibration::EquilCheckpoint;

/// Everything measured at one temperature of the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperaturePoint {
    pub temperature: f64,
    /// ⟨E⟩ per site.
    pub energy: f64,
    /// ⟨M⟩ per site (signed).
    pub magnetization: f64,
    /// ⟨|M|⟩ per site.
    pub abs_magnetization: f64,
    pub specific_heat: f64,
    pub susceptibility: f64,
    /// Accepted fraction of all flip attempts, equilibration included.
    pub acceptance_rate: f64,
    /// Integrated autocorrelation time of the energy, if requested.
    pub energy_tau: Option<f64>,
    /// Empty unless the equilibration diagnostic is enabled.
    pub equilibration: Vec<EquilCheckpoint>,
}

/// One row of the flattened result table, as written for plotting tools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub temperature: f64,
    pub energy: f64,
    pub magnetization: f64,
    pub abs_magnetization: f64,
    pub specific_heat: f64,
    pub susceptibility: f64,
    pub acceptance_rate: f64,
}

/// Per-temperature observables of a full run.
///
/// All vectors are indexed by temperature index and have length `n_temps`.
/// `energy_tau` is empty when the autocorrelation estimate was not requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultStore {
    temperatures: Vec<f64>,
    energy: Vec<f64>,
    magnetization: Vec<f64>,
    abs_magnetization: Vec<f64>,
    specific_heat: Vec<f64>,
    susceptibility: Vec<f64>,
    acceptance_rate: Vec<f64>,
    energy_tau: Vec<f64>,
    equilibration: Vec<Vec<EquilCheckpoint>>,
}

impl ResultStore {
    /// Assemble the store from points given in schedule order.
    pub fn from_points(points: Vec<TemperaturePoint>) -> Self {
        let n = points.len();
        let mut store = Self {
            temperatures: Vec::with_capacity(n),
            energy: Vec::with_capacity(n),
            magnetization: Vec::with_capacity(n),
            abs_magnetization: Vec::with_capacity(n),
            specific_heat: Vec::with_capacity(n),
            susceptibility: Vec::with_capacity(n),
            acceptance_rate: Vec::with_capacity(n),
            energy_tau: Vec::new(),
            equilibration: Vec::with_capacity(n),
        };

        let with_tau = points.iter().all(|p| p.energy_tau.is_some()) && n > 0;

        for p in points {
            store.temperatures.push(p.temperature);
            store.energy.push(p.energy);
            store.magnetization.push(p.magnetization);
            store.abs_magnetization.push(p.abs_magnetization);
            store.specific_heat.push(p.specific_heat);
            store.susceptibility.push(p.susceptibility);
            store.acceptance_rate.push(p.acceptance_rate);
            if with_tau {
                store.energy_tau.push(p.energy_tau.unwrap_or_default());
            }
            store.equilibration.push(p.equilibration);
        }

        store
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    pub fn magnetization(&self) -> &[f64] {
        &self.magnetization
    }

    pub fn abs_magnetization(&self) -> &[f64] {
        &self.abs_magnetization
    }

    pub fn specific_heat(&self) -> &[f64] {
        &self.specific_heat
    }

    pub fn susceptibility(&self) -> &[f64] {
        &self.susceptibility
    }

    pub fn acceptance_rate(&self) -> &[f64] {
        &self.acceptance_rate
    }

    pub fn energy_tau(&self) -> &[f64] {
        &self.energy_tau
    }

    pub fn equilibration(&self) -> &[Vec<EquilCheckpoint>] {
        &self.equilibration
    }

    /// Named per-temperature columns, in output order. `energy_tau` is listed
    /// only when it was measured.
    pub fn columns(&self) -> Vec<(&'static str, &[f64])> {
        let mut columns = vec![
            ("temperatures", self.temperatures()),
            ("energy", self.energy()),
            ("magnetization", self.magnetization()),
            ("abs_magnetization", self.abs_magnetization()),
            ("specific_heat", self.specific_heat()),
            ("susceptibility", self.susceptibility()),
            ("acceptance_rate", self.acceptance_rate()),
        ];
        if !self.energy_tau.is_empty() {
            columns.push(("energy_tau", self.energy_tau()));
        }
        columns
    }

    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        (0..self.len()).map(move |t| ResultRow {
            temperature: self.temperatures[t],
            energy: self.energy[t],
            magnetization: self.magnetization[t],
            abs_magnetization: self.abs_magnetization[t],
            specific_heat: self.specific_heat[t],
            susceptibility: self.susceptibility[t],
            acceptance_rate: self.acceptance_rate[t],
        })
    }
}
