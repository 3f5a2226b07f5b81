use serde::Serialize;

/// Running averages over the first `sweep` equilibration sweeps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilCheckpoint {
    pub sweep: usize,
    pub energy_avg: f64,
    pub abs_magnetization_avg: f64,
}

/// Collects per-site energy and |m| during equilibration and snapshots their
/// running averages at sweeps 128, 256, 512, … and at the final sweep.
pub struct EquilDiagnosticAccum {
    checkpoints: Vec<usize>,
    next_ckpt_idx: usize,
    count: usize,
    sum_energy: f64,
    sum_abs_mag: f64,
    snapshots: Vec<EquilCheckpoint>,
}

impl EquilDiagnosticAccum {
    pub fn new(n_sweeps: usize) -> Self {
        let mut checkpoints = Vec::new();
        let mut p = 128usize;
        while p < n_sweeps {
            checkpoints.push(p);
            p *= 2;
        }
        if checkpoints.last() != Some(&n_sweeps) {
            checkpoints.push(n_sweeps);
        }

        Self {
            checkpoints,
            next_ckpt_idx: 0,
            count: 0,
            sum_energy: 0.0,
            sum_abs_mag: 0.0,
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, energy: f64, abs_magnetization: f64) {
        self.count += 1;
        self.sum_energy += energy;
        self.sum_abs_mag += abs_magnetization;

        if self.next_ckpt_idx < self.checkpoints.len()
            && self.count == self.checkpoints[self.next_ckpt_idx]
        {
            let c = self.count as f64;
            self.snapshots.push(EquilCheckpoint {
                sweep: self.count,
                energy_avg: self.sum_energy / c,
                abs_magnetization_avg: self.sum_abs_mag / c,
            });
            self.next_ckpt_idx += 1;
        }
    }

    pub fn finish(self) -> Vec<EquilCheckpoint> {
        self.snapshots
    }
}
