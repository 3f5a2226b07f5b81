/// Streaming autocorrelation accumulator using a ring buffer.
///
/// Computes the normalized autocorrelation function Γ(δ) of a scalar time
/// series without storing the full history. Memory is O(max_lag).
pub struct AutocorrAccum {
    max_lag: usize,
    /// Last `max_lag + 1` values.
    ring: Vec<f64>,
    sum_o: f64,
    sum_o2: f64,
    /// Running sum of o(t)·o(t−δ), length `max_lag + 1`.
    sum_prod: Vec<f64>,
    n_recorded: usize,
    ring_pos: usize,
}

impl AutocorrAccum {
    pub fn new(max_lag: usize) -> Self {
        Self {
            max_lag,
            ring: vec![0.0; max_lag + 1],
            sum_o: 0.0,
            sum_o2: 0.0,
            sum_prod: vec![0.0; max_lag + 1],
            n_recorded: 0,
            ring_pos: 0,
        }
    }

    pub fn push(&mut self, o: f64) {
        let len = self.ring.len();
        let pos = self.ring_pos;
        self.ring[pos] = o;
        self.sum_o += o;
        self.sum_o2 += o * o;

        let n_back = self.n_recorded.min(self.max_lag);
        for delta in 0..=n_back {
            let idx = (pos + len - delta) % len;
            self.sum_prod[delta] += o * self.ring[idx];
        }
        self.n_recorded += 1;
        self.ring_pos = (pos + 1) % len;
    }

    /// Γ(δ) for δ = 0..=max_lag.
    pub fn finish(&self) -> Vec<f64> {
        let m = self.n_recorded as f64;
        let mean = self.sum_o / m;
        let var = self.sum_o2 / m - mean * mean;
        (0..=self.max_lag)
            .map(|delta| {
                let count = self.n_recorded.saturating_sub(delta) as f64;
                if count <= 0.0 || var <= 0.0 {
                    return if delta == 0 { 1.0 } else { 0.0 };
                }
                (self.sum_prod[delta] / count - mean * mean) / var
            })
            .collect()
    }
}

/// Integrated autocorrelation time with Sokal's automatic window (c = 5).
pub fn sokal_tau(gamma: &[f64]) -> f64 {
    let mut tau = 0.5;
    for (w, &g) in gamma.iter().enumerate().skip(1) {
        tau += g;
        if w as f64 >= 5.0 * tau {
            return tau;
        }
    }
    tau
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_constant_series() {
        let mut acc = AutocorrAccum::new(4);
        for _ in 0..100 {
            acc.push(-1.5);
        }
        let gamma = acc.finish();
        assert_eq!(gamma, vec![1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(sokal_tau(&gamma), 0.5);
    }

    #[test]
    fn test_white_noise_is_uncorrelated() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut acc = AutocorrAccum::new(50);
        for _ in 0..20_000 {
            acc.push(rng.gen::<f64>());
        }
        let gamma = acc.finish();
        assert!((gamma[0] - 1.0).abs() < 1e-9);
        let tau = sokal_tau(&gamma);
        assert!((tau - 0.5).abs() < 0.1, "tau = {tau}");
    }

    #[test]
    fn test_blocked_series_is_correlated() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(6);
        let mut acc = AutocorrAccum::new(100);
        for _ in 0..1000 {
            let v = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            for _ in 0..20 {
                acc.push(v);
            }
        }
        let gamma = acc.finish();
        assert!(gamma[1] > 0.8, "gamma[1] = {}", gamma[1]);
        assert!(sokal_tau(&gamma) > 3.0);
    }

    #[test]
    fn test_lag_at_ring_capacity() {
        // Period-2 series: Γ(1) = -1, Γ(2) = +1
        let mut acc = AutocorrAccum::new(2);
        for k in 0..1000 {
            acc.push(if k % 2 == 0 { 1.0 } else { -1.0 });
        }
        let gamma = acc.finish();
        assert!((gamma[1] + 1.0).abs() < 1e-9);
        assert!((gamma[2] - 1.0).abs() < 1e-9);
    }
}
