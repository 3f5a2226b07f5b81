use rayon::prelude::*;

/// Map `body` over the temperature schedule, optionally in parallel.
///
/// The closure receives `(temp_id, temperature)` and the results come back in
/// schedule order either way. Each call must own all of its mutable state
/// (lattice, RNG) so that points can run on different threads.
///
/// When `sequential` is true, points are processed on the current thread
/// (no rayon overhead, best for tiny lattices or when the caller already
/// parallelizes at an outer level).
pub fn map_temperatures<T, F>(temperatures: &[f64], sequential: bool, body: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, f64) -> T + Send + Sync,
{
    if sequential {
        temperatures
            .iter()
            .enumerate()
            .map(|(temp_id, &temp)| body(temp_id, temp))
            .collect()
    } else {
        temperatures
            .par_iter()
            .enumerate()
            .map(|(temp_id, &temp)| body(temp_id, temp))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let temps: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let seq = map_temperatures(&temps, true, |id, t| (id, t * 2.0));
        let par = map_temperatures(&temps, false, |id, t| (id, t * 2.0));
        assert_eq!(seq, par);
        assert_eq!(par[10], (10, 20.0));
    }
}
