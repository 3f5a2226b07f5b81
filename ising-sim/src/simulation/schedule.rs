use crate::error::{Result, SimError};

/// Evenly spaced temperatures over an inclusive range.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSchedule {
    temperatures: Vec<f64>,
}

impl TemperatureSchedule {
    /// `n` points from `start` to `end`, both included. With `n == 1` the
    /// schedule is just `[start]`.
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SimError::InvalidConfiguration(
                "temperature schedule needs at least one point".to_string(),
            ));
        }
        if !start.is_finite() || !end.is_finite() || start <= 0.0 || start >= end {
            return Err(SimError::InvalidConfiguration(format!(
                "temperature range ({start}, {end}) must satisfy 0 < start < end"
            )));
        }

        let temperatures = if n == 1 {
            vec![start]
        } else {
            let step = (end - start) / (n - 1) as f64;
            let mut t: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            t[n - 1] = end;
            t
        };

        Ok(Self { temperatures })
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let s = TemperatureSchedule::linspace(1.53, 3.28, 88).unwrap();
        assert_eq!(s.len(), 88);
        assert_eq!(s.temperatures()[0], 1.53);
        assert_eq!(s.temperatures()[87], 3.28);
    }

    #[test]
    fn test_even_spacing() {
        let s = TemperatureSchedule::linspace(1.0, 2.0, 5).unwrap();
        assert_eq!(s.temperatures(), &[1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn test_single_point() {
        let s = TemperatureSchedule::linspace(1.0, 2.0, 1).unwrap();
        assert_eq!(s.temperatures(), &[1.0]);
    }

    #[test]
    fn test_strictly_increasing() {
        let s = TemperatureSchedule::linspace(0.1, 5.0, 200).unwrap();
        assert!(s.temperatures().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(TemperatureSchedule::linspace(1.0, 2.0, 0).is_err());
        assert!(TemperatureSchedule::linspace(2.0, 1.0, 4).is_err());
        assert!(TemperatureSchedule::linspace(0.0, 1.0, 4).is_err());
        assert!(TemperatureSchedule::linspace(1.0, f64::NAN, 4).is_err());
    }
}
