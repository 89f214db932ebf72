//! Frequency-response result type.

use serde::Serialize;

use crate::axes::AxisRange;

/// One sample of a Bode plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodePoint {
    /// Angular frequency (rad/s)
    pub frequency: f64,
    /// Gain (dB)
    pub magnitude_db: f64,
    /// Unwrapped phase (degrees)
    pub phase_deg: f64,
}

/// Parallel frequency / magnitude / phase sequences of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrequencyResponse {
    frequencies: Vec<f64>,
    magnitude_db: Vec<f64>,
    phase_deg: Vec<f64>,
}

impl FrequencyResponse {
    pub(crate) fn from_parts(
        frequencies: Vec<f64>,
        magnitude_db: Vec<f64>,
        phase_deg: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(frequencies.len(), magnitude_db.len());
        debug_assert_eq!(frequencies.len(), phase_deg.len());
        Self {
            frequencies,
            magnitude_db,
            phase_deg,
        }
    }

    /// Frequencies in rad/s, ascending.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitude_db(&self) -> &[f64] {
        &self.magnitude_db
    }

    pub fn phase_deg(&self) -> &[f64] {
        &self.phase_deg
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<BodePoint> {
        Some(BodePoint {
            frequency: *self.frequencies.get(index)?,
            magnitude_db: self.magnitude_db[index],
            phase_deg: self.phase_deg[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = BodePoint> + '_ {
        (0..self.len()).filter_map(|i| self.point(i))
    }

    /// Sample whose frequency is closest to `omega`.
    pub fn nearest(&self, omega: f64) -> Option<BodePoint> {
        if self.is_empty() {
            return None;
        }
        let idx = self.frequencies.partition_point(|&w| w < omega);
        let best = if idx == 0 {
            0
        } else if idx == self.len() {
            self.len() - 1
        } else if (self.frequencies[idx] - omega).abs() < (omega - self.frequencies[idx - 1]).abs()
        {
            idx
        } else {
            idx - 1
        };
        self.point(best)
    }

    /// Samples whose frequency lies inside `range` (inclusive).
    pub fn clip_to(&self, range: AxisRange) -> FrequencyResponse {
        let lo = self.frequencies.partition_point(|&w| w < range.min);
        let hi = self.frequencies.partition_point(|&w| w <= range.max);
        let hi = hi.max(lo);
        FrequencyResponse::from_parts(
            self.frequencies[lo..hi].to_vec(),
            self.magnitude_db[lo..hi].to_vec(),
            self.phase_deg[lo..hi].to_vec(),
        )
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.frequencies, self.magnitude_db, self.phase_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyResponse {
        FrequencyResponse::from_parts(
            vec![0.1, 1.0, 10.0, 100.0],
            vec![20.0, 0.0, -20.0, -40.0],
            vec![-5.0, -45.0, -85.0, -89.0],
        )
    }

    #[test]
    fn point_access() {
        let r = sample();
        assert_eq!(r.len(), 4);
        let p = r.point(1).unwrap();
        assert_eq!(p.frequency, 1.0);
        assert_eq!(p.magnitude_db, 0.0);
        assert_eq!(p.phase_deg, -45.0);
        assert!(r.point(4).is_none());
        assert_eq!(r.iter().count(), 4);
    }

    #[test]
    fn nearest_sample() {
        let r = sample();
        assert_eq!(r.nearest(0.0).unwrap().frequency, 0.1);
        assert_eq!(r.nearest(2.0).unwrap().frequency, 1.0);
        assert_eq!(r.nearest(8.0).unwrap().frequency, 10.0);
        assert_eq!(r.nearest(1e6).unwrap().frequency, 100.0);
        assert!(FrequencyResponse::default().nearest(1.0).is_none());
    }

    #[test]
    fn clipping_is_inclusive() {
        let r = sample().clip_to(AxisRange::new(1.0, 10.0));
        assert_eq!(r.frequencies(), &[1.0, 10.0]);
        assert_eq!(r.magnitude_db(), &[0.0, -20.0]);

        let empty = sample().clip_to(AxisRange::new(200.0, 300.0));
        assert!(empty.is_empty());
    }
}
