//! Phase unwrapping.

use std::f64::consts::PI;

/// Remove artificial `2π` jumps from a phase sequence in radians.
///
/// Whenever two consecutive raw samples differ by at least `π`, the rest of the
/// sequence is shifted by the multiple of `2π` that brings the step back into
/// `[-π, π]`. Steps smaller than `π` are left alone. The first sample is never
/// moved. A step of exactly `+π` keeps its sign.
pub fn unwrap_phase(raw: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(raw.len());
    let Some(&first) = raw.first() else {
        return out;
    };
    out.push(first);

    let period = 2.0 * PI;
    let mut correction = 0.0;
    for pair in raw.windows(2) {
        let dd = pair[1] - pair[0];
        if dd.abs() >= PI {
            let mut ddmod = (dd + PI).rem_euclid(period) - PI;
            if ddmod == -PI && dd > 0.0 {
                ddmod = PI;
            }
            correction += ddmod - dd;
        }
        out.push(pair[1] + correction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single() {
        assert!(unwrap_phase(&[]).is_empty());
        assert_eq!(unwrap_phase(&[1.0]), vec![1.0]);
    }

    #[test]
    fn smooth_sequence_untouched() {
        let raw = [0.0, 0.5, 1.0, 1.5, 2.0];
        assert_eq!(unwrap_phase(&raw), raw.to_vec());
    }

    #[test]
    fn removes_wrap_at_branch_cut() {
        // Descending phase that crosses -π and reappears near +π.
        let raw = [-3.0, -3.1, 3.1, 3.0];
        let out = unwrap_phase(&raw);
        assert_eq!(out[0], -3.0);
        assert_eq!(out[1], -3.1);
        assert!((out[2] - (3.1 - 2.0 * PI)).abs() < 1e-12);
        assert!((out[3] - (3.0 - 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn removes_multiple_wraps() {
        // Linear phase -t sampled coarsely, wrapped into (-π, π].
        let truth: Vec<f64> = (0..40).map(|i| -0.5 * i as f64).collect();
        let wrapped: Vec<f64> = truth
            .iter()
            .map(|&p| (p + PI).rem_euclid(2.0 * PI) - PI)
            .collect();
        let out = unwrap_phase(&wrapped);
        for (u, t) in out.iter().zip(&truth) {
            assert!((u - t).abs() < 1e-9, "{u} vs {t}");
        }
    }

    #[test]
    fn exact_half_turn_keeps_sign() {
        let out = unwrap_phase(&[0.0, PI]);
        assert_eq!(out, vec![0.0, PI]);
    }
}
