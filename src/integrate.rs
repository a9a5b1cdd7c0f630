// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! Quadrature helpers for the spectral integrators.

The reference algorithm prescribes fixed-grid trapezoidal quadrature over the
energy axis, so that is all we provide; nothing adaptive is needed.

*/

use ndarray::{Array1, ArrayView1};

use super::{Result, ShapeError};

/// Trapezoidal quadrature of the samples `y` against the (possibly
/// non-uniformly spaced) abscissae `x`.
///
/// `x` is assumed to be sorted ascending; a descending ordering negates the
/// result, and anything non-monotonic is the caller's problem. Fewer than
/// two samples integrate to zero. A length mismatch is a [`ShapeError`].
pub fn trapz(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<f64> {
    if y.len() != x.len() {
        return Err(ShapeError::mismatch("y", x.len(), y.len()));
    }

    let mut total = 0_f64;

    for k in 0..x.len().saturating_sub(1) {
        total += (x[k + 1] - x[k]) * (y[k + 1] + y[k]) / 2.;
    }

    Ok(total)
}

/// A logarithmically spaced grid of `n` samples from `lo` to `hi` inclusive.
///
/// Sample `i` is `10^(log₁₀ lo + i Δ)` with `Δ` chosen to land exactly on
/// `log₁₀ hi`; `n = 1` degenerates to just `[lo]`.
pub fn log_spaced(lo: f64, hi: f64, n: usize) -> Array1<f64> {
    let ll = lo.log10();
    let lh = hi.log10();

    if n == 1 {
        return Array1::from_vec(vec![lo]);
    }

    let step = (lh - ll) / (n - 1) as f64;
    Array1::from_iter((0..n).map(|i| 10_f64.powf(ll + i as f64 * step)))
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use super::{log_spaced, trapz};

    #[test]
    fn test_trapz_linear_is_exact() {
        let x = Array1::from_vec(vec![0., 0.5, 2., 3.]);
        let y = x.mapv(|v| 2. * v + 1.);
        // ∫ (2x + 1) dx over [0, 3] = 12.
        assert_approx_eq!(trapz(x.view(), y.view()).unwrap(), 12., 1e-12);
    }

    #[test]
    fn test_trapz_degenerate_and_mismatched() {
        let x = Array1::from_vec(vec![1.]);
        let y = Array1::from_vec(vec![42.]);
        assert_eq!(trapz(x.view(), y.view()).unwrap(), 0.);

        let y2 = Array1::from_vec(vec![1., 2.]);
        assert!(trapz(x.view(), y2.view()).is_err());
    }

    #[test]
    fn test_log_spaced_endpoints() {
        let g = log_spaced(0.1, 300., 128);
        assert_eq!(g.len(), 128);
        assert_approx_eq!(g[0], 0.1, 1e-12);
        assert_approx_eq!(g[127], 300., 300. * 1e-12);
        for k in 0..127 {
            assert!(g[k] < g[k + 1]);
        }

        assert_eq!(log_spaced(0.1, 300., 1).to_vec(), vec![0.1]);
    }
}
