// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! Polynomial expansion of the Fang-family model coefficients.

The Fang parametrizations tabulate, for each term of the dissipation function
`f(y)`, four polynomial coefficients `P_ij` such that the model coefficient
for a particle of characteristic energy *E* [keV] is

```text
C_i(E) = exp(P_i0 + P_i1 ln E + P_i2 ln²E + P_i3 ln³E)
```

(Fang et al. 2008, Eq. (7); 2010, Eq. (5); 2013, Eqs. (6)–(7)). The tables
below are transcribed verbatim from the papers; rows are model terms, columns
are ascending polynomial degree. They are fixed physical fit constants and
are never mutated at runtime.

*/

use ndarray::{Array2, ArrayView1};

/// Coefficients of Fang et al. (2008), Table 1 (Maxwellian electrons).
pub static POLY_F2008: [[f64; 4]; 8] = [
    [3.49979e-1, -6.18200e-2, -4.08124e-2, 1.65414e-2],
    [5.85425e-1, -5.00793e-2, 5.69309e-2, -4.02491e-3],
    [1.69692e-1, -2.58981e-2, 1.96822e-2, 1.20505e-3],
    [-1.22271e-1, -1.15532e-2, 5.37951e-6, 1.20189e-3],
    [1.57018, 2.87896e-1, -4.14857e-1, 5.18158e-2],
    [8.83195e-1, 4.31402e-2, -8.33599e-2, 1.02515e-2],
    [1.90953, -4.74704e-2, -1.80200e-1, 2.46652e-2],
    [-1.29566, -2.10952e-1, 2.73106e-1, -2.92752e-2],
];

/// Coefficients of Fang et al. (2010), Table 1 (mono-energetic electrons).
pub static POLY_F2010: [[f64; 4]; 8] = [
    [1.24616e+0, 1.45903e+0, -2.42269e-1, 5.95459e-2],
    [2.23976e+0, -4.22918e-7, 1.36458e-2, 2.53332e-3],
    [1.41754e+0, 1.44597e-1, 1.70433e-2, 6.39717e-4],
    [2.48775e-1, -1.50890e-1, 6.30894e-9, 1.23707e-3],
    [-4.65119e-1, -1.05081e-1, -8.95701e-2, 1.22450e-2],
    [3.86019e-1, 1.75430e-3, -7.42960e-4, 4.60881e-4],
    [-6.45454e-1, 8.49555e-4, -4.28581e-2, -2.99302e-3],
    [9.48930e-1, 1.97385e-1, -2.50660e-3, -2.06938e-3],
];

/// Coefficients of Fang et al. (2013), Table 1 (mono-energetic protons).
pub static POLY_F2013: [[f64; 4]; 12] = [
    [2.55050e+0, 2.69476e-1, -2.58425e-1, 4.43190e-2],
    [6.39287e-1, -1.85817e-1, -3.15636e-2, 1.01370e-2],
    [1.63996e+0, 2.43580e-1, 4.29873e-2, 3.77803e-2],
    [-2.13479e-1, 1.42464e-1, 1.55840e-2, 1.97407e-3],
    [-1.65764e-1, 3.39654e-1, -9.87971e-3, 4.02411e-3],
    [-3.59358e-2, 2.50330e-2, -3.29365e-2, 5.08057e-3],
    [-6.26528e-1, 1.46865e+0, 2.51853e-1, -4.57132e-2],
    [1.01384e+0, 5.94301e-2, -3.27839e-2, 3.42688e-3],
    [-1.29454e-6, -1.43623e-1, 2.82583e-1, 8.29809e-2],
    [-1.18622e-1, 1.79191e-1, 6.49171e-2, -3.99715e-3],
    [2.94890e+0, -5.75821e-1, 2.48563e-2, 8.31078e-2],
    [-1.89515e-1, 3.53452e-2, 7.77964e-2, -4.06034e-3],
];

/// Evaluate a cubic with ascending coefficients `[c0, c1, c2, c3]` at `x`.
///
/// Horner form, proceeding from the highest-degree term.
pub fn eval_cubic(row: &[f64; 4], x: f64) -> f64 {
    ((row[3] * x + row[2]) * x + row[1]) * x + row[0]
}

/// Expand a coefficient table into the per-row model coefficients
/// `C_i(E) = exp(P_i(ln E))` for one energy [keV].
pub fn model_coefficients<const R: usize>(pij: &[[f64; 4]; R], energy: f64) -> [f64; R] {
    let x = energy.ln();
    let mut cs = [0_f64; R];

    for (c, row) in cs.iter_mut().zip(pij.iter()) {
        *c = eval_cubic(row, x).exp();
    }

    cs
}

/// Expand a coefficient table over an energy grid, yielding an (R, M) array
/// with one column of model coefficients per energy sample.
///
/// This is the explicit-loop form of the vectorized coefficient evaluation;
/// the row count and polynomial degree are compile-time constants, so no
/// dynamic shape checks are needed.
pub fn model_coefficients_grid<const R: usize>(
    pij: &[[f64; 4]; R],
    energies: ArrayView1<f64>,
) -> Array2<f64> {
    let mut out = Array2::zeros((R, energies.len()));

    for (j, &en) in energies.iter().enumerate() {
        let cs = model_coefficients(pij, en);
        for (i, &c) in cs.iter().enumerate() {
            out[[i, j]] = c;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use super::{eval_cubic, model_coefficients, model_coefficients_grid, POLY_F2010, POLY_F2013};

    #[test]
    fn test_cubic_at_zero_is_constant_term() {
        for row in POLY_F2010.iter().chain(POLY_F2013.iter()) {
            assert_eq!(eval_cubic(row, 0.), row[0]);
        }
    }

    #[test]
    fn test_coefficients_at_unit_energy() {
        // ln(1) = 0, so each coefficient reduces to exp(c0) exactly.
        let cs = model_coefficients(&POLY_F2010, 1.);
        for (c, row) in cs.iter().zip(POLY_F2010.iter()) {
            assert_eq!(*c, row[0].exp());
        }
    }

    #[test]
    fn test_grid_matches_scalar_expansion() {
        let ens = Array1::from_vec(vec![0.1, 1., 10., 100.]);
        let grid = model_coefficients_grid(&POLY_F2010, ens.view());
        assert_eq!(grid.shape(), &[8, 4]);

        for (j, &en) in ens.iter().enumerate() {
            let cs = model_coefficients(&POLY_F2010, en);
            for (i, &c) in cs.iter().enumerate() {
                assert_eq!(grid[[i, j]], c);
            }
        }
    }
}
