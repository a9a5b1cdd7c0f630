// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! The Fang et al. (2013) mono-energetic proton dissipation parametrization.

Fang et al. (2013; DOI:10.1002/grl.50484) extend the electron scheme to
precipitating protons. The dissipation function carries three terms instead
of two, so the coefficient table has twelve rows; the column-depth scaling
also differs (Eq. (5)).

*/

use ndarray::Array1;

use super::{AtmosphereColumn, DissipationFunction};
use poly::{self, POLY_F2013};

/// The Fang et al. (2013) proton parametrization, bound to a coefficient
/// table (default [`poly::POLY_F2013`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fang2013Protons {
    pij: &'static [[f64; 4]; 12],
}

impl Fang2013Protons {
    /// Create the model with the published coefficient table.
    pub fn new() -> Self {
        Fang2013Protons { pij: &POLY_F2013 }
    }

    /// Substitute a different coefficient table.
    pub fn with_coefficients(mut self, pij: &'static [[f64; 4]; 12]) -> Self {
        self.pij = pij;
        self
    }

    /// The energy-dependent model coefficients, Fang et al. (2013)
    /// Eqs. (6)–(7).
    pub fn coefficients(&self, energy: f64) -> [f64; 12] {
        poly::model_coefficients(self.pij, energy)
    }

    // Fang et al. (2013), Eqs. (6), (7): three-term dissipation function.
    fn f_y(c: &[f64; 12], y: f64) -> f64 {
        c[0] * y.powf(c[1]) * (-c[2] * y.powf(c[3])).exp()
            + c[4] * y.powf(c[5]) * (-c[6] * y.powf(c[7])).exp()
            + c[8] * y.powf(c[9]) * (-c[10] * y.powf(c[11])).exp()
    }

    fn dissipation_with(c: &[f64; 12], energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        // Fang et al. (2013), Eq. (5).
        let y = 7.5 / energy * (1e4 * rho * scale_height).powf(0.9);
        // Fang et al. (2013), Eq. (3).
        Fang2013Protons::f_y(c, y) * flux / scale_height
    }
}

impl Default for Fang2013Protons {
    fn default() -> Self {
        Fang2013Protons::new()
    }
}

impl DissipationFunction for Fang2013Protons {
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        let c = self.coefficients(energy);
        Fang2013Protons::dissipation_with(&c, energy, flux, scale_height, rho)
    }

    fn profile(&self, energy: f64, flux: f64, atm: &AtmosphereColumn) -> Array1<f64> {
        let c = self.coefficients(energy);
        let mut en_diss = Array1::zeros(atm.len());

        for (i, (&h, &r)) in atm
            .scale_height()
            .iter()
            .zip(atm.rho().iter())
            .enumerate()
        {
            en_diss[i] = Fang2013Protons::dissipation_with(&c, energy, flux, h, r);
        }

        en_diss
    }
}

/// Proton energy dissipation after Fang et al. (2013), with the published
/// coefficient table.
///
/// `energy` [keV], `flux` [keV cm⁻² s⁻¹], `scale_height` [cm], `rho`
/// [g cm⁻³]; returns keV cm⁻³ s⁻¹. Non-positive inputs produce NaN/inf.
pub fn fang2013_protons(energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
    Fang2013Protons::new().dissipation(energy, flux, scale_height, rho)
}

#[cfg(test)]
mod tests {
    use super::super::{AtmosphereColumn, DissipationFunction};
    use super::{fang2013_protons, Fang2013Protons};

    #[test]
    fn test_reference_point() {
        let v = fang2013_protons(500., 1., 6e5, 5e-10);
        const EXPECTED: f64 = 8.017397683249581e-7;
        assert_approx_eq!(v, EXPECTED, EXPECTED * 1e-9);

        let v = fang2013_protons(100., 1., 27e5, 1.7e-12);
        const EXPECTED_HIGH: f64 = 2.914103783146357e-8;
        assert_approx_eq!(v, EXPECTED_HIGH, EXPECTED_HIGH * 1e-9);
    }

    #[test]
    fn test_nonnegative_over_energy_range() {
        let atm = AtmosphereColumn::from_slices(
            &[6e5, 27e5, 40e5],
            &[5e-10, 1.7e-12, 2.6e-13],
        ).unwrap();
        let model = Fang2013Protons::new();

        for i in 0..41 {
            let en = 0.1 * 10_f64.powf(i as f64 / 10.);
            for v in model.profile(en, 1., &atm).iter() {
                assert!(*v >= 0.);
            }
        }
    }
}
