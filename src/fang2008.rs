// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! The Fang et al. (2008) Maxwellian-electron dissipation parametrization.

Fang et al. (2008; DOI:10.1029/2008JA013384) fit the energy dissipation of a
Maxwellian electron population directly, so no extra spectral integration is
needed: the characteristic energy of the distribution enters through the
polynomial coefficient expansion of the `poly` module.

*/

use ndarray::Array1;

use super::{AtmosphereColumn, DissipationFunction};
use poly::{self, POLY_F2008};

/// The Fang et al. (2008) parametrization, bound to a coefficient table.
///
/// The default table is [`poly::POLY_F2008`]; an alternative table with the
/// same layout can be substituted for experimentation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fang2008 {
    pij: &'static [[f64; 4]; 8],
}

impl Fang2008 {
    /// Create the model with the published coefficient table.
    pub fn new() -> Self {
        Fang2008 { pij: &POLY_F2008 }
    }

    /// Substitute a different coefficient table.
    pub fn with_coefficients(mut self, pij: &'static [[f64; 4]; 8]) -> Self {
        self.pij = pij;
        self
    }

    /// The energy-dependent model coefficients, Fang et al. (2008) Eq. (7).
    pub fn coefficients(&self, energy: f64) -> [f64; 8] {
        poly::model_coefficients(self.pij, energy)
    }

    // Fang et al. (2008), Eq. (6).
    fn f_y(c: &[f64; 8], y: f64) -> f64 {
        c[0] * y.powf(c[1]) * (-c[2] * y.powf(c[3])).exp()
            + c[4] * y.powf(c[5]) * (-c[6] * y.powf(c[7])).exp()
    }

    fn dissipation_with(c: &[f64; 8], energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        // Fang et al. (2008), Eq. (4).
        let y = (rho * scale_height / 4e-6).powf(1. / 1.65) / energy;
        // Fang et al. (2008), Eq. (2).
        0.5 * Fang2008::f_y(c, y) * flux / scale_height
    }
}

impl Default for Fang2008 {
    fn default() -> Self {
        Fang2008::new()
    }
}

impl DissipationFunction for Fang2008 {
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        let c = self.coefficients(energy);
        Fang2008::dissipation_with(&c, energy, flux, scale_height, rho)
    }

    fn profile(&self, energy: f64, flux: f64, atm: &AtmosphereColumn) -> Array1<f64> {
        // The coefficients depend only on the energy; evaluate them once.
        let c = self.coefficients(energy);
        let mut en_diss = Array1::zeros(atm.len());

        for (i, (&h, &r)) in atm
            .scale_height()
            .iter()
            .zip(atm.rho().iter())
            .enumerate()
        {
            en_diss[i] = Fang2008::dissipation_with(&c, energy, flux, h, r);
        }

        en_diss
    }
}

/// Electron energy dissipation after Fang et al. (2008), with the published
/// coefficient table.
///
/// `energy` [keV], `flux` [keV cm⁻² s⁻¹], `scale_height` [cm], `rho`
/// [g cm⁻³]; returns keV cm⁻³ s⁻¹. Non-positive inputs produce NaN/inf.
pub fn fang2008(energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
    Fang2008::new().dissipation(energy, flux, scale_height, rho)
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use super::super::{AtmosphereColumn, DissipationFunction};
    use super::{fang2008, Fang2008};

    #[test]
    fn test_reference_point() {
        let v = fang2008(1., 1., 1e6, 1e-9);
        const EXPECTED: f64 = 3.7132906498482234e-10;
        assert_approx_eq!(v, EXPECTED, EXPECTED * 1e-9);

        let v = fang2008(10., 1., 6e5, 5e-10);
        const EXPECTED_AURORAL: f64 = 4.4425687506434986e-7;
        assert_approx_eq!(v, EXPECTED_AURORAL, EXPECTED_AURORAL * 1e-9);
    }

    #[test]
    fn test_profile_matches_scalar_calls() {
        let atm = AtmosphereColumn::from_slices(
            &[6e5, 27e5, 40e5],
            &[5e-10, 1.7e-12, 2.6e-13],
        ).unwrap();
        let model = Fang2008::new();

        let prof = model.profile(10., 1e8, &atm);
        assert_eq!(prof.len(), 3);
        for (i, (&h, &r)) in atm
            .scale_height()
            .iter()
            .zip(atm.rho().iter())
            .enumerate()
        {
            assert_eq!(prof[i], model.dissipation(10., 1e8, h, r));
        }
    }

    #[test]
    fn test_grid_broadcasts_single_flux() {
        let atm = AtmosphereColumn::from_slices(
            &[6e5, 27e5, 40e5],
            &[5e-10, 1.7e-12, 2.6e-13],
        ).unwrap();
        let ens = Array1::from_vec(vec![0.1, 1., 10., 100.]);
        let q = Array1::from_vec(vec![1.]);

        let grid = Fang2008::new()
            .profile_grid(ens.view(), q.view(), &atm)
            .unwrap();
        assert_eq!(grid.shape(), &[4, 3]);

        let bad = Array1::from_vec(vec![1., 1.]);
        assert!(Fang2008::new()
            .profile_grid(ens.view(), bad.view(), &atm)
            .is_err());
    }
}
