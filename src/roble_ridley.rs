// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! The Roble & Ridley (1987) electron energy dissipation parametrization.

The equations are taken from Fang et al. (2008), Eqs. (2) and (4), which
correct a typo in the original paper. The eight dissipation-function
constants are fixed; unlike the Fang-family models they do not depend on the
particle energy.

A "modified" variant with adjusted constants is also provided; it tracks the
Fang et al. (2008) parametrization more closely, but the origin of its
constants is unknown and unverified. They are kept verbatim, not rederived.

*/

use super::DissipationFunction;

// Roble & Ridley (1987), p. 371.
const RR1987_C: [f64; 8] = [
    2.11685, 2.97035, 2.09710, 0.74054, 0.58795, 1.72746, 1.37459, 0.93296,
];

// Modified constants, origin unknown.
const RR1987_MOD_C: [f64; 8] = [
    3.233, 2.56588, 2.2541, 0.7297198, 1.106907, 1.71349, 1.8835444, 0.86472135,
];

fn f_y(c: &[f64; 8], y: f64) -> f64 {
    c[0] * y.powf(c[1]) * (-c[2] * y.powf(c[3])).exp()
        + c[4] * y.powf(c[5]) * (-c[6] * y.powf(c[7])).exp()
}

/// Electron energy dissipation after Roble & Ridley (1987).
///
/// `energy` [keV], `flux` [keV cm⁻² s⁻¹], `scale_height` [cm], `rho`
/// [g cm⁻³]; returns keV cm⁻³ s⁻¹. Non-positive inputs produce NaN/inf.
pub fn rr1987(energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
    // Fang et al. (2008), Eq. (4).
    let y = (rho * scale_height / 4e-6).powf(1. / 1.65) / energy;
    // Fang et al. (2008), Eq. (2).
    0.5 * flux / scale_height * f_y(&RR1987_C, y)
}

/// Roble & Ridley (1987) dissipation with the modified constants.
///
/// Same contract as [`rr1987`]; see the module docs about the provenance of
/// the constants.
pub fn rr1987_mod(energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
    let y = (rho * scale_height / 4.6e-6).powf(1. / 1.65) / energy;
    0.5 * flux / scale_height * f_y(&RR1987_MOD_C, y)
}

/// The Roble & Ridley (1987) parametrization as a model object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RobleRidley1987;

impl DissipationFunction for RobleRidley1987 {
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        rr1987(energy, flux, scale_height, rho)
    }
}

/// The modified-constant Roble & Ridley variant as a model object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RobleRidley1987Mod;

impl DissipationFunction for RobleRidley1987Mod {
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        rr1987_mod(energy, flux, scale_height, rho)
    }
}

#[cfg(test)]
mod tests {
    use super::{rr1987, rr1987_mod};

    #[test]
    fn test_reference_point() {
        let v = rr1987(1., 1., 1e6, 1e-9);
        const EXPECTED: f64 = 3.0655643933296597e-13;
        assert_approx_eq!(v, EXPECTED, EXPECTED * 1e-9);

        let v = rr1987(10., 1., 6e5, 5e-10);
        const EXPECTED_AURORAL: f64 = 4.5151758359267417e-7;
        assert_approx_eq!(v, EXPECTED_AURORAL, EXPECTED_AURORAL * 1e-9);
    }

    #[test]
    fn test_modified_reference_point() {
        let v = rr1987_mod(1., 1., 1e6, 1e-9);
        const EXPECTED: f64 = 1.8405333766878778e-13;
        assert_approx_eq!(v, EXPECTED, EXPECTED * 1e-9);

        let v = rr1987_mod(10., 1., 6e5, 5e-10);
        const EXPECTED_AURORAL: f64 = 4.752966018947073e-7;
        assert_approx_eq!(v, EXPECTED_AURORAL, EXPECTED_AURORAL * 1e-9);
    }

    #[test]
    fn test_nonnegative_over_energy_range() {
        for i in 0..41 {
            let en = 0.1 * 10_f64.powf(i as f64 / 10.);
            for &(h, r) in &[(6e5, 5e-10), (27e5, 1.7e-12), (40e5, 2.6e-13)] {
                assert!(rr1987(en, 1., h, r) >= 0.);
                assert!(rr1987_mod(en, 1., h, r) >= 0.);
            }
        }
    }
}
