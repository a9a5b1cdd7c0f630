// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! Maxwellian particle precipitation spectra.

The spectral shapes used to turn a mono-energetic parametrization into one
for a full particle population, as defined in Fang et al. (2008), Eq. (1).

*/

/// Maxwellian number flux spectrum, `E exp(-E / E₀)` (unnormalized).
///
/// `en` is the energy [keV] and `en_0` the characteristic energy, i.e. the
/// mode of the distribution [keV].
pub fn maxwell_general(en: f64, en_0: f64) -> f64 {
    en * (-en / en_0).exp()
}

/// Maxwellian differential particle flux spectrum, scaled to unit total
/// energy flux.
///
/// Normalized such that `∫₀^∞ E φ(E) dE = 1`; multiply by the integrated
/// energy flux Q₀ [keV cm⁻² s⁻¹] to recover the hemispherical differential
/// particle flux in keV⁻¹ cm⁻² s⁻¹.
pub fn maxwell_pflux(en: f64, en_0: f64) -> f64 {
    0.5 / en_0.powi(3) * maxwell_general(en, en_0)
}

#[cfg(test)]
mod tests {
    use integrate::{log_spaced, trapz};
    use ndarray::Array1;

    use super::{maxwell_general, maxwell_pflux};

    #[test]
    fn test_mode_at_characteristic_energy() {
        // dφ/dE = 0 at E = E₀.
        let en_0 = 10.;
        let at_mode = maxwell_general(en_0, en_0);
        assert!(at_mode > maxwell_general(en_0 * 0.99, en_0));
        assert!(at_mode > maxwell_general(en_0 * 1.01, en_0));
    }

    #[test]
    fn test_unit_energy_flux_normalization() {
        // ∫ E φ(E) dE over a range generously bracketing E₀ = 10 keV.
        let ens = log_spaced(1e-4, 1e4, 4096);
        let weighted = Array1::from_iter(ens.iter().map(|&en| en * maxwell_pflux(en, 10.)));
        let total = trapz(ens.view(), weighted.view()).unwrap();
        assert_approx_eq!(total, 1., 1e-3);
    }
}
