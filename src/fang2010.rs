// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! The Fang et al. (2010) mono-energetic electron parametrization and its
spectral integrators.

Fang et al. (2010; DOI:10.1029/2010GL045406) parametrize the dissipation of a
mono-energetic electron beam. Profiles for an arbitrary electron spectrum are
then obtained by quadrature of the energy-weighted mono-energetic profile
over the spectrum,

```text
∫ φ(E) q(E) E dE
```

either against externally supplied spectrum bins ([`fang2010_spec_int`]) or
against a Maxwellian sampled on an internal log-spaced energy grid
([`MaxwellianIntegration`], [`fang2010_maxw_int`]).

*/

use ndarray::{Array1, ArrayView1};
use slog::Logger;

use super::{AtmosphereColumn, DissipationFunction, Result, ShapeError};
use integrate::{log_spaced, trapz};
use poly::{self, POLY_F2010};
use spectra::maxwell_pflux;

/// The Fang et al. (2010) mono-energetic parametrization, bound to a
/// coefficient table (default [`poly::POLY_F2010`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fang2010Mono {
    pij: &'static [[f64; 4]; 8],
}

impl Fang2010Mono {
    /// Create the model with the published coefficient table.
    pub fn new() -> Self {
        Fang2010Mono { pij: &POLY_F2010 }
    }

    /// Substitute a different coefficient table.
    pub fn with_coefficients(mut self, pij: &'static [[f64; 4]; 8]) -> Self {
        self.pij = pij;
        self
    }

    /// The energy-dependent model coefficients, Fang et al. (2010) Eq. (5).
    pub fn coefficients(&self, energy: f64) -> [f64; 8] {
        poly::model_coefficients(self.pij, energy)
    }

    // Fang et al. (2008), Eq. (6); Fang et al. (2010), Eq. (4).
    fn f_y(c: &[f64; 8], y: f64) -> f64 {
        c[0] * y.powf(c[1]) * (-c[2] * y.powf(c[3])).exp()
            + c[4] * y.powf(c[5]) * (-c[6] * y.powf(c[7])).exp()
    }

    fn dissipation_with(c: &[f64; 8], energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        // Fang et al. (2010), Eq. (1).
        let y = 2. / energy * (rho * scale_height / 6e-6).powf(0.7);
        // Fang et al. (2008), Eq. (2).
        Fang2010Mono::f_y(c, y) * flux / scale_height
    }
}

impl Default for Fang2010Mono {
    fn default() -> Self {
        Fang2010Mono::new()
    }
}

impl DissipationFunction for Fang2010Mono {
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
        let c = self.coefficients(energy);
        Fang2010Mono::dissipation_with(&c, energy, flux, scale_height, rho)
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
            en_diss[i] = Fang2010Mono::dissipation_with(&c, energy, flux, h, r);
        }

        en_diss
    }
}

/// Mono-energetic electron energy dissipation after Fang et al. (2010), with
/// the published coefficient table.
///
/// `energy` [keV], `flux` [keV cm⁻² s⁻¹], `scale_height` [cm], `rho`
/// [g cm⁻³]; returns keV cm⁻³ s⁻¹. Non-positive inputs produce NaN/inf.
pub fn fang2010_mono(energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64 {
    Fang2010Mono::new().dissipation(energy, flux, scale_height, rho)
}

/// Integrate the mono-energetic parametrization over a binned spectrum.
///
/// `ens` holds the central bin energies [keV] and `dfluxes` the differential
/// particle fluxes [keV⁻¹ cm⁻² s⁻¹] in those bins; the two must have the
/// same length or the call fails with a [`ShapeError`]. `ens` is assumed
/// sorted ascending (unchecked, as in the reference formulation). Returns
/// one dissipated-energy value per altitude sample of `atm`.
pub fn fang2010_spec_int(
    model: &Fang2010Mono,
    log: &Logger,
    ens: ArrayView1<f64>,
    dfluxes: ArrayView1<f64>,
    atm: &AtmosphereColumn,
) -> Result<Array1<f64>> {
    if dfluxes.len() != ens.len() {
        return Err(ShapeError::mismatch("dfluxes", ens.len(), dfluxes.len()));
    }

    trace!(log, "integrating electron spectrum";
           "nbins" => ens.len(), "naltitudes" => atm.len());

    // The model coefficients depend only on the energy, so expand them over
    // the whole grid up front.
    let grid = poly::model_coefficients_grid(model.pij, ens);
    let cs: Vec<[f64; 8]> = (0..ens.len())
        .map(|k| {
            let mut ck = [0_f64; 8];
            for (i, c) in ck.iter_mut().enumerate() {
                *c = grid[[i, k]];
            }
            ck
        })
        .collect();

    let mut weighted = Array1::zeros(ens.len());
    let mut en_diss = Array1::zeros(atm.len());

    for (j, (&h, &r)) in atm
        .scale_height()
        .iter()
        .zip(atm.rho().iter())
        .enumerate()
    {
        for (k, &en) in ens.iter().enumerate() {
            weighted[k] = Fang2010Mono::dissipation_with(&cs[k], en, dfluxes[k], h, r) * en;
        }
        en_diss[j] = trapz(ens, weighted.view())?;
    }

    Ok(en_diss)
}

/// Builder for integrating the Fang et al. (2010) parametrization over a
/// Maxwellian electron population.
///
/// The defaults integrate 128 log-spaced samples between 0.1 and 300 keV.
/// Make sure the bounds bracket the bulk of the Maxwellian for your
/// characteristic energy; the quadrature silently underestimates the total
/// dissipation otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaxwellianIntegration {
    energy: f64,
    flux: f64,
    bounds: (f64, f64),
    nstep: usize,
}

impl MaxwellianIntegration {
    /// Set up an integration for a population of the given characteristic
    /// energy E₀ [keV] and integrated energy flux Q₀ [keV cm⁻² s⁻¹].
    pub fn new(energy: f64, flux: f64) -> Self {
        MaxwellianIntegration {
            energy,
            flux,
            bounds: (0.1, 300.),
            nstep: 128,
        }
    }

    /// Alter the integration range [keV].
    pub fn bounds(mut self, lo: f64, hi: f64) -> Self {
        self.bounds = (lo, hi);
        self
    }

    /// Alter the number of energy-grid samples.
    pub fn nstep(mut self, nstep: usize) -> Self {
        self.nstep = nstep;
        self
    }

    /// Run the quadrature, returning one dissipated-energy value
    /// [keV cm⁻³ s⁻¹] per altitude sample.
    pub fn compute(
        &self,
        model: &Fang2010Mono,
        log: &Logger,
        atm: &AtmosphereColumn,
    ) -> Result<Array1<f64>> {
        trace!(log, "beginning Maxwellian integration";
               "e0" => self.energy, "q0" => self.flux,
               "lo" => self.bounds.0, "hi" => self.bounds.1, "nstep" => self.nstep);

        let ens = log_spaced(self.bounds.0, self.bounds.1, self.nstep);
        let dflux = ens.mapv(|en| self.flux * maxwell_pflux(en, self.energy));
        fang2010_spec_int(model, log, ens.view(), dflux.view(), atm)
    }
}

/// Integrate the mono-energetic parametrization over a Maxwellian with the
/// default grid (128 samples, 0.1–300 keV).
///
/// `energy` is the characteristic energy E₀ [keV] of the Maxwellian and
/// `flux` the integrated energy flux Q₀ [keV cm⁻² s⁻¹]; see
/// [`MaxwellianIntegration`] to alter the grid.
pub fn fang2010_maxw_int(
    model: &Fang2010Mono,
    log: &Logger,
    energy: f64,
    flux: f64,
    atm: &AtmosphereColumn,
) -> Result<Array1<f64>> {
    MaxwellianIntegration::new(energy, flux).compute(model, log, atm)
}
