// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/*! Calculate atmospheric ionization profiles for auroral particle precipitation.

This crate implements the empirical and semi-empirical parametrizations of
the energy deposited in a planetary atmosphere by precipitating auroral
electrons (and, in one variant, protons), covering characteristic energies
from roughly 100 eV to 1 MeV. The key publications are [Roble & Ridley
(1987)](https://doi.org/10.5194/angeo-5-369-1987), [Fang et al. (2008;
DOI:10.1029/2008JA013384)](https://dx.doi.org/10.1029/2008JA013384), [Fang et
al. (2010; DOI:10.1029/2010GL045406)](https://dx.doi.org/10.1029/2010GL045406)
and [Fang et al. (2013;
DOI:10.1002/grl.50484)](https://dx.doi.org/10.1002/grl.50484).

The basic structure of the problem is that a particle population described by
a characteristic energy and an integrated energy flux hits an atmosphere
described by a vertical column of (scale height, mass density) samples. Each
parametrization maps the column depth to a dimensionless depth variable *y*
and evaluates a fitted sum of terms `c_a y^c_b exp(-c_c y^c_d)`, where the
`c`'s are either fixed constants (Roble & Ridley) or cubic polynomials in
`ln(E)` (the Fang family, see the `poly` module). Spectrum-integrated
profiles are obtained by trapezoidal quadrature of the mono-energetic
parametrization over an energy grid (see `fang2010`).

Units are fixed by contract: energies in keV, energy fluxes in
keV cm⁻² s⁻¹, scale heights in cm, mass densities in g cm⁻³, and dissipated
energy in keV cm⁻³ s⁻¹.

Physically out-of-range inputs (non-positive energies, fluxes, scale heights
or densities) are *not* guarded against: the fractional powers and logarithms
involved then produce IEEE-754 NaN/inf values, which propagate to the output
exactly as in the reference formulations. Only array-shape mismatches are
detected and reported, before any numbers are crunched.

*/

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;
extern crate ndarray;
#[macro_use]
extern crate slog;

use std::error;
use std::fmt;
use std::result;

use ndarray::{Array1, Array2, ArrayView1};

/// The error produced when array arguments cannot be broadcast together.
///
/// This is the only error the crate reports; it is raised before any numeric
/// work happens, since silently misaligning axes would corrupt the results.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeError {
    what: String,
}

impl ShapeError {
    pub(crate) fn mismatch(name: &str, expected: usize, actual: usize) -> Self {
        ShapeError {
            what: format!(
                "`{}` has length {} where {} was required",
                name, actual, expected
            ),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "shape mismatch: {}", self.what)
    }
}

impl error::Error for ShapeError {}

/// A `Result` whose error type is [`ShapeError`].
pub type Result<T> = result::Result<T, ShapeError>;

/// A vertical atmospheric column: scale heights and mass densities sampled
/// along a common altitude axis.
///
/// The two arrays must have the same length; this is checked once at
/// construction so that the model evaluations can iterate them in lockstep
/// without further checks. Scale heights are in cm, densities in g cm⁻³.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereColumn {
    scale_height: Array1<f64>,
    rho: Array1<f64>,
}

impl AtmosphereColumn {
    /// Create a column from scale-height and density arrays of equal length.
    pub fn new(scale_height: Array1<f64>, rho: Array1<f64>) -> Result<Self> {
        if rho.len() != scale_height.len() {
            return Err(ShapeError::mismatch("rho", scale_height.len(), rho.len()));
        }

        Ok(AtmosphereColumn { scale_height, rho })
    }

    /// Create a column by copying from plain slices.
    pub fn from_slices(scale_height: &[f64], rho: &[f64]) -> Result<Self> {
        AtmosphereColumn::new(
            Array1::from_vec(scale_height.to_vec()),
            Array1::from_vec(rho.to_vec()),
        )
    }

    /// The number of altitude samples.
    pub fn len(&self) -> usize {
        self.scale_height.len()
    }

    /// Whether the column has no samples.
    pub fn is_empty(&self) -> bool {
        self.scale_height.is_empty()
    }

    /// The scale heights [cm].
    pub fn scale_height(&self) -> ArrayView1<f64> {
        self.scale_height.view()
    }

    /// The mass densities [g cm⁻³].
    pub fn rho(&self) -> ArrayView1<f64> {
        self.rho.view()
    }
}

/// A mono-energetic energy-dissipation parametrization.
///
/// Implementors map one (energy, flux, scale height, density) sample to the
/// dissipated energy per unit volume and time. The provided methods build
/// altitude profiles and (energy × altitude) grids on top of that, with an
/// explicit broadcasting contract: an energy axis of length M against an
/// altitude axis of length N yields an (M, N) result, and a length-1 flux
/// axis stretches along the energy axis.
pub trait DissipationFunction {
    /// Evaluate the parametrization at a single point.
    ///
    /// `energy` is the characteristic energy E₀ [keV], `flux` the integrated
    /// energy flux Q₀ [keV cm⁻² s⁻¹], `scale_height` [cm] and `rho` [g cm⁻³]
    /// one atmospheric sample. Returns the dissipated energy
    /// [keV cm⁻³ s⁻¹]; non-positive inputs yield NaN/inf, not errors.
    fn dissipation(&self, energy: f64, flux: f64, scale_height: f64, rho: f64) -> f64;

    /// Evaluate the dissipated-energy profile over a whole column for one
    /// (energy, flux) pair.
    ///
    /// Models whose coefficients depend only on the energy override this to
    /// hoist the coefficient evaluation out of the altitude loop.
    fn profile(&self, energy: f64, flux: f64, atm: &AtmosphereColumn) -> Array1<f64> {
        let mut en_diss = Array1::zeros(atm.len());

        for (i, (&h, &r)) in atm
            .scale_height()
            .iter()
            .zip(atm.rho().iter())
            .enumerate()
        {
            en_diss[i] = self.dissipation(energy, flux, h, r);
        }

        en_diss
    }

    /// Evaluate the full (M, N) grid of dissipated energies for M energy
    /// samples against N altitude samples.
    ///
    /// `fluxes` must have length M or length 1; in the latter case the
    /// single flux value applies to every energy. Any other length is a
    /// [`ShapeError`]. Entry (i, j) equals the scalar
    /// [`dissipation`](#tymethod.dissipation) call for the same samples.
    fn profile_grid(
        &self,
        energies: ArrayView1<f64>,
        fluxes: ArrayView1<f64>,
        atm: &AtmosphereColumn,
    ) -> Result<Array2<f64>> {
        if fluxes.len() != energies.len() && fluxes.len() != 1 {
            return Err(ShapeError::mismatch("fluxes", energies.len(), fluxes.len()));
        }

        let mut en_diss = Array2::zeros((energies.len(), atm.len()));

        for (i, &en) in energies.iter().enumerate() {
            let q = if fluxes.len() == 1 { fluxes[0] } else { fluxes[i] };
            en_diss.row_mut(i).assign(&self.profile(en, q, atm));
        }

        Ok(en_diss)
    }
}

// Parametrizations

pub mod fang2008;
pub mod fang2010;
pub mod fang2013;
pub mod integrate;
pub mod poly;
pub mod roble_ridley;
pub mod spectra;

pub use fang2008::{fang2008, Fang2008};
pub use fang2010::{fang2010_maxw_int, fang2010_mono, fang2010_spec_int, Fang2010Mono,
                   MaxwellianIntegration};
pub use fang2013::{fang2013_protons, Fang2013Protons};
pub use roble_ridley::{rr1987, rr1987_mod, RobleRidley1987, RobleRidley1987Mod};
pub use spectra::{maxwell_general, maxwell_pflux};

#[cfg(test)]
mod tests {
    use super::AtmosphereColumn;

    #[test]
    fn test_column_lengths_must_agree() {
        let col = AtmosphereColumn::from_slices(&[6e5, 27e5, 40e5], &[5e-10, 1.7e-12]);
        assert!(col.is_err());

        let col = AtmosphereColumn::from_slices(&[6e5, 27e5], &[5e-10, 1.7e-12]).unwrap();
        assert_eq!(col.len(), 2);
    }
}
