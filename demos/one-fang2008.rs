// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/// Compute one dissipation value for the Fang et al. (2008) model.
///
/// This uses the auroral reference point that is also pinned in the test
/// suite: a 10 keV Maxwellian population at unit energy flux, deposited at
/// roughly 100 km altitude.

extern crate eppaurora;

use eppaurora::fang2008;

fn main() {
    const E0: f64 = 10.;
    const Q0: f64 = 1.;
    const SCALE_HEIGHT: f64 = 6e5;
    const RHO: f64 = 5e-10;
    const REFERENCE: f64 = 4.4425687506434986e-7;

    let en_diss = fang2008(E0, Q0, SCALE_HEIGHT, RHO);

    println!("Reference q: {}   Ours: {}", REFERENCE, en_diss);
}
