// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/// Crunch some numbers in the Fang et al. (2010) model.
///
/// The mono-energetic profile is cheap; the Maxwellian integration re-runs
/// it across the whole energy grid, so it dominates these timings.

#[macro_use]
extern crate bencher;
extern crate eppaurora;
extern crate ndarray;
#[macro_use]
extern crate slog;

use bencher::Bencher;
use eppaurora::{AtmosphereColumn, DissipationFunction, Fang2010Mono, MaxwellianIntegration};
use ndarray::Array1;
use slog::{Discard, Logger};

const E0S: &[f64] = &[0.5, 2., 10., 50., 250.];
const Q0: f64 = 1e8;

/// An isothermal-ish hundred-sample column spanning ~90-250 km.
fn canned_atmosphere(n: usize) -> AtmosphereColumn {
    let scale_height = Array1::from_iter((0..n).map(|i| 6e5 + 4e4 * i as f64));
    let rho = Array1::from_iter((0..n).map(|i| 5e-10 * (-(i as f64) / 12.).exp()));
    AtmosphereColumn::new(scale_height, rho).unwrap()
}

fn mono_profile(b: &mut Bencher) {
    let atm = canned_atmosphere(100);
    let model = Fang2010Mono::new();

    b.iter(|| {
        for &e0 in E0S {
            bencher::black_box(model.profile(e0, Q0, &atm));
        }
    });
}

fn maxwellian_128(b: &mut Bencher) {
    let atm = canned_atmosphere(100);
    let model = Fang2010Mono::new();
    let log = Logger::root(Discard, o!());

    b.iter(|| {
        bencher::black_box(
            MaxwellianIntegration::new(10., Q0)
                .compute(&model, &log, &atm)
                .unwrap(),
        );
    });
}

fn maxwellian_512(b: &mut Bencher) {
    let atm = canned_atmosphere(100);
    let model = Fang2010Mono::new();
    let log = Logger::root(Discard, o!());

    b.iter(|| {
        bencher::black_box(
            MaxwellianIntegration::new(10., Q0)
                .nstep(512)
                .compute(&model, &log, &atm)
                .unwrap(),
        );
    });
}

benchmark_group!(fang2010, mono_profile, maxwellian_128, maxwellian_512);
benchmark_main!(fang2010);
