// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

/// Crank out Maxwellian-integrated dissipation profiles for random
/// precipitation parameters.
///
/// Characteristic energies are sampled log-uniformly, energy fluxes
/// uniformly; the output is a TSV table with one profile per row, suitable
/// for eyeballing or feeding into a fitting framework.

#[macro_use]
extern crate clap;
extern crate eppaurora;
extern crate eppaurora_test_support;
extern crate ndarray;
#[macro_use]
extern crate slog;

use eppaurora::{fang2010_maxw_int, AtmosphereColumn, Fang2010Mono};
use eppaurora_test_support::Sampler;
use ndarray::Array1;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

const N_ALTITUDES: usize = 24;

/// A canned atmospheric column spanning roughly 95-250 km.
fn canned_atmosphere() -> AtmosphereColumn {
    let scale_height = Array1::from_iter((0..N_ALTITUDES).map(|i| 6e5 + 1.5e5 * i as f64));
    let rho = Array1::from_iter((0..N_ALTITUDES).map(|i| 5e-10 * (-(i as f64) / 3.).exp()));
    AtmosphereColumn::new(scale_height, rho).unwrap()
}

fn main() {
    let matches = clap::Command::new(crate_name!())
        .version(crate_version!())
        .about("Crank out Maxwellian dissipation profiles for random parameters")
        .arg(
            clap::Arg::new("OUTFILE")
                .help("The path of the output file to create")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("N_SAMPLES")
                .help("The number of profiles to compute")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("E0_MIN")
                .help("The minimum characteristic energy to sample [keV]")
                .required(true)
                .index(3),
        )
        .arg(
            clap::Arg::new("E0_MAX")
                .help("The maximum characteristic energy to sample [keV]")
                .required(true)
                .index(4),
        )
        .get_matches();

    let outfile = PathBuf::from(matches.get_one::<String>("OUTFILE").unwrap());
    let n_samples = matches
        .get_one::<String>("N_SAMPLES")
        .unwrap()
        .parse::<usize>()
        .unwrap();
    let e0_sampler = Sampler::log_uniform(
        matches
            .get_one::<String>("E0_MIN")
            .unwrap()
            .parse::<f64>()
            .unwrap(),
        matches
            .get_one::<String>("E0_MAX")
            .unwrap()
            .parse::<f64>()
            .unwrap(),
    );
    let q0_sampler = Sampler::uniform(1e7, 1e9);

    let log = eppaurora_test_support::default_log();
    let atm = canned_atmosphere();
    let model = Fang2010Mono::new();

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&outfile)
        .unwrap();

    write!(file, "e0(lin)\tq0(lin)\ttime_ms(meta)").unwrap();
    for i in 0..N_ALTITUDES {
        write!(file, "\tq_{}(res)", i).unwrap();
    }
    writeln!(file).unwrap();

    for i in 0..n_samples {
        let e0 = e0_sampler.get();
        let q0 = q0_sampler.get();

        let t0 = Instant::now();
        let en_diss = fang2010_maxw_int(&model, &log, e0, q0, &atm).unwrap();
        let elapsed = t0.elapsed();
        let time_ms = elapsed.as_secs() as f64 * 1000. + elapsed.subsec_nanos() as f64 * 1e-6;

        info!(log, "profile"; "i" => i, "e0" => e0, "q0" => q0, "time_ms" => time_ms);

        write!(file, "{:.16e}\t{:.16e}\t{:.16e}", e0, q0, time_ms).unwrap();
        for v in en_diss.iter() {
            write!(file, "\t{:.16e}", v).unwrap();
        }
        writeln!(file).unwrap();
    }
}
