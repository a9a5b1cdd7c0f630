// Copyright 2020-2026 the eppaurora developers
// Licensed under the GPL version 3.

//! Shared plumbing for the demo and test programs.

extern crate rand;
#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_term;

use slog::Drain;

/// Create a simple `slog` terminal logger for demo programs.
///
/// Default parameters as per the `slog` basic example; saves a few lines of
/// boilerplate per program.
pub fn default_log() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build()
        .fuse();
    slog::Logger::root(drain, o!())
}

/// Draw random parameter values, uniformly or log-uniformly.
///
/// The demos sample characteristic energies log-uniformly (they span decades)
/// and fluxes uniformly.
pub struct Sampler {
    is_log: bool,
    low: f64,
    range: f64,
}

impl Sampler {
    /// Create a sampler over `[low, high]`; the bounds may be given in
    /// either order.
    pub fn new(is_log: bool, mut low: f64, mut high: f64) -> Self {
        if low > high {
            let tmp = high;
            high = low;
            low = tmp;
        }

        if is_log {
            low = low.ln();
            high = high.ln();
        }

        Sampler {
            is_log,
            low,
            range: high - low,
        }
    }

    /// A uniform sampler.
    pub fn uniform(low: f64, high: f64) -> Self {
        Sampler::new(false, low, high)
    }

    /// A log-uniform sampler; the bounds must be positive.
    pub fn log_uniform(low: f64, high: f64) -> Self {
        Sampler::new(true, low, high)
    }

    /// Sample a value.
    pub fn get(&self) -> f64 {
        let n = self.low + rand::random::<f64>() * self.range;

        if self.is_log {
            n.exp()
        } else {
            n
        }
    }
}
