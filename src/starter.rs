//! Choosing who opens each round.

use crate::Seat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks the seat that moves first in a round.
///
/// Closures returning a [`Seat`] implement this, which is how tests force
/// a starter.
pub trait StarterSelector {
    /// Picks a seat. Called once at the start of every round.
    fn pick(&mut self) -> Seat;
}

impl<F> StarterSelector for F
where
    F: FnMut() -> Seat,
{
    fn pick(&mut self) -> Seat {
        self()
    }
}

/// Uniform random choice between the two seats.
#[derive(Debug, Clone)]
pub struct RandomStarter<R> {
    rng: R,
}

impl<R: Rng> RandomStarter<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStarter<StdRng> {
    /// Reproducible selection from a fixed seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selection seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> StarterSelector for RandomStarter<R> {
    fn pick(&mut self) -> Seat {
        let seat = if self.rng.random_bool(0.5) {
            Seat::First
        } else {
            Seat::Second
        };
        debug!(?seat, "Starter picked");
        seat
    }
}
