//! Primality testing over arbitrary-precision integers.
//!
//! The generator only ever asks one question of number theory: "is this
//! integer prime?". That question is answered through the [`PrimalityTest`]
//! trait so callers can plug in whichever test they trust. The crate ships
//! [`ProbablePrime`] as the default, which delegates to `num-prime`: strong
//! probable-prime rounds to fixed bases, a configurable number of random
//! bases, and a strong Lucas test (together a Baillie-PSW test).

use num_bigint::BigUint;
use num_prime::PrimalityTestConfig;
use num_prime::nt_funcs::is_prime;

/// Random strong-probable-prime bases used unless configured.
pub const DEFAULT_RANDOM_TRIALS: usize = 16;

/// A primality oracle over non-negative big integers.
pub trait PrimalityTest {
    fn is_prime(&self, n: &BigUint) -> bool;
}

impl<F> PrimalityTest for F
where
    F: Fn(&BigUint) -> bool,
{
    fn is_prime(&self, n: &BigUint) -> bool {
        self(n)
    }
}

/// Baillie-PSW plus `random_trials` random Miller-Rabin bases, via `num-prime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbablePrime {
    random_trials: usize,
}

impl Default for ProbablePrime {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_TRIALS)
    }
}

impl ProbablePrime {
    pub fn new(random_trials: usize) -> Self {
        Self { random_trials }
    }

    pub fn random_trials(&self) -> usize {
        self.random_trials
    }

    fn config(&self) -> PrimalityTestConfig {
        let mut config = PrimalityTestConfig::default();
        config.sprp_random_trials = self.random_trials;
        config.slprp_test = true;
        config
    }
}

impl PrimalityTest for ProbablePrime {
    fn is_prime(&self, n: &BigUint) -> bool {
        is_prime(n, Some(self.config())).probably()
    }
}
