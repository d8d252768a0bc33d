use num_bigint::BigInt;

use super::errors::BbsResult;
use super::generator::BlumBlumShub;
use super::params::{BbsParams, ValidatedParams, check_bit_count};
use crate::math::{DEFAULT_RANDOM_TRIALS, ProbablePrime};

/// Resolved generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BbsConfig {
    /// Random Miller-Rabin bases tried on top of Baillie-PSW.
    pub random_trials: usize,
    /// Reject `p == q`.
    pub require_distinct_primes: bool,
}

impl Default for BbsConfig {
    fn default() -> Self {
        Self {
            random_trials: DEFAULT_RANDOM_TRIALS,
            require_distinct_primes: false,
        }
    }
}

impl BbsConfig {
    pub fn primality_test(&self) -> ProbablePrime {
        ProbablePrime::new(self.random_trials)
    }
}

pub struct BlumBlumShubBuilder {
    random_trials: Option<usize>,
    require_distinct_primes: Option<bool>,
}

impl Default for BlumBlumShubBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlumBlumShubBuilder {
    pub fn new() -> Self {
        Self {
            random_trials: None,
            require_distinct_primes: None,
        }
    }

    pub fn random_trials(mut self, trials: usize) -> Self {
        self.random_trials = Some(trials);
        self
    }

    pub fn require_distinct_primes(mut self, require: bool) -> Self {
        self.require_distinct_primes = Some(require);
        self
    }

    pub fn config(&self) -> BbsConfig {
        let defaults = BbsConfig::default();
        BbsConfig {
            random_trials: self.random_trials.unwrap_or(defaults.random_trials),
            require_distinct_primes: self
                .require_distinct_primes
                .unwrap_or(defaults.require_distinct_primes),
        }
    }

    fn validate_params(
        &self,
        p: &BigInt,
        q: &BigInt,
        seed: &BigInt,
    ) -> BbsResult<ValidatedParams> {
        let config = self.config();
        BbsParams::new(p.clone(), q.clone(), seed.clone())
            .validate_with(&config.primality_test(), config.require_distinct_primes)
    }

    /// Runs every check, including the bit count, without generating.
    pub fn validate(
        &self,
        p: &BigInt,
        q: &BigInt,
        seed: &BigInt,
        num_bits: i64,
    ) -> BbsResult<()> {
        self.validate_params(p, q, seed)?;
        check_bit_count(num_bits)?;
        Ok(())
    }

    /// Validates `(p, q, seed)` and returns a streaming generator.
    pub fn build(&self, p: &BigInt, q: &BigInt, seed: &BigInt) -> BbsResult<BlumBlumShub> {
        self.validate_params(p, q, seed).map(BlumBlumShub::from_validated)
    }

    /// Validates everything, then produces exactly `num_bits` bits.
    pub fn generate(
        &self,
        p: &BigInt,
        q: &BigInt,
        seed: &BigInt,
        num_bits: i64,
    ) -> BbsResult<Vec<bool>> {
        let mut generator = self.build(p, q, seed)?;
        let count = check_bit_count(num_bits)?;
        generator.take_bits(count)
    }
}
