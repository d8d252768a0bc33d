//! Parameter validation for the Blum Blum Shub generator.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. `p ≡ 3 (mod 4)` and `q ≡ 3 (mod 4)`
//! 2. `p`, `q`, `(p - 1) / 2` and `(q - 1) / 2` are prime
//! 3. (optional) `p != q`
//! 4. `gcd(seed, p * q) == 1`
//! 5. `seed > 0`
//! 6. `num_bits > 0` (see [`check_bit_count`])
use log::debug;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};

use super::errors::{BbsError, BbsResult, PrimeRole};
use crate::math::{PrimalityTest, ProbablePrime};

/// Caller-supplied primes and seed, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BbsParams {
    pub p: BigInt,
    pub q: BigInt,
    pub seed: BigInt,
}

/// A parameter set that passed validation.
///
/// Only obtainable through [`BbsParams::validate`] or
/// [`BbsParams::validate_with`], so holding one means every check ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    modulus: BigUint,
    seed: BigUint,
}

impl ValidatedParams {
    /// The Blum integer `n = p * q`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn seed(&self) -> &BigUint {
        &self.seed
    }

    pub(crate) fn into_parts(self) -> (BigUint, BigUint) {
        (self.modulus, self.seed)
    }
}

impl BbsParams {
    pub fn new(
        p: impl Into<BigInt>,
        q: impl Into<BigInt>,
        seed: impl Into<BigInt>,
    ) -> Self {
        Self {
            p: p.into(),
            q: q.into(),
            seed: seed.into(),
        }
    }

    /// Validates with the default primality test and no distinctness check.
    pub fn validate(&self) -> BbsResult<ValidatedParams> {
        self.validate_with(&ProbablePrime::default(), false)
    }

    pub fn validate_with<T: PrimalityTest + ?Sized>(
        &self,
        test: &T,
        require_distinct_primes: bool,
    ) -> BbsResult<ValidatedParams> {
        let result = self.check(test, require_distinct_primes);
        if let Err(err) = &result {
            debug!("rejected BBS parameters: {err}");
        }
        result
    }

    fn check<T: PrimalityTest + ?Sized>(
        &self,
        test: &T,
        require_distinct_primes: bool,
    ) -> BbsResult<ValidatedParams> {
        let primes = [(PrimeRole::P, &self.p), (PrimeRole::Q, &self.q)];

        let four = BigInt::from(4);
        let three = BigInt::from(3);
        for (role, value) in primes {
            if value.mod_floor(&four) != three {
                return Err(BbsError::Congruence {
                    role,
                    value: value.clone(),
                });
            }
        }

        for (role, value) in primes {
            if !is_prime_int(test, value) {
                return Err(BbsError::Primality {
                    role,
                    value: value.clone(),
                });
            }
        }
        let companions = [(PrimeRole::HalfP, &self.p), (PrimeRole::HalfQ, &self.q)];
        for (role, prime) in companions {
            // Exact: prime is odd here.
            let half: BigInt = (prime - 1u32) / 2u32;
            if !is_prime_int(test, &half) {
                return Err(BbsError::Primality { role, value: half });
            }
        }

        if require_distinct_primes && self.p == self.q {
            return Err(BbsError::DuplicatePrimes {
                value: self.p.clone(),
            });
        }

        let modulus = &self.p * &self.q;
        let gcd = self.seed.gcd(&modulus);
        if !gcd.is_one() {
            return Err(BbsError::SeedNotCoprime { gcd });
        }

        if !self.seed.is_positive() {
            return Err(BbsError::SeedNotPositive {
                seed: self.seed.clone(),
            });
        }

        Ok(ValidatedParams {
            modulus: modulus.magnitude().clone(),
            seed: self.seed.magnitude().clone(),
        })
    }
}

/// Converts a requested bit count into a length, rejecting `num_bits <= 0`.
pub fn check_bit_count(num_bits: i64) -> BbsResult<usize> {
    if num_bits <= 0 {
        debug!("rejected bit count {num_bits}");
        return Err(BbsError::InvalidBitCount { num_bits });
    }
    usize::try_from(num_bits).map_err(|_| BbsError::InvalidBitCount { num_bits })
}

fn is_prime_int<T: PrimalityTest + ?Sized>(test: &T, value: &BigInt) -> bool {
    value.to_biguint().is_some_and(|n| test.is_prime(&n))
}
