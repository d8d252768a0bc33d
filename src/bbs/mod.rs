//! Blum Blum Shub pseudo-random bit generation.
//!
//! The free functions below use the default configuration. Use
//! [`BlumBlumShubBuilder`] to tune the primality test or to require
//! distinct primes.

pub mod builder;
pub mod errors;
pub mod fold;
pub mod generator;
pub mod params;

pub use builder::{BbsConfig, BlumBlumShubBuilder};
pub use errors::{BbsError, BbsResult, ErrorKind, PrimeRole};
pub use fold::fold_to_integer;
pub use generator::BlumBlumShub;
pub use params::{BbsParams, ValidatedParams, check_bit_count};

use num_bigint::BigInt;

/// Checks `(p, q, seed, num_bits)` without generating anything.
pub fn validate(p: &BigInt, q: &BigInt, seed: &BigInt, num_bits: i64) -> BbsResult<()> {
    BlumBlumShubBuilder::new().validate(p, q, seed, num_bits)
}

/// Validates the inputs, then returns exactly `num_bits` bits in generation
/// order.
pub fn generate(
    p: &BigInt,
    q: &BigInt,
    seed: &BigInt,
    num_bits: i64,
) -> BbsResult<Vec<bool>> {
    BlumBlumShubBuilder::new().generate(p, q, seed, num_bits)
}
