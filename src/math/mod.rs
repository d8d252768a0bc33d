pub mod primes;

pub use primes::{DEFAULT_RANDOM_TRIALS, PrimalityTest, ProbablePrime};
