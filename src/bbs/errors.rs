use std::fmt;

use num_bigint::BigInt;
use thiserror::Error;

/// Which of the four prime inputs a primality or congruence failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimeRole {
    P,
    Q,
    /// `(p - 1) / 2`
    HalfP,
    /// `(q - 1) / 2`
    HalfQ,
}

impl fmt::Display for PrimeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PrimeRole::P => "p",
            PrimeRole::Q => "q",
            PrimeRole::HalfP => "(p - 1) / 2",
            PrimeRole::HalfQ => "(q - 1) / 2",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BbsError {
    #[error("{role} = {value} is not congruent to 3 mod 4")]
    Congruence { role: PrimeRole, value: BigInt },
    #[error("{role} = {value} is not prime")]
    Primality { role: PrimeRole, value: BigInt },
    #[error("p and q must be distinct, both are {value}")]
    DuplicatePrimes { value: BigInt },
    #[error("seed shares the factor {gcd} with the modulus")]
    SeedNotCoprime { gcd: BigInt },
    #[error("seed must be positive, got {seed}")]
    SeedNotPositive { seed: BigInt },
    #[error("bit count must be positive, got {num_bits}")]
    InvalidBitCount { num_bits: i64 },
    #[error("cannot allocate room for {count} output bits")]
    OutputTooLarge { count: usize },
}

/// Field-less discriminant of [`BbsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Congruence,
    Primality,
    DuplicatePrimes,
    SeedNotCoprime,
    SeedNotPositive,
    InvalidBitCount,
    OutputTooLarge,
}

impl BbsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BbsError::Congruence { .. } => ErrorKind::Congruence,
            BbsError::Primality { .. } => ErrorKind::Primality,
            BbsError::DuplicatePrimes { .. } => ErrorKind::DuplicatePrimes,
            BbsError::SeedNotCoprime { .. } => ErrorKind::SeedNotCoprime,
            BbsError::SeedNotPositive { .. } => ErrorKind::SeedNotPositive,
            BbsError::InvalidBitCount { .. } => ErrorKind::InvalidBitCount,
            BbsError::OutputTooLarge { .. } => ErrorKind::OutputTooLarge,
        }
    }
}

pub type BbsResult<T> = Result<T, BbsError>;
