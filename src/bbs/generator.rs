//! The Blum Blum Shub recurrence.
//!
//! State evolves as `x <- x^2 mod n` and each step emits the parity of the new
//! state. The seed itself never produces a bit: the first output is the
//! parity of `seed^2 mod n`.
use log::{debug, trace};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use rand::RngCore;

use super::builder::BlumBlumShubBuilder;
use super::errors::{BbsError, BbsResult};
use super::params::ValidatedParams;

/// A running generator owning its modulus `n` and state `x`.
///
/// Each instance is independent; clones continue from the same state without
/// affecting each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlumBlumShub {
    modulus: BigUint,
    state: BigUint,
}

impl BlumBlumShub {
    /// Validates with the default configuration and builds a generator.
    pub fn new(p: &BigInt, q: &BigInt, seed: &BigInt) -> BbsResult<Self> {
        BlumBlumShubBuilder::new().build(p, q, seed)
    }

    pub fn from_validated(params: ValidatedParams) -> Self {
        let (modulus, state) = params.into_parts();
        debug!("BBS generator over a {}-bit modulus", modulus.bits());
        Self { modulus, state }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Current state. Equals the seed until the first bit is drawn, then
    /// always lies in `[0, n)`.
    pub fn state(&self) -> &BigUint {
        &self.state
    }

    pub fn next_bit(&mut self) -> bool {
        self.state = (&self.state * &self.state) % &self.modulus;
        self.state.is_odd()
    }

    /// Draws `count` bits in generation order.
    ///
    /// Fails with [`BbsError::OutputTooLarge`] before drawing anything when
    /// the output buffer cannot be allocated.
    pub fn take_bits(&mut self, count: usize) -> BbsResult<Vec<bool>> {
        let mut bits = Vec::new();
        bits.try_reserve_exact(count)
            .map_err(|_| BbsError::OutputTooLarge { count })?;
        trace!("drawing {count} bits");
        for _ in 0..count {
            bits.push(self.next_bit());
        }
        Ok(bits)
    }

    /// Packs the next `width` bits into a word, first bit most significant.
    fn next_word(&mut self, width: u32) -> u64 {
        debug_assert!(width <= 64);
        (0..width).fold(0u64, |acc, _| (acc << 1) | u64::from(self.next_bit()))
    }
}

/// An unbounded bit stream.
impl Iterator for BlumBlumShub {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl RngCore for BlumBlumShub {
    fn next_u32(&mut self) -> u32 {
        self.next_word(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word(64)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = self.next_word(8) as u8;
        }
    }
}
