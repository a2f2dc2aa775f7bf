//! Sources of unique piece ids

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::ids::primes::{PrimeSieve, nth_prime_upper_bound};
use crate::io::configuration::{FIRST_PRIME_ID, MAX_SIEVE_LIMIT, MIN_SIEVE_LIMIT};
use crate::io::error::{PuzzleError, Result};

/// Produces distinct positive integers for use as piece ids
///
/// Implementations must return exactly `n` distinct values in increasing
/// order, or fail with [`PuzzleError::Exhaustion`].
pub trait IdSupplier {
    /// Supply `n` distinct ids in increasing order
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Exhaustion`] if fewer than `n` ids exist in
    /// the supplier's search space
    fn supply(&self, n: usize) -> Result<Vec<u64>>;
}

/// Supplies consecutive primes starting at [`FIRST_PRIME_ID`]
///
/// The sieve bound starts from an estimate of the `n`-th prime and doubles
/// until enough primes are found or `max_limit` is reached.
#[derive(Debug, Clone, Copy)]
pub struct PrimeSupplier {
    max_limit: usize,
}

impl Default for PrimeSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeSupplier {
    /// Create a supplier bounded by [`MAX_SIEVE_LIMIT`]
    pub const fn new() -> Self {
        Self {
            max_limit: MAX_SIEVE_LIMIT,
        }
    }

    /// Create a supplier with a custom search space bound
    pub const fn with_max_limit(max_limit: usize) -> Self {
        Self { max_limit }
    }

    /// Exclusive upper bound of the search space
    pub const fn max_limit(&self) -> usize {
        self.max_limit
    }
}

impl IdSupplier for PrimeSupplier {
    fn supply(&self, n: usize) -> Result<Vec<u64>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        // Primes below FIRST_PRIME_ID are skipped, so over-estimate by a few
        let mut limit = nth_prime_upper_bound(n.saturating_add(FIRST_PRIME_ID as usize))
            .max(MIN_SIEVE_LIMIT)
            .min(self.max_limit);

        loop {
            let sieve = PrimeSieve::new(limit);
            let ids: Vec<u64> = sieve
                .primes_from(FIRST_PRIME_ID as usize)
                .take(n)
                .map(|prime| prime as u64)
                .collect();

            debug!(requested = n, found = ids.len(), limit, "sieved prime ids");

            if ids.len() == n {
                return Ok(ids);
            }
            if limit >= self.max_limit {
                return Err(PuzzleError::Exhaustion {
                    requested: n,
                    found: ids.len(),
                    limit,
                });
            }
            limit = limit.saturating_mul(2).min(self.max_limit);
        }
    }
}

/// Supply `n` ids and shuffle them uniformly
///
/// Shuffling removes any link between an id's magnitude and the position of
/// its piece in the grid.
///
/// # Errors
///
/// Propagates the supplier's error
pub fn shuffled_ids<S, R>(supplier: &S, n: usize, rng: &mut R) -> Result<Vec<u64>>
where
    S: IdSupplier + ?Sized,
    R: Rng + ?Sized,
{
    let mut ids = supplier.supply(n)?;
    ids.shuffle(rng);
    Ok(ids)
}
