//! Sieve of Eratosthenes backed by a packed bit vector
//!
//! Prime ids give every pair of neighbouring pieces a distinct product, so
//! edge ids need no separate registry.

use bitvec::prelude::{BitVec, bitvec};

/// Composite flags for every integer below `limit`
///
/// Bit `n` is set when `n` is known composite (or is 0 or 1).
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    composite: BitVec,
    limit: usize,
}

impl PrimeSieve {
    /// Sieve all integers in `0..limit`
    pub fn new(limit: usize) -> Self {
        let mut composite = bitvec![0; limit];
        for n in 0..limit.min(2) {
            composite.set(n, true);
        }

        let mut candidate: usize = 2;
        while candidate.saturating_mul(candidate) < limit {
            if !composite.get(candidate).is_some_and(|bit| *bit) {
                for multiple in (candidate * candidate..limit).step_by(candidate) {
                    composite.set(multiple, true);
                }
            }
            candidate += 1;
        }

        Self { composite, limit }
    }

    /// Exclusive upper bound of the sieved range
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Check primality of a value inside the sieved range
    ///
    /// Values at or beyond the limit are reported as not prime.
    pub fn is_prime(&self, value: usize) -> bool {
        self.composite.get(value).is_some_and(|bit| !*bit)
    }

    /// Iterate over primes in ascending order starting at `from`
    pub fn primes_from(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        self.composite
            .iter_zeros()
            .skip_while(move |&value| value < from)
    }
}

/// Upper bound on the value of the `n`-th prime
///
/// Uses Rosser's bound `n (ln n + ln ln n)` for `n >= 6` and a small
/// constant below that, with headroom for skipped leading primes.
pub fn nth_prime_upper_bound(n: usize) -> usize {
    if n < 6 {
        return 16;
    }
    let n_f = n as f64;
    let bound = n_f * (n_f.ln() + n_f.ln().ln());
    (bound.ceil() as usize).saturating_add(16)
}
