//! Unique id supply for puzzle pieces
//!
//! This module contains:
//! - A packed-bit prime sieve
//! - The id supplier abstraction and its prime-backed implementation

/// Sieve of Eratosthenes and prime bounds
pub mod primes;
/// Id supplier trait, prime supplier and shuffling
pub mod supplier;

pub use supplier::{IdSupplier, PrimeSupplier, shuffled_ids};
