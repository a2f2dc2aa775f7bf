//! Tests for the prime sieve and the n-th prime bound

#[cfg(test)]
mod tests {
    use puzzgen::ids::primes::{PrimeSieve, nth_prime_upper_bound};

    // Tests the first primes come out in order
    // Verified by starting the sieve loop at 3
    #[test]
    fn test_first_primes() {
        let sieve = PrimeSieve::new(30);
        let primes: Vec<usize> = sieve.primes_from(0).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    // Tests iteration can skip leading primes
    // Verified by ignoring the lower bound
    #[test]
    fn test_primes_from_skips_lower_values() {
        let sieve = PrimeSieve::new(20);
        let primes: Vec<usize> = sieve.primes_from(3).collect();
        assert_eq!(primes, vec![3, 5, 7, 11, 13, 17, 19]);
    }

    // Tests values beyond the sieve are never reported prime
    // Verified by defaulting out-of-range lookups to true
    #[test]
    fn test_out_of_range_is_not_prime() {
        let sieve = PrimeSieve::new(10);
        assert_eq!(sieve.limit(), 10);
        assert!(sieve.is_prime(7));
        assert!(!sieve.is_prime(11));
        assert!(!sieve.is_prime(0));
        assert!(!sieve.is_prime(1));
    }

    // Tests squares of primes are marked composite
    // Verified by starting multiples at 2 * candidate + candidate
    #[test]
    fn test_prime_squares_are_composite() {
        let sieve = PrimeSieve::new(200);
        for p in [2, 3, 5, 7, 11, 13] {
            assert!(!sieve.is_prime(p * p), "{} should be composite", p * p);
        }
    }

    // Tests empty and tiny sieves
    // Verified by unconditionally flagging 0 and 1
    #[test]
    fn test_degenerate_limits() {
        assert_eq!(PrimeSieve::new(0).primes_from(0).count(), 0);
        assert_eq!(PrimeSieve::new(1).primes_from(0).count(), 0);
        assert_eq!(PrimeSieve::new(3).primes_from(0).collect::<Vec<_>>(), vec![2]);
    }

    // Tests the bound covers the n-th prime
    // Verified by dropping the ln ln n term
    #[test]
    fn test_nth_prime_upper_bound_holds() {
        let sieve = PrimeSieve::new(20_000);
        for (index, prime) in sieve.primes_from(0).take(2_000).enumerate() {
            let n = index + 1;
            assert!(
                prime < nth_prime_upper_bound(n),
                "prime #{n} = {prime} exceeds bound {}",
                nth_prime_upper_bound(n)
            );
        }
    }
}
