mod primes;
