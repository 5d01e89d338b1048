// File: src/core/prime.rs

/// Trial-division primality test.
/// O(sqrt(n)) complexity; checks every candidate divisor from 2 up to floor(sqrt(n)).
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2u64;
    // `divisor <= n / divisor` is `divisor * divisor <= n` without overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
