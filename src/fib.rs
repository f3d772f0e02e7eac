//! The deliberately expensive computation the display elements render.

/// Naive recursive Fibonacci, kept naive on purpose: it is the CPU burn that
/// makes skipped re-renders visible. f(0) = f(1) = 1.
pub fn fib(n: usize) -> u64 {
    if n < 2 {
        1
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// The sequence a display element renders for a given count: f(0) through
/// f(count) inclusive.
pub fn fib_sequence(count: usize) -> Vec<u64> {
    (0..=count).map(fib).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), 1);
        assert_eq!(fib(1), 1);
        assert_eq!(fib(2), 2);
    }

    #[test]
    fn sequence_for_count_five() {
        assert_eq!(fib_sequence(5), [1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn sequence_for_count_zero_is_just_f0() {
        assert_eq!(fib_sequence(0), [1]);
    }
}
