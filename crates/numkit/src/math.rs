//! Arithmetic helpers.

use rand::Rng;

/// Round to `decimals` places, halves away from zero. NaN becomes 0.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Constrain `value` to `[min, max]`.
///
/// With `min > max` the result is `max`, the same as applying the lower
/// bound first and the upper bound second.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Uniform integer in `[min, max]` from the thread-local generator.
pub fn random_between(min: i64, max: i64) -> i64 {
    random_between_with(&mut rand::rng(), min, max)
}

/// Uniform integer in `[min, max]` from `rng`. Reversed bounds are swapped.
pub fn random_between_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

pub fn is_odd(value: i64) -> bool {
    value % 2 != 0
}

/// Sum of `values`; 0 when empty.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean of `values`; 0 when empty.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// `1` → `1st`, `12` → `12th`, `22` → `22nd`.
///
/// Suffixes follow the remainder, so negative numbers keep `th` unless the
/// remainder happens to match (`-1` → `-1th`).
pub fn to_ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// True for finite values.
pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// Parse trimmed text as a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234_56, 2), 1.23);
        assert_eq!(round_to(1.235, 1), 1.2);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1234.0, -2), 1200.0);
        assert_eq!(round_to(f64::NAN, 2), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between_with(&mut rng, 1, 6);
            assert!((1..=6).contains(&v));
        }
        for _ in 0..100 {
            let v = random_between(-3, 3);
            assert!((-3..=3).contains(&v));
        }
    }

    #[test]
    fn test_random_between_reversed_and_equal_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let v = random_between_with(&mut rng, 10, 5);
            assert!((5..=10).contains(&v));
        }
        assert_eq!(random_between_with(&mut rng, 4, 4), 4);
    }

    #[test]
    fn test_random_between_with_is_reproducible() {
        let a: Vec<i64> = {
            let mut rng = StdRng::seed_from_u64(1);
            (0..8).map(|_| random_between_with(&mut rng, 0, 1000)).collect()
        };
        let b: Vec<i64> = {
            let mut rng = StdRng::seed_from_u64(1);
            (0..8).map(|_| random_between_with(&mut rng, 0, 1000)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_parity() {
        assert!(is_even(2));
        assert!(is_even(0));
        assert!(is_even(-2));
        assert!(!is_even(3));
        assert!(is_odd(3));
        assert!(is_odd(-3));
        assert!(!is_odd(4));
    }

    #[test]
    fn test_sum_and_average() {
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_to_ordinal() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (101, "101st"),
            (111, "111th"),
            (0, "0th"),
            (-1, "-1th"),
        ];
        for (n, expected) in cases {
            assert_eq!(to_ordinal(n), expected, "ordinal of {n}");
        }
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number(123.0));
        assert!(is_valid_number(-0.5));
        assert!(!is_valid_number(f64::NAN));
        assert!(!is_valid_number(f64::INFINITY));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-1.5e3"), Some(-1500.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }
}
