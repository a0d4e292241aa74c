//! # Property Classifier
//!
//! Computes every base property of a natural number in one pass over its
//! decimal digits. Classification is a pure function: the same value always
//! yields the same [`PropertySet`], and negated properties are read off the
//! set as complements rather than stored.
//!
//! ## Example
//!
//! ```rust
//! use anum_classifier::classify;
//! use anum_domain::PropertyName;
//!
//! let props = classify(22);
//! assert!(props.holds(PropertyName::Spy));
//! assert!(props.holds(PropertyName::Palindromic));
//! assert!(!props.holds(PropertyName::Odd));
//! ```

mod digits;

use crate::digits::Digits;
use anum_domain::{Classified, PropertyName, PropertySet};
use fxhash::FxHashSet;

/// The ordered catalog of base property names.
pub const fn catalog() -> &'static [PropertyName] {
    &PropertyName::ALL
}

/// Classifies `value` into the set of base properties that hold for it.
pub fn classify(value: u64) -> PropertySet {
    let digits = Digits::of(value);
    let happy = is_happy(value);

    let mut set = PropertySet::empty();
    set.set(PropertySet::EVEN, value % 2 == 0);
    set.set(PropertySet::ODD, value % 2 != 0);
    set.set(PropertySet::BUZZ, value % 10 == 7 || value % 7 == 0);
    set.set(PropertySet::DUCK, digits.as_slice().contains(&0));
    set.set(PropertySet::PALINDROMIC, is_palindromic(&digits));
    set.set(PropertySet::GAPFUL, is_gapful(value, &digits));
    set.set(PropertySet::SPY, digits.sum() == digits.product());
    set.set(PropertySet::SUNNY, is_perfect_square(u128::from(value) + 1));
    set.set(PropertySet::SQUARE, is_perfect_square(u128::from(value)));
    set.set(PropertySet::JUMPING, is_jumping(&digits));
    set.set(PropertySet::HAPPY, happy);
    set.set(PropertySet::SAD, !happy);
    set
}

/// Classifies `value` and keeps the number alongside its properties.
pub fn describe(value: u64) -> Classified {
    Classified::new(value, classify(value))
}

fn is_palindromic(digits: &Digits) -> bool {
    let d = digits.as_slice();
    d.iter().eq(d.iter().rev())
}

/// Divisible by the number formed from its first and last digit; needs three digits.
fn is_gapful(value: u64, digits: &Digits) -> bool {
    if value < 100 {
        return false;
    }
    let divisor = u64::from(digits.first()) * 10 + u64::from(digits.last());
    value % divisor == 0
}

/// Exact integer test; no floating point.
fn is_perfect_square(n: u128) -> bool {
    let root = n.isqrt();
    root * root == n
}

fn is_jumping(digits: &Digits) -> bool {
    digits.as_slice().windows(2).all(|pair| pair[0].abs_diff(pair[1]) == 1)
}

/// Follows the digit-square-sum chain until it reaches 1 or revisits a value.
fn is_happy(value: u64) -> bool {
    let mut seen = FxHashSet::default();
    let mut current = value;
    loop {
        seen.insert(current);
        current = Digits::of(current).square_sum();
        if current == 1 {
            return true;
        }
        if seen.contains(&current) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(value: u64, name: PropertyName) -> bool {
        classify(value).holds(name)
    }

    #[test]
    fn parity() {
        assert!(has(0, PropertyName::Even));
        assert!(has(7, PropertyName::Odd));
        assert!(!has(7, PropertyName::Even));
    }

    #[test]
    fn buzz_by_last_digit_or_divisibility() {
        assert!(has(7, PropertyName::Buzz));
        assert!(has(17, PropertyName::Buzz));
        assert!(has(14, PropertyName::Buzz));
        assert!(has(0, PropertyName::Buzz));
        assert!(!has(15, PropertyName::Buzz));
    }

    #[test]
    fn duck_counts_any_zero_digit() {
        assert!(has(10, PropertyName::Duck));
        assert!(has(1_000_001, PropertyName::Duck));
        assert!(has(0, PropertyName::Duck));
        assert!(!has(7, PropertyName::Duck));
    }

    #[test]
    fn palindromes() {
        for value in [0, 5, 11, 121, 12_321, 1_000_000_001] {
            assert!(has(value, PropertyName::Palindromic), "{value}");
        }
        assert!(!has(10, PropertyName::Palindromic));
        assert!(!has(1231, PropertyName::Palindromic));
    }

    #[test]
    fn gapful_needs_three_digits() {
        assert!(has(100, PropertyName::Gapful));
        assert!(has(132, PropertyName::Gapful));
        assert!(has(1_000_000_016, PropertyName::Gapful));
        assert!(!has(99, PropertyName::Gapful));
        assert!(!has(101, PropertyName::Gapful));
        assert!(!has(77, PropertyName::Gapful));
    }

    #[test]
    fn spy_compares_digit_sum_and_product() {
        assert!(has(22, PropertyName::Spy));
        assert!(has(123, PropertyName::Spy));
        assert!(has(1124, PropertyName::Spy));
        assert!(has(0, PropertyName::Spy));
        assert!(!has(1729, PropertyName::Spy));
        assert!(!has(111, PropertyName::Spy));
    }

    #[test]
    fn squares_and_sunny_numbers() {
        for value in [0, 1, 4, 9, 16, 100] {
            assert!(has(value, PropertyName::Square), "{value}");
        }
        assert!(!has(99, PropertyName::Square));
        assert!(has(99, PropertyName::Sunny));
        assert!(has(3, PropertyName::Sunny));
        assert!(has(0, PropertyName::Sunny));
        assert!(!has(4, PropertyName::Sunny));
    }

    #[test]
    fn square_test_is_exact_near_float_precision_limits() {
        let root: u64 = 3_037_000_499;
        let square = root * root;
        assert!(has(square, PropertyName::Square));
        assert!(!has(square - 1, PropertyName::Square));
        assert!(!has(square + 1, PropertyName::Square));
        assert!(has(square - 1, PropertyName::Sunny));
    }

    #[test]
    fn jumping_numbers() {
        for value in [0, 7, 10, 12, 101, 98_765, 3_434_343] {
            assert!(has(value, PropertyName::Jumping), "{value}");
        }
        assert!(!has(11, PropertyName::Jumping));
        assert!(!has(1357, PropertyName::Jumping));
    }

    #[test]
    fn happy_and_sad_numbers() {
        for value in [1, 7, 10, 13, 19, 23, 28, 31, 32] {
            assert!(has(value, PropertyName::Happy), "{value} should be happy");
            assert!(!has(value, PropertyName::Sad));
        }
        for value in [0, 2, 3, 4, 5, 6, 8, 9, 11, 12] {
            assert!(has(value, PropertyName::Sad), "{value} should be sad");
            assert!(!has(value, PropertyName::Happy));
        }
    }

    #[test]
    fn handles_the_largest_signed_value() {
        let props = classify(i64::MAX.unsigned_abs());
        assert!(props.holds(PropertyName::Odd));
        assert_ne!(props.holds(PropertyName::Happy), props.holds(PropertyName::Sad));
    }

    #[test]
    fn catalog_is_ordered() {
        let names: Vec<&str> = catalog().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            [
                "even", "odd", "buzz", "duck", "palindromic", "gapful", "spy", "sunny", "square",
                "jumping", "happy", "sad"
            ]
        );
    }

    #[test]
    fn describe_keeps_value() {
        let classified = describe(22);
        assert_eq!(classified.value, 22);
        assert_eq!(classified.properties, classify(22));
    }
}
