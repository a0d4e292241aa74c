use anum_classifier::{catalog, classify};
use anum_domain::{PropertyName, PropertyToken};
use proptest::prelude::*;

const UPPER: u64 = 1_000_000_000_000_000;

fn digits(value: u64) -> Vec<u64> {
    value.to_string().bytes().map(|b| u64::from(b - b'0')).collect()
}

proptest! {
    #[test]
    fn even_and_odd_partition_the_naturals(value in 0..=UPPER) {
        let props = classify(value);
        prop_assert_ne!(props.holds(PropertyName::Even), props.holds(PropertyName::Odd));
        prop_assert_eq!(props.holds(PropertyName::Even), value % 2 == 0);
    }

    #[test]
    fn happy_and_sad_partition_the_naturals(value in 0..=UPPER) {
        let props = classify(value);
        prop_assert_ne!(props.holds(PropertyName::Happy), props.holds(PropertyName::Sad));
    }

    #[test]
    fn square_matches_integer_root(value in 0..=UPPER) {
        let root = value.isqrt();
        prop_assert_eq!(classify(value).holds(PropertyName::Square), root * root == value);
    }

    #[test]
    fn squares_are_recognised(root in 0..=1_000_000_000u64) {
        let props = classify(root * root);
        prop_assert!(props.holds(PropertyName::Square));
        prop_assert!(!classify(root * root + 2 * root).holds(PropertyName::Square) || root == 0);
    }

    #[test]
    fn sunny_means_successor_is_square(value in 0..=UPPER) {
        let next = value + 1;
        let root = next.isqrt();
        prop_assert_eq!(classify(value).holds(PropertyName::Sunny), root * root == next);
    }

    #[test]
    fn digit_properties_match_decimal_text(value in 0..=UPPER) {
        let props = classify(value);
        let text = value.to_string();
        let d = digits(value);

        prop_assert_eq!(props.holds(PropertyName::Duck), text.contains('0'));
        prop_assert_eq!(
            props.holds(PropertyName::Palindromic),
            text.chars().rev().collect::<String>() == text
        );
        prop_assert_eq!(
            props.holds(PropertyName::Spy),
            d.iter().sum::<u64>() == d.iter().product::<u64>()
        );
        prop_assert_eq!(
            props.holds(PropertyName::Jumping),
            d.windows(2).all(|w| w[0].abs_diff(w[1]) == 1)
        );
        prop_assert_eq!(
            props.holds(PropertyName::Buzz),
            text.ends_with('7') || value % 7 == 0
        );
    }

    #[test]
    fn gapful_matches_first_and_last_digit(value in 0..=UPPER) {
        let d = digits(value);
        let expected = d.len() >= 3 && value % (d[0] * 10 + d[d.len() - 1]) == 0;
        prop_assert_eq!(classify(value).holds(PropertyName::Gapful), expected);
    }

    #[test]
    fn negated_token_is_the_complement(value in 0..=UPPER, index in 0..12usize) {
        let props = classify(value);
        let name = catalog()[index];
        prop_assert_ne!(
            props.satisfies(PropertyToken::holds(name)),
            props.satisfies(PropertyToken::not(name))
        );
    }

    #[test]
    fn classification_is_deterministic(value in any::<u64>()) {
        prop_assert_eq!(classify(value), classify(value));
    }
}

#[test]
fn known_happy_numbers_below_fifty() {
    let happy: Vec<u64> = (1..50).filter(|&n| classify(n).holds(PropertyName::Happy)).collect();
    assert_eq!(happy, [1, 7, 10, 13, 19, 23, 28, 31, 32, 44, 49]);
}

#[test]
fn reference_examples() {
    assert!(classify(22).holds(PropertyName::Spy));
    assert!(!classify(1729).holds(PropertyName::Spy));
    assert!(classify(10).holds(PropertyName::Duck));
    assert!(!classify(7).holds(PropertyName::Duck));
    assert!(classify(1_000_000_016).holds(PropertyName::Gapful));
}
