//! Numeric predicates.
//!
//! The sign tests compare against `T::default()`, which is zero for every
//! primitive numeric type.

use std::ops::Rem;

/// Holds for values greater than zero.
pub fn is_positive<T: PartialOrd + Default>(value: &T) -> bool {
    *value > T::default()
}

/// Holds for values greater than or equal to zero.
pub fn is_non_negative<T: PartialOrd + Default>(value: &T) -> bool {
    *value >= T::default()
}

/// Holds for values less than zero.
pub fn is_negative<T: PartialOrd + Default>(value: &T) -> bool {
    *value < T::default()
}

/// Holds for values less than or equal to zero.
pub fn is_non_positive<T: PartialOrd + Default>(value: &T) -> bool {
    *value <= T::default()
}

/// Holds for values evenly divisible by `that`.
///
/// Nothing is a multiple of zero, so `multiple_of(0)` never holds. This
/// also keeps integer division by zero from panicking.
///
/// # Examples
///
/// ```rust
/// use perlica::predicate::number::multiple_of;
///
/// assert!(multiple_of(3)(&9));
/// assert!(!multiple_of(3)(&10));
/// assert!(!multiple_of(0)(&0));
/// ```
pub fn multiple_of<T>(that: T) -> impl Fn(&T) -> bool
where
    T: Rem<Output = T> + PartialEq + Default + Copy,
{
    move |value| that != T::default() && *value % that == T::default()
}

/// Holds for values that are neither infinite nor NaN.
#[must_use]
pub fn is_finite(value: &f64) -> bool {
    value.is_finite()
}

/// Holds for finite values with no fractional part.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_integer(value: &f64) -> bool {
    value.is_finite() && value.trunc() == *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true, true, false, false)]
    #[case(0, false, true, false, true)]
    #[case(-1, false, false, true, true)]
    fn test_sign_predicates(
        #[case] input: i32,
        #[case] positive: bool,
        #[case] non_negative: bool,
        #[case] negative: bool,
        #[case] non_positive: bool,
    ) {
        assert_eq!(is_positive(&input), positive);
        assert_eq!(is_non_negative(&input), non_negative);
        assert_eq!(is_negative(&input), negative);
        assert_eq!(is_non_positive(&input), non_positive);
    }

    #[rstest]
    #[case(2.0, true)]
    #[case(2.5, false)]
    #[case(f64::INFINITY, false)]
    #[case(f64::NAN, false)]
    fn test_is_integer(#[case] input: f64, #[case] expected: bool) {
        assert_eq!(is_integer(&input), expected);
    }

    #[rstest]
    fn test_multiple_of_zero_never_holds() {
        assert!(!multiple_of(0)(&5));
        assert!(multiple_of(2.5)(&5.0));
    }
}
