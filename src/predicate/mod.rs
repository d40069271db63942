//! Predicate combinators.
//!
//! A predicate is any `Fn(&T) -> bool`. This module builds new predicates by
//! closing over existing ones; none of them keep state. The submodules hold
//! predicates specific to strings, numbers and slices.
//!
//! The Option/Result/Future algebras do not depend on this module.
//!
//! # Examples
//!
//! ```rust
//! use perlica::predicate::{and, gt, lt, not};
//!
//! let between_5_and_10 = and(gt(5), lt(10));
//! assert!(between_5_and_10(&7));
//! assert!(!between_5_and_10(&12));
//!
//! let outside = not(between_5_and_10);
//! assert!(outside(&2));
//! ```

pub mod number;
pub mod slice;
pub mod string;

/// A boolean test on values of type `T`.
///
/// Implemented for every `Fn(&T) -> bool`.
pub trait Predicate<T: ?Sized>: Fn(&T) -> bool {}

impl<T: ?Sized, F> Predicate<T> for F where F: Fn(&T) -> bool {}

/// A type-erased predicate, for collections of differently-typed closures.
pub type BoxPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Boxes `predicate` into a [`BoxPredicate`].
pub fn boxed<T, P>(predicate: P) -> BoxPredicate<T>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Box::new(predicate)
}

// =============================================================================
// Logical Combinators
// =============================================================================

/// Negates `predicate`.
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Predicate<T>,
{
    move |value| !predicate(value)
}

/// Holds when both `first` and `second` hold. `second` is not evaluated if
/// `first` fails.
pub fn and<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    move |value| first(value) && second(value)
}

/// Holds when at least one of `first` and `second` holds. `second` is not
/// evaluated if `first` holds.
pub fn or<T, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    move |value| first(value) || second(value)
}

/// Holds when every predicate holds. An empty collection always holds.
///
/// # Examples
///
/// ```rust
/// use perlica::predicate::{all, boxed, gt, lt};
///
/// let in_range = all([boxed(gt(5)), boxed(lt(10))]);
/// assert!(in_range(&7));
/// assert!(!in_range(&2));
/// ```
pub fn all<T, I>(predicates: I) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Predicate<T>,
{
    let predicates: Vec<I::Item> = predicates.into_iter().collect();
    move |value| predicates.iter().all(|predicate| predicate(value))
}

/// Holds when at least one predicate holds. An empty collection never
/// holds.
pub fn any<T, I>(predicates: I) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Predicate<T>,
{
    let predicates: Vec<I::Item> = predicates.into_iter().collect();
    move |value| predicates.iter().any(|predicate| predicate(value))
}

// =============================================================================
// Comparison Builders
// =============================================================================

/// Holds for values equal to `that`.
pub fn eq<T: PartialEq>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value == that
}

/// Holds for values not equal to `that`.
pub fn ne<T: PartialEq>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value != that
}

/// Holds for values less than `that`.
pub fn lt<T: PartialOrd>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value < that
}

/// Holds for values greater than `that`.
pub fn gt<T: PartialOrd>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value > that
}

/// Holds for values less than or equal to `that`.
pub fn le<T: PartialOrd>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value <= that
}

/// Holds for values greater than or equal to `that`.
pub fn ge<T: PartialOrd>(that: T) -> impl Fn(&T) -> bool {
    move |value| *value >= that
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4, true)]
    #[case(5, false)]
    fn test_not_negates(#[case] input: i32, #[case] expected: bool) {
        let is_not_five = not(eq(5));
        assert_eq!(is_not_five(&input), expected);
    }

    #[rstest]
    fn test_empty_all_and_any() {
        let nothing: Vec<BoxPredicate<i32>> = Vec::new();
        assert!(all(nothing)(&1));
        let nothing: Vec<BoxPredicate<i32>> = Vec::new();
        assert!(!any(nothing)(&1));
    }

    #[rstest]
    fn test_and_short_circuits() {
        let second_called = std::cell::Cell::new(false);
        let both = and(|_: &i32| false, |_: &i32| {
            second_called.set(true);
            true
        });
        assert!(!both(&1));
        assert!(!second_called.get());
    }
}
