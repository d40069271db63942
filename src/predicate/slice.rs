//! Slice predicates.

/// Holds for empty slices.
pub fn is_empty<T>(values: &[T]) -> bool {
    values.is_empty()
}

/// Holds for slices with at least one element.
pub fn is_non_empty<T>(values: &[T]) -> bool {
    !values.is_empty()
}

/// Holds for slices of at most `count` elements.
pub fn max<T>(count: usize) -> impl Fn(&[T]) -> bool {
    move |values| values.len() <= count
}

/// Holds for slices of at least `count` elements.
pub fn min<T>(count: usize) -> impl Fn(&[T]) -> bool {
    move |values| values.len() >= count
}

/// Holds for slices of exactly `count` elements.
pub fn len<T>(count: usize) -> impl Fn(&[T]) -> bool {
    move |values| values.len() == count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], true)]
    #[case(&[1, 2], false)]
    fn test_is_empty(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(is_empty(input), expected);
        assert_eq!(is_non_empty(input), !expected);
    }

    #[rstest]
    fn test_length_bounds() {
        let values = [1, 2, 3];
        assert!(max::<i32>(3)(&values[..]));
        assert!(!max::<i32>(2)(&values[..]));
        assert!(min::<i32>(3)(&values[..]));
        assert!(len::<i32>(3)(&values[..]));
        assert!(!len::<i32>(4)(&values[..]));
    }
}
