//! Integration tests for the Option algebra.
//!
//! Covers construction, the combinator vocabulary, the unwrap boundary and
//! conversions to and from the Result algebra.

use perlica::option::{self, Option};
use perlica::result::{self, Result};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn option_some_is_some() {
    let value = option::some(42);
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn option_none_is_none() {
    let value: Option<i32> = option::none();
    assert!(value.is_none());
    assert!(!value.is_some());
}

#[rstest]
#[case(Some(3), option::some(3))]
#[case(None, option::none())]
fn option_from_nullable(#[case] input: std::option::Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(option::from_nullable(input), expected);
}

#[rstest]
fn option_from_result_drops_error() {
    assert_eq!(option::from_result(result::ok::<i32, &str>(1)), option::some(1));
    assert_eq!(option::from_result(result::err::<i32, &str>("gone")), option::none());
}

#[rstest]
fn option_try_catch_absorbs_panic() {
    assert_eq!(option::try_catch(|| 5), option::some(5));
    let caught: Option<i32> = option::try_catch(|| panic!("boom"));
    assert_eq!(caught, option::none());
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn option_and_then_on_some() {
    assert_eq!(option::some(1).and_then(|x| option::some(x + 1)), option::some(2));
}

#[rstest]
fn option_and_then_on_none() {
    let absent: Option<i32> = option::none();
    assert_eq!(absent.and_then(|_| option::some("foo")), option::none());
}

#[rstest]
#[case(option::some(1), option::some(2), option::some(2))]
#[case(option::some(1), option::none(), option::none())]
#[case(option::none(), option::some(2), option::none())]
fn option_and(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(first.and(second), expected);
}

#[rstest]
#[case(option::some(1), option::some(2), option::some(1))]
#[case(option::none(), option::some(2), option::some(2))]
#[case(option::none(), option::none(), option::none())]
fn option_or_is_a_fallback(
    #[case] first: Option<i32>,
    #[case] second: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(first.or(second), expected);
}

#[rstest]
fn option_or_else_is_lazy() {
    let called = Cell::new(false);
    let kept = option::some(1).or_else(|| {
        called.set(true);
        option::some(2)
    });
    assert_eq!(kept, option::some(1));
    assert!(!called.get());
}

#[rstest]
#[case(option::some(1), option::none(), option::some(1))]
#[case(option::none(), option::some(2), option::some(2))]
#[case(option::some(1), option::some(2), option::none())]
#[case(option::none(), option::none(), option::none())]
fn option_xor(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(first.xor(second), expected);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn option_map() {
    assert_eq!(option::some(1).map(|x| x + 1), option::some(2));
    assert_eq!(option::none::<i32>().map(|x| x + 1), option::none());
}

#[rstest]
#[case(option::some(4), option::some(4))]
#[case(option::some(3), option::none())]
#[case(option::none(), option::none())]
fn option_filter(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
    assert_eq!(input.filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn option_map_or_and_map_or_else() {
    assert_eq!(option::some(2).map_or(0, |x| x * 10), 20);
    assert_eq!(option::none::<i32>().map_or(0, |x| x * 10), 0);
    assert_eq!(option::none::<i32>().map_or_else(|| -1, |x| x * 10), -1);
}

#[rstest]
fn option_inspect_sees_payload_only_on_some() {
    let seen = Cell::new(0);
    let value = option::some(7).inspect(|x| seen.set(*x));
    assert_eq!(value, option::some(7));
    assert_eq!(seen.get(), 7);

    let _ = option::none::<i32>().inspect(|_| seen.set(-1));
    assert_eq!(seen.get(), 7);
}

#[rstest]
fn option_flatten() {
    assert_eq!(option::some(option::some(1)).flatten(), option::some(1));
    assert_eq!(option::some(option::none::<i32>()).flatten(), option::none());
}

// =============================================================================
// Conversion to Result
// =============================================================================

#[rstest]
fn option_ok_or() {
    assert_eq!(option::some(1).ok_or("missing"), result::ok(1));
    assert_eq!(option::none::<i32>().ok_or("missing"), result::err("missing"));
}

#[rstest]
fn option_ok_or_else_is_lazy() {
    let called = Cell::new(false);
    let value: Result<i32, &str> = option::some(1).ok_or_else(|| {
        called.set(true);
        "missing"
    });
    assert_eq!(value, result::ok(1));
    assert!(!called.get());
}

#[rstest]
fn option_transpose() {
    let value: Option<Result<i32, &str>> = option::some(result::ok(1));
    assert_eq!(value.transpose(), result::ok(option::some(1)));

    let value: Option<Result<i32, &str>> = option::some(result::err("bad"));
    assert_eq!(value.transpose(), result::err("bad"));

    let value: Option<Result<i32, &str>> = option::none();
    assert_eq!(value.transpose(), result::ok(option::none()));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn option_unwrap_or_variants() {
    assert_eq!(option::some(1).unwrap_or(9), 1);
    assert_eq!(option::none().unwrap_or(9), 9);
    assert_eq!(option::none().unwrap_or_else(|| 8), 8);
}

#[rstest]
#[should_panic(expected = "called `Option.unwrap()` on a `None` value")]
fn option_unwrap_on_none_panics() {
    option::none::<i32>().unwrap();
}

#[rstest]
#[should_panic(expected = "custom message")]
fn option_expect_on_none_panics_with_message() {
    option::none::<i32>().expect("custom message");
}

#[rstest]
fn option_try_unwrap_reports_error() {
    let error = option::none::<i32>().try_unwrap().unwrap_err();
    assert_eq!(error.to_string(), "called `Option.unwrap()` on a `None` value");
    assert_eq!(option::some(3).try_unwrap().ok(), Some(3));
}

// =============================================================================
// Iteration and std interop
// =============================================================================

#[rstest]
fn option_iterates_zero_or_one_times() {
    assert_eq!(option::some(5).into_iter().collect::<Vec<_>>(), vec![5]);
    assert_eq!(option::none::<i32>().into_iter().count(), 0);

    let value = option::some(String::from("x"));
    for item in &value {
        assert_eq!(item, "x");
    }
}

#[rstest]
fn option_std_round_trip() {
    let native: std::option::Option<i32> = option::some(1).into();
    assert_eq!(native, Some(1));
    assert_eq!(Option::from(native), option::some(1));
}
