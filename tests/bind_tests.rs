//! Integration tests for the bind protocol and the `bind!` macro.

use perlica::bind::{self, Resume, Step};
use perlica::option::{self, Option};
use perlica::result::{self, Result};
use rstest::rstest;
use std::cell::RefCell;

// =============================================================================
// Generator-driven evaluation
// =============================================================================

#[rstest]
fn bind_stops_at_first_error_without_resuming() {
    let reached = RefCell::new(Vec::new());
    let outcome: Result<i32, String> = result::bind(bind::from_fn(|input: Resume<i32>| {
        match input {
            Resume::Start => Step::Yield(result::ok(1)),
            Resume::With(1) => {
                reached.borrow_mut().push("second");
                Step::Yield(result::err(String::from("error")))
            }
            Resume::With(_) => {
                reached.borrow_mut().push("third");
                Step::Yield(result::err(String::from("22")))
            }
        }
    }));

    assert_eq!(outcome, result::err(String::from("error")));
    assert_eq!(*reached.borrow(), vec!["second"]);
}

#[rstest]
fn bind_wraps_returned_value_in_ok() {
    let outcome: Result<i32, String> = result::bind(bind::from_fn(|input: Resume<i32>| {
        match input {
            Resume::Start => Step::Yield(result::ok(1)),
            Resume::With(value) => Step::Return(value + 1),
        }
    }));
    assert_eq!(outcome, result::ok(2));
}

#[rstest]
fn bind_over_options_propagates_none() {
    let mut steps = vec![option::some(1), option::none(), option::some(3)].into_iter();
    let mut total = 0;
    let outcome: Option<i32> = option::bind(bind::from_fn(|input: Resume<i32>| {
        if let Resume::With(value) = input {
            total += value;
        }
        steps.next().map_or(Step::Return(total), Step::Yield)
    }));
    assert_eq!(outcome, option::none());
}

#[rstest]
fn bind_over_options_sums_all_steps() {
    let mut steps = vec![option::some(1), option::some(2), option::some(3)].into_iter();
    let mut total = 0;
    let outcome: Option<i32> = option::bind(bind::from_fn(|input: Resume<i32>| {
        if let Resume::With(value) = input {
            total += value;
        }
        steps.next().map_or(Step::Return(total), Step::Yield)
    }));
    assert_eq!(outcome, option::some(6));
}

// =============================================================================
// bind! macro
// =============================================================================

struct Count {
    num: i32,
}

#[rstest]
fn bind_macro_combines_steps_of_different_types() {
    let outcome: Result<i32, String> = perlica::bind! {
        first <= result::ok(1);
        value <= result::ok(Count { num: 1 });
        result::ok(first + value.num)
    };
    assert_eq!(outcome, result::ok(2));
}

#[rstest]
fn bind_macro_never_builds_steps_after_failure() {
    fn unreachable_step() -> Result<i32, &'static str> {
        panic!("step after a failure was evaluated")
    }

    let outcome: Result<i32, &str> = perlica::bind! {
        first <= result::ok(1);
        _ <= result::err::<i32, _>("error");
        third <= unreachable_step();
        result::ok(first + third)
    };
    assert_eq!(outcome, result::err("error"));
}

#[rstest]
fn bind_macro_over_options_with_let() {
    let outcome = perlica::bind! {
        x <= option::some(3);
        let doubled = x * 2;
        y <= option::some(doubled + 1);
        option::some(y)
    };
    assert_eq!(outcome, option::some(7));
}
