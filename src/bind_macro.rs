//! `bind!` macro - do-notation over Option and Result.
//!
//! [`option::bind`](crate::option::bind) and
//! [`result::bind`](crate::result::bind) need every step of a sequence to have
//! the same type. `bind!` lifts that restriction: each `pattern <= step;`
//! line may yield a different success type, as long as the failure side
//! (`None`, or `Err` of one error type) agrees.
//!
//! # Syntax
//!
//! ```text
//! bind! {
//!     pattern <= step_expression;   // Some/Ok: bind the payload, None/Err: stop
//!     let pattern = expression;     // plain binding
//!     final_expression              // an Option or Result
//! }
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= step; rest` expands to `step.and_then(move |pattern| rest)`.
//! A failed step therefore never evaluates (or even constructs) the steps
//! after it.

/// Do-notation for [`Option`](crate::option::Option) and
/// [`Result`](crate::result::Result).
///
/// # Examples
///
/// ```rust
/// use perlica::bind;
/// use perlica::result::{self, Result};
///
/// struct Count {
///     num: i32,
/// }
///
/// let outcome: Result<i32, &str> = bind! {
///     first <= result::ok(1);
///     value <= result::ok(Count { num: 1 });
///     result::ok(first + value.num)
/// };
/// assert_eq!(outcome, result::ok(2));
///
/// let outcome: Result<i32, &str> = bind! {
///     first <= result::ok(1);
///     _ <= result::err::<i32, _>("error");
///     result::ok(first)
/// };
/// assert_eq!(outcome, result::err("error"));
/// ```
#[macro_export]
macro_rules! bind {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind: pattern <= step; rest
    // ==========================================================================

    ($pattern:ident <= $step:expr ; $($rest:tt)+) => {
        $step.and_then(move |$pattern| {
            $crate::bind!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $step:expr ; $($rest:tt)+) => {
        $step.and_then(move |($($pattern)*)| {
            $crate::bind!($($rest)+)
        })
    };

    (_ <= $step:expr ; $($rest:tt)+) => {
        $step.and_then(move |_| {
            $crate::bind!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::bind!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::bind!($($rest)+)
        }
    };
}
