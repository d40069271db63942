//! Result algebra - the outcome of a fallible computation.
//!
//! [`Result<T, E>`] is a closed two-variant type: `Ok(value)` or
//! `Err(error)`. Its combinators mirror the [`Option`] algebra, carrying an
//! error payload on the failure side, and add conversions into
//! [`Option`] and (with the `async` feature) into [`Future`].
//!
//! Note that [`Result::or`] maps the error through a function, unlike
//! [`Option::or`], which supplies a fallback. [`Result::or_else`] is the
//! fallback form.
//!
//! # Examples
//!
//! ```rust
//! use perlica::result::{self, Result};
//!
//! let parsed: Result<i32, &str> = result::ok(4);
//! assert_eq!(parsed.map(|x| x * 2), result::ok(8));
//!
//! let failed: Result<i32, i32> = result::err(1);
//! assert_eq!(failed.or(|x| x + 1), result::err(2));
//! ```
//!
//! [`Future`]: crate::future::Future

use std::fmt;
use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::bind::{self, Generator, ShortCircuit};
use crate::error::{PanicPayload, UnwrapError};
use crate::option::Option;

#[cfg(feature = "async")]
use crate::future::{self, Future, Payload};

/// Either a success value (`Ok`) or an error value (`Err`).
///
/// # Examples
///
/// ```rust
/// use perlica::result::Result;
///
/// let success: Result<i32, String> = Result::Ok(3);
/// let failure: Result<i32, String> = Result::Err("bad input".to_string());
///
/// assert!(success.is_ok());
/// assert!(failure.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// The success value.
    Ok(T),
    /// The error value.
    Err(E),
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps `value` in `Ok`.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::Ok(value)
}

/// Wraps `error` in `Err`.
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result::Err(error)
}

/// Returns `Ok` of the present value, or `Err(function())` if `value` is
/// absent.
///
/// `function` is only called when `value` is absent.
///
/// # Examples
///
/// ```rust
/// use perlica::result;
///
/// assert_eq!(result::from_nullable(Some(1), || "missing"), result::ok(1));
/// assert_eq!(result::from_nullable(None::<i32>, || "missing"), result::err("missing"));
/// ```
#[inline]
pub fn from_nullable<T, E, F>(value: std::option::Option<T>, function: F) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    match value {
        Some(value) => Result::Ok(value),
        None => Result::Err(function()),
    }
}

/// Converts `option` with [`Option::ok_or`], using `function()` as the
/// error.
///
/// The error is built eagerly, even when `option` is `Some`.
#[inline]
pub fn from_option<T, E, F>(option: Option<T>, function: F) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    option.ok_or(function())
}

/// Runs `function`, returning `Ok` of its value or `Err` of the panic it
/// raised.
///
/// # Examples
///
/// ```rust
/// use perlica::result;
///
/// assert_eq!(result::try_catch(|| 4).unwrap_or(0), 4);
///
/// let caught = result::try_catch::<i32, _>(|| panic!("boom"));
/// assert_eq!(caught.unwrap_err().message(), "boom");
/// ```
pub fn try_catch<T, F>(function: F) -> Result<T, PanicPayload>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Result::Ok(value),
        Err(payload) => {
            let payload = PanicPayload::from(payload);
            tracing::debug!(message = payload.message(), "result::try_catch absorbed a panic");
            Result::Err(payload)
        }
    }
}

/// Evaluates a step sequence of results, stopping at the first `Err`.
///
/// Each `Ok` step resumes `generator` with its value. The first `Err` is
/// returned with its error unchanged and the generator is not resumed
/// again. When the generator returns, its value is wrapped in `Ok`.
pub fn bind<G, T, E>(generator: G) -> Result<G::Return, E>
where
    G: Generator<Input = T, Yield = Result<T, E>>,
{
    bind::run(generator)
}

// =============================================================================
// Variant Tests
// =============================================================================

impl<T, E> Result<T, E> {
    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns an iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        std::option::Option::from(self.as_ref().ok()).into_iter()
    }

    // =========================================================================
    // Conversion to Option
    // =========================================================================

    /// Converts to `Option<T>`, discarding the error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// Converts to `Option<E>`, discarding the success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(error) => Option::Some(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise this `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::result;
    ///
    /// assert_eq!(result::ok::<i32, _>(4).and(result::err::<i32, _>("new error")), result::err("new error"));
    /// assert_eq!(result::err::<i32, _>("old").and(result::ok::<i32, _>(4)), result::err("old"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Calls `function` with the success value, or returns this `Err`.
    ///
    /// `function` is not called on `Err`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Maps the error through `function`; `Ok` is left untouched.
    ///
    /// This is not a fallback: see [`Result::or_else`] for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::result;
    ///
    /// assert_eq!(result::err::<i32, i32>(1).or(|x| x + 1), result::err(2));
    /// assert_eq!(result::ok::<i32, i32>(1).or(|x| x + 1), result::ok(1));
    /// ```
    #[inline]
    pub fn or<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Calls `function` with the error, or returns this `Ok`.
    ///
    /// `function` is not called on `Ok`.
    #[inline]
    pub fn or_else<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(E) -> Result<T, U>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the success value with `function`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Maps the error value with `function`.
    #[inline]
    pub fn map_err<U, F>(self, function: F) -> Result<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default(error),
        }
    }

    /// Calls `function` with a reference to the success value, then returns
    /// the result unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the error, then returns the
    /// result unchanged.
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value or an [`UnwrapError::OnWrongVariant`]
    /// naming the error.
    #[inline]
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError>
    where
        E: fmt::Display,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::on_wrong_variant("unwrap", "Err", &error)),
        }
    }

    /// Returns the error value or an [`UnwrapError::OnWrongVariant`] naming
    /// the success value.
    #[inline]
    pub fn try_unwrap_err(self) -> std::result::Result<E, UnwrapError>
    where
        T: fmt::Display,
    {
        match self {
            Self::Ok(value) => Err(UnwrapError::on_wrong_variant("unwrapErr", "Ok", &value)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value or an [`UnwrapError::Expect`].
    #[inline]
    pub fn try_expect(self, message: &str) -> std::result::Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError::expect(message)),
        }
    }

    /// Returns the error value or an [`UnwrapError::Expect`].
    #[inline]
    pub fn try_expect_err(self, message: &str) -> std::result::Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError::expect(message)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`, with the message
    /// ``called `Result.unwrap()` on an `Err` value: <error>``.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use perlica::result;
    ///
    /// // panics with "called `Result.unwrap()` on an `Err` value: 1"
    /// result::err::<i32, i32>(1).unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        self.try_unwrap().unwrap_or_else(|error| error.raise())
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`, with the message
    /// ``called `Result.unwrapErr()` on an `Ok` value: <value>``.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Display,
    {
        self.try_unwrap_err().unwrap_or_else(|error| error.raise())
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        self.try_expect(message).unwrap_or_else(|error| error.raise())
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        self.try_expect_err(message).unwrap_or_else(|error| error.raise())
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or `function` applied to the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Transposes a result of an option into an option of a result.
    ///
    /// | input | output |
    /// |---|---|
    /// | `Err(e)` | `Some(Err(e))` |
    /// | `Ok(None)` | `None` |
    /// | `Ok(Some(x))` | `Some(Ok(x))` |
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Err(error) => Option::Some(Result::Err(error)),
            Self::Ok(Option::None) => Option::None,
            Self::Ok(Option::Some(value)) => Option::Some(Result::Ok(value)),
        }
    }
}

// =============================================================================
// Lifting into Future
// =============================================================================

#[cfg(feature = "async")]
impl<T, E: Payload> Result<T, E> {
    /// Continues into `other` on `Ok`; on `Err` returns an already-failed
    /// future carrying the same error.
    pub fn and_future<U: Payload>(self, other: Future<U, E>) -> Future<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => future::future(Result::Err(error)),
        }
    }

    /// Continues into `function(value)` on `Ok`; `function` is not called on
    /// `Err`.
    pub fn and_then_future<U, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        F: FnOnce(T) -> Future<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => future::future(Result::Err(error)),
        }
    }

    /// Continues into `promise` on `Ok`, capturing its outcome. On `Err` the
    /// promise is dropped without being polled.
    pub fn and_promise<U, P>(self, promise: P) -> Future<U, E>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<U, E>> + Send + 'static,
    {
        match self {
            Self::Ok(_) => future::try_promise(promise),
            Self::Err(error) => future::future(Result::Err(error)),
        }
    }

    /// Continues into the promise built by `function(value)` on `Ok`.
    pub fn and_then_promise<U, P, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<U, E>> + Send + 'static,
        F: FnOnce(T) -> P,
    {
        match self {
            Self::Ok(value) => future::try_promise(function(value)),
            Self::Err(error) => future::future(Result::Err(error)),
        }
    }
}

#[cfg(feature = "async")]
impl<T: Payload, E> Result<T, E> {
    /// Recovers into `other` on `Err`; on `Ok` returns an already-succeeded
    /// future.
    pub fn or_future<U: Payload>(self, other: Future<T, U>) -> Future<T, U> {
        match self {
            Self::Ok(value) => future::future(Result::Ok(value)),
            Self::Err(_) => other,
        }
    }

    /// Recovers into `function(error)` on `Err`; `function` is not called on
    /// `Ok`.
    pub fn or_else_future<U, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        F: FnOnce(E) -> Future<T, U>,
    {
        match self {
            Self::Ok(value) => future::future(Result::Ok(value)),
            Self::Err(error) => function(error),
        }
    }

    /// Recovers into `promise` on `Err`. On `Ok` the promise is dropped
    /// without being polled.
    pub fn or_promise<U, P>(self, promise: P) -> Future<T, U>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<T, U>> + Send + 'static,
    {
        match self {
            Self::Ok(value) => future::future(Result::Ok(value)),
            Self::Err(_) => future::try_promise(promise),
        }
    }

    /// Recovers into the promise built by `function(error)` on `Err`.
    pub fn or_else_promise<U, P, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<T, U>> + Send + 'static,
        F: FnOnce(E) -> P,
    {
        match self {
            Self::Ok(value) => future::future(Result::Ok(value)),
            Self::Err(error) => future::try_promise(function(error)),
        }
    }
}

// =============================================================================
// Short-circuit
// =============================================================================

impl<T, E> ShortCircuit for Result<T, E> {
    type Output = T;
    type Residual = E;
    type Rebind<R> = Result<R, E>;

    #[inline]
    fn branch(self) -> ControlFlow<E, T> {
        match self {
            Self::Ok(value) => ControlFlow::Continue(value),
            Self::Err(error) => ControlFlow::Break(error),
        }
    }

    #[inline]
    fn from_residual<R>(residual: E) -> Result<R, E> {
        Result::Err(residual)
    }

    #[inline]
    fn from_output<R>(output: R) -> Result<R, E> {
        Result::Ok(output)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        std::option::Option::from(self.ok()).into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
