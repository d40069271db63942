//! Option algebra - a value that is either present or absent.
//!
//! [`Option<T>`] is a closed two-variant type: `Some(value)` or `None`. Every
//! combinator consumes the option and returns a new value; an option never
//! changes variant after construction.
//!
//! The only operations that can fail are [`Option::unwrap`] and
//! [`Option::expect`], which panic on `None`. Their non-panicking forms,
//! [`Option::try_unwrap`] and [`Option::try_expect`], return an
//! [`UnwrapError`] instead.
//!
//! # Examples
//!
//! ```rust
//! use perlica::option::{self, Option};
//!
//! let doubled = option::some(21).map(|x| x * 2);
//! assert_eq!(doubled, option::some(42));
//!
//! let missing: Option<i32> = option::none();
//! assert_eq!(missing.and_then(|x| option::some(x + 1)), option::none());
//! ```

use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::bind::{self, Generator, ShortCircuit};
use crate::error::{PanicPayload, UnwrapError};
use crate::result::Result;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Examples
///
/// ```rust
/// use perlica::option::Option;
///
/// let present = Option::Some("hello");
/// let absent: Option<&str> = Option::None;
///
/// assert!(present.is_some());
/// assert!(absent.is_none());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps `value` in `Some`.
///
/// The value is wrapped unconditionally; nesting is the caller's concern.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Returns `None`.
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}

/// Converts a native optional into an [`Option`].
///
/// # Examples
///
/// ```rust
/// use perlica::option;
///
/// assert_eq!(option::from_nullable(Some(4)), option::some(4));
/// assert_eq!(option::from_nullable::<i32>(None), option::none());
/// ```
#[inline]
pub fn from_nullable<T>(value: std::option::Option<T>) -> Option<T> {
    Option::from(value)
}

/// Returns the success value of `result`, discarding any error.
///
/// Equivalent to [`Result::ok`].
#[inline]
pub fn from_result<T, E>(result: Result<T, E>) -> Option<T> {
    result.ok()
}

/// Runs `function`, returning `Some` of its value or `None` if it panics.
///
/// The panic payload is discarded.
///
/// # Examples
///
/// ```rust
/// use perlica::option;
///
/// assert_eq!(option::try_catch(|| 4), option::some(4));
/// assert_eq!(option::try_catch::<i32, _>(|| panic!("boom")), option::none());
/// ```
pub fn try_catch<T, F>(function: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Option::Some(value),
        Err(payload) => {
            let payload = PanicPayload::from(payload);
            tracing::debug!(message = payload.message(), "option::try_catch absorbed a panic");
            Option::None
        }
    }
}

/// Evaluates a step sequence of options, stopping at the first `None`.
///
/// Each `Some` step resumes `generator` with its value. The first `None`
/// becomes the result and the generator is not resumed again. When the
/// generator returns, its value is wrapped in `Some`.
///
/// # Examples
///
/// ```rust
/// use perlica::bind::{self, Resume, Step};
/// use perlica::option::{self, Option};
///
/// let outcome: Option<i32> = option::bind(bind::from_fn(|input| match input {
///     Resume::Start => Step::Yield(option::some(2)),
///     Resume::With(value) => Step::Return(value * 3),
/// }));
/// assert_eq!(outcome, option::some(6));
/// ```
pub fn bind<G, T>(generator: G) -> Option<G::Return>
where
    G: Generator<Input = T, Yield = Option<T>>,
{
    bind::run(generator)
}

// =============================================================================
// Variant Tests
// =============================================================================

impl<T> Option<T> {
    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert!(option::some(2).is_some_and(|x| x > 1));
    /// assert!(!option::some(0).is_some_and(|x| x > 1));
    /// assert!(!option::none::<i32>().is_some_and(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `None`, or if the value satisfies
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert!(option::none::<i32>().is_none_or(|x| x > 1));
    /// assert!(option::some(2).is_none_or(|x| x > 1));
    /// assert!(!option::some(0).is_none_or(|x| x > 1));
    /// ```
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // References
    // =========================================================================

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        std::option::Option::from(self.as_ref()).into_iter()
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `None` if this is `None`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert_eq!(option::some(1).and(option::some("foo")), option::some("foo"));
    /// assert_eq!(option::none::<i32>().and(option::some("foo")), option::none());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns `None` if this is `None`, otherwise calls `function` with the
    /// value and returns its result.
    ///
    /// `function` is not called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert_eq!(option::some(1).and_then(|x| option::some(x + 1)), option::some(2));
    /// assert_eq!(option::none::<i32>().and_then(|_| option::some("foo")), option::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Option::None,
        }
    }

    /// Returns this option if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns this option if it is `Some`, otherwise the result of
    /// `function`.
    ///
    /// `function` is not called on `Some`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`,
    /// otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert_eq!(option::some(2).xor(option::none()), option::some(2));
    /// assert_eq!(option::none().xor(option::some(2)), option::some(2));
    /// assert_eq!(option::some(2).xor(option::some(3)), option::none());
    /// assert_eq!(option::none::<i32>().xor(option::none()), option::none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the contained value with `function`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::None => Option::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert_eq!(option::some(4).filter(|x| x % 2 == 0), option::some(4));
    /// assert_eq!(option::some(3).filter(|x| x % 2 == 0), option::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Calls `function` with a reference to the value if `Some`, then
    /// returns the option unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Applies `function` to the value, or returns `default` on `None`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Applies `function` to the value, or calls `default` on `None`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    // =========================================================================
    // Conversion to Result
    // =========================================================================

    /// Converts `Some(x)` to `Ok(x)` and `None` to `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::{option, result};
    ///
    /// assert_eq!(option::some(1).ok_or("missing"), result::ok(1));
    /// assert_eq!(option::none::<i32>().ok_or("missing"), result::err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(error),
        }
    }

    /// Converts `Some(x)` to `Ok(x)` and `None` to `Err(function())`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(function()),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value or an [`UnwrapError::OnAbsent`].
    #[inline]
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::OnAbsent),
        }
    }

    /// Returns the contained value or an [`UnwrapError::Expect`] carrying
    /// `message`.
    #[inline]
    pub fn try_expect(self, message: &str) -> std::result::Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::expect(message)),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Option.unwrap()` on a `None` value`` if this is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use perlica::option;
    ///
    /// option::none::<i32>().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.try_unwrap().unwrap_or_else(|error| error.raise())
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        self.try_expect(message).unwrap_or_else(|error| error.raise())
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or the result of `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perlica::option;
    ///
    /// assert_eq!(option::some(option::some(1)).flatten(), option::some(1));
    /// assert_eq!(option::some(option::none::<i32>()).flatten(), option::none());
    /// assert_eq!(option::none::<perlica::Option<i32>>().flatten(), option::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

impl<T, E> Option<Result<T, E>> {
    /// Transposes an option of a result into a result of an option.
    ///
    /// | input | output |
    /// |---|---|
    /// | `None` | `Ok(None)` |
    /// | `Some(Err(e))` | `Err(e)` |
    /// | `Some(Ok(x))` | `Ok(Some(x))` |
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::None => Result::Ok(Option::None),
            Self::Some(Result::Err(error)) => Result::Err(error),
            Self::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
        }
    }
}

// =============================================================================
// Short-circuit
// =============================================================================

impl<T> ShortCircuit for Option<T> {
    type Output = T;
    type Residual = ();
    type Rebind<R> = Option<R>;

    #[inline]
    fn branch(self) -> ControlFlow<(), T> {
        match self {
            Self::Some(value) => ControlFlow::Continue(value),
            Self::None => ControlFlow::Break(()),
        }
    }

    #[inline]
    fn from_residual<R>((): ()) -> Option<R> {
        Option::None
    }

    #[inline]
    fn from_output<R>(output: R) -> Option<R> {
        Option::Some(output)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<std::option::Option<T>> for Option<T> {
    #[inline]
    fn from(value: std::option::Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        std::option::Option::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
