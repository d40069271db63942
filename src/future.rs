//! Future algebra - a [`Result`] that is not available yet.
//!
//! [`Future<T, E>`] wraps a pending computation that settles to exactly one
//! `Result<T, E>`. Every [`Result`] combinator has a counterpart here with
//! the same case semantics; it runs once the underlying result is available.
//! Terminal operations such as [`Future::unwrap`] or [`Future::is_ok`] are
//! `async` and resolve after the underlying result does.
//!
//! # Settlement
//!
//! A `Future` is a shared handle. Cloning it adds another observer of the same
//! computation: the computation is polled once, and every observer (including
//! concurrent ones) receives a clone of the same settled `Result`. This is
//! why `T` and `E` must implement [`Payload`].
//!
//! Nothing runs until the `Future` (or one of its clones, or a future derived
//! from it) is awaited. There is no cancellation: dropping every observer
//! simply stops polling.
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use perlica::future;
//! use perlica::result;
//!
//! let value = future::future(result::ok::<i32, String>(20))
//!     .map(|x| x + 1)
//!     .and_then(|x| future::future(result::ok(x * 2)));
//! assert_eq!(block_on(value), result::ok(42));
//! ```

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::PanicPayload;
use crate::option::Option;
use crate::result::Result;

/// Bounds required of a future's success and error types.
///
/// A settled result is cloned out to every observer, possibly on different
/// threads.
pub trait Payload: Clone + Send + Sync + 'static {}

impl<A> Payload for A where A: Clone + Send + Sync + 'static {}

/// A pending computation that settles to a `Result<T, E>`.
///
/// `Future` implements [`std::future::Future`], so it can be awaited
/// directly to obtain the settled [`Result`].
pub struct Future<T, E> {
    inner: Shared<BoxFuture<'static, Result<T, E>>>,
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps an already known `result`.
pub fn future<T: Payload, E: Payload>(result: Result<T, E>) -> Future<T, E> {
    Future::ready(result)
}

/// Runs `task` on first poll and captures its outcome: `Ok` of a
/// successful value, `Err` of the failure.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use perlica::future;
///
/// let fetched = future::try_task(|| async { "body".parse::<i32>().map_err(|e| e.to_string()) });
/// assert!(block_on(fetched.is_err()));
/// ```
pub fn try_task<T, E, F, P>(task: F) -> Future<T, E>
where
    T: Payload,
    E: Payload,
    F: FnOnce() -> P + Send + 'static,
    P: std::future::Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    Future::pending(async move { capture(task().await) })
}

/// Captures the outcome of an externally created pending value.
pub fn try_promise<T, E, P>(promise: P) -> Future<T, E>
where
    T: Payload,
    E: Payload,
    P: std::future::Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    Future::pending(promise.map(capture))
}

fn capture<T, E>(outcome: std::result::Result<T, E>) -> Result<T, E> {
    if outcome.is_err() {
        tracing::debug!("future captured a rejected task");
    }
    Result::from(outcome)
}

impl<T: Payload, E: Payload> Future<T, E> {
    /// Creates a future that is already settled to `result`.
    pub fn ready(result: Result<T, E>) -> Self {
        Self::pending(futures::future::ready(result))
    }

    /// Wraps a native future that produces a [`Result`].
    pub fn pending<P>(future: P) -> Self
    where
        P: std::future::Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Returns the settled result without waiting, if it is available.
    ///
    /// Returns `None` until some observer has driven the computation to
    /// completion.
    pub fn peek(&self) -> Option<Result<T, E>> {
        Option::from(self.inner.peek().cloned())
    }
}

impl<T: Payload> Future<T, PanicPayload> {
    /// Runs `future`, capturing a panic raised while polling it as
    /// `Err(PanicPayload)`.
    pub fn catch_unwind<P>(future: P) -> Self
    where
        P: std::future::Future<Output = T> + Send + 'static,
    {
        Self::pending(AssertUnwindSafe(future).catch_unwind().map(|outcome| match outcome {
            Ok(value) => Result::Ok(value),
            Err(payload) => {
                let payload = PanicPayload::from(payload);
                tracing::debug!(message = payload.message(), "future absorbed a panic");
                Result::Err(payload)
            }
        }))
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T: Payload, E: Payload> std::future::Future for Future<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Future<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Future").finish_non_exhaustive()
    }
}

impl<T: Payload, E: Payload> From<Result<T, E>> for Future<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::ready(result)
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<T: Payload, E: Payload> Future<T, E> {
    /// Continues into `other` once this settles to `Ok`; an `Err` is passed
    /// through and `other` is never polled.
    #[must_use]
    pub fn and<U: Payload>(self, other: Future<U, E>) -> Future<U, E> {
        Future::pending(async move { self.await.and_future(other).await })
    }

    /// Continues into `function(value)` once this settles to `Ok`.
    ///
    /// `function` is not called on `Err`.
    pub fn and_then<U, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        F: FnOnce(T) -> Future<U, E> + Send + 'static,
    {
        Future::pending(async move { self.await.and_then_future(function).await })
    }

    /// Continues into an already known `result` once this settles to `Ok`.
    #[must_use]
    pub fn and_result<U: Payload>(self, result: Result<U, E>) -> Future<U, E> {
        self.and(Future::ready(result))
    }

    /// Continues into the result of `function(value)` once this settles to
    /// `Ok`.
    pub fn and_then_result<U, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        self.and_then(move |value| Future::ready(function(value)))
    }

    /// Continues into `promise` once this settles to `Ok`.
    pub fn and_promise<U, P>(self, promise: P) -> Future<U, E>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<U, E>> + Send + 'static,
    {
        Future::pending(async move { self.await.and_promise(promise).await })
    }

    /// Continues into the promise built by `function(value)` once this
    /// settles to `Ok`.
    pub fn and_then_promise<U, P, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<U, E>> + Send + 'static,
        F: FnOnce(T) -> P + Send + 'static,
    {
        Future::pending(async move { self.await.and_then_promise(function).await })
    }

    /// Maps the error through `function`, as [`Result::or`] does.
    pub fn or<U, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        F: FnOnce(E) -> U + Send + 'static,
    {
        Future::pending(async move { self.await.or(function) })
    }

    /// Recovers into `other` once this settles to `Err`.
    #[must_use]
    pub fn or_future<U: Payload>(self, other: Future<T, U>) -> Future<T, U> {
        Future::pending(async move { self.await.or_future(other).await })
    }

    /// Recovers into `function(error)` once this settles to `Err`.
    ///
    /// `function` is not called on `Ok`.
    pub fn or_else<U, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        F: FnOnce(E) -> Future<T, U> + Send + 'static,
    {
        Future::pending(async move { self.await.or_else_future(function).await })
    }

    /// Recovers into an already known `result` once this settles to `Err`.
    #[must_use]
    pub fn or_result<U: Payload>(self, result: Result<T, U>) -> Future<T, U> {
        self.or_future(Future::ready(result))
    }

    /// Recovers into the result of `function(error)`.
    pub fn or_else_result<U, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        F: FnOnce(E) -> Result<T, U> + Send + 'static,
    {
        self.or_else(move |error| Future::ready(function(error)))
    }

    /// Recovers into `promise` once this settles to `Err`.
    pub fn or_promise<U, P>(self, promise: P) -> Future<T, U>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<T, U>> + Send + 'static,
    {
        Future::pending(async move { self.await.or_promise(promise).await })
    }

    /// Recovers into the promise built by `function(error)`.
    pub fn or_else_promise<U, P, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        P: std::future::Future<Output = std::result::Result<T, U>> + Send + 'static,
        F: FnOnce(E) -> P + Send + 'static,
    {
        Future::pending(async move { self.await.or_else_promise(function).await })
    }

    /// Maps the success value with `function`.
    pub fn map<U, F>(self, function: F) -> Future<U, E>
    where
        U: Payload,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Future::pending(async move { self.await.map(function) })
    }

    /// Maps the error value with `function`.
    pub fn map_err<U, F>(self, function: F) -> Future<T, U>
    where
        U: Payload,
        F: FnOnce(E) -> U + Send + 'static,
    {
        Future::pending(async move { self.await.map_err(function) })
    }

    /// Calls `function` with the success value once settled.
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self::pending(async move { self.await.inspect(function) })
    }

    /// Calls `function` with the error value once settled.
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self::pending(async move { self.await.inspect_err(function) })
    }

    /// Settles to the same result, but no earlier than `delay` after the
    /// returned future is first polled.
    ///
    /// The delay and the underlying computation run concurrently. Requires a
    /// tokio runtime with the time driver enabled.
    #[must_use]
    pub fn sleep(self, delay: Duration) -> Self {
        Self::pending(async move {
            tracing::trace!(?delay, "future sleeping before settlement");
            let (result, ()) = tokio::join!(self, tokio::time::sleep(delay));
            result
        })
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Resolves to `true` if this settles to `Ok`.
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    /// Resolves to `true` if this settles to `Err`.
    pub async fn is_err(self) -> bool {
        self.await.is_err()
    }

    /// Resolves to `true` if this settles to `Ok` satisfying `predicate`.
    pub async fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        self.await.is_ok_and(predicate)
    }

    /// Resolves to `true` if this settles to `Err` satisfying `predicate`.
    pub async fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        self.await.is_err_and(predicate)
    }

    /// Resolves to the success value as an [`Option`].
    pub async fn ok(self) -> Option<T> {
        self.await.ok()
    }

    /// Resolves to the error value as an [`Option`].
    pub async fn err(self) -> Option<E> {
        self.await.err()
    }

    /// Resolves to `function(value)`, or `default` on `Err`.
    pub async fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_or(default, function)
    }

    /// Resolves to `function(value)`, or `default(error)` on `Err`.
    pub async fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.await.map_or_else(default, function)
    }

    /// Resolves to the success value.
    ///
    /// # Panics
    ///
    /// Panics as [`Result::unwrap`] does if this settles to `Err`.
    pub async fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        self.await.unwrap()
    }

    /// Resolves to the error value.
    ///
    /// # Panics
    ///
    /// Panics as [`Result::unwrap_err`] does if this settles to `Ok`.
    pub async fn unwrap_err(self) -> E
    where
        T: fmt::Display,
    {
        self.await.unwrap_err()
    }

    /// Resolves to the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this settles to `Err`.
    pub async fn expect(self, message: &str) -> T {
        self.await.expect(message)
    }

    /// Resolves to the error value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this settles to `Ok`.
    pub async fn expect_err(self, message: &str) -> E {
        self.await.expect_err(message)
    }

    /// Resolves to the success value or `default`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves to the success value or `function(error)`.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(function)
    }
}

impl<T: Payload, E: Payload> Future<Future<T, E>, E> {
    /// Removes one level of nesting.
    #[must_use]
    pub fn flatten(self) -> Future<T, E> {
        self.and_then(|inner| inner)
    }
}
