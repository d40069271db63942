//! The short-circuiting bind protocol.
//!
//! A step sequence is expressed as a [`Generator`]: each time it is resumed
//! it either yields the next step (an [`Option`] or a [`Result`]) or returns
//! its final value. [`run`] drives such a generator:
//!
//! 1. The generator is started with [`Resume::Start`].
//! 2. A yielded step is inspected. On `Some`/`Ok` the generator is resumed
//!    with the unwrapped payload. On `None`/`Err` the evaluation stops and
//!    that exact failure becomes the outcome; the generator is never resumed
//!    again.
//! 3. A returned value is wrapped in `Some`/`Ok`.
//!
//! The loop is written once over [`ShortCircuit`] and exposed for each type
//! as [`option::bind`] and [`result::bind`].
//!
//! # Examples
//!
//! ```rust
//! use perlica::bind::{self, Resume, Step};
//! use perlica::result::{self, Result};
//!
//! let mut total = 0;
//! let outcome: Result<i32, &str> = result::bind(bind::from_fn(move |input| match input {
//!     Resume::Start => Step::Yield(result::ok(1)),
//!     Resume::With(value) if total == 0 => {
//!         total += value;
//!         Step::Yield(result::ok(41))
//!     }
//!     Resume::With(value) => Step::Return(total + value),
//! }));
//!
//! assert_eq!(outcome, result::ok(42));
//! ```
//!
//! [`Option`]: crate::option::Option
//! [`Result`]: crate::result::Result
//! [`option::bind`]: crate::option::bind
//! [`result::bind`]: crate::result::bind

use std::marker::PhantomData;
use std::ops::ControlFlow;

/// The state of a generator after it has been resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, R> {
    /// The generator suspended, yielding a step.
    Yield(Y),
    /// The generator completed with a final value.
    Return(R),
}

/// The input a generator is resumed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resume<I> {
    /// The first resumption; nothing has been yielded yet.
    Start,
    /// The unwrapped payload of the previously yielded step.
    With(I),
}

/// A resumable step sequence.
///
/// `Input` is the type the generator is resumed with after a successful
/// step, `Yield` the type of each step, and `Return` the type of the final
/// value.
pub trait Generator {
    /// The value passed back in after a successful step.
    type Input;
    /// The step type.
    type Yield;
    /// The final value type.
    type Return;

    /// Advances the generator.
    fn resume(&mut self, input: Resume<Self::Input>) -> Step<Self::Yield, Self::Return>;
}

/// A generator backed by a closure. Created by [`from_fn`].
pub struct FromFn<F, I, Y, R> {
    function: F,
    marker: PhantomData<fn(Resume<I>) -> Step<Y, R>>,
}

impl<F, I, Y, R> std::fmt::Debug for FromFn<F, I, Y, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Builds a [`Generator`] from a closure.
///
/// The closure receives [`Resume::Start`] on the first call and
/// [`Resume::With`] on every later call. Any state the sequence needs is
/// captured by the closure.
pub const fn from_fn<I, Y, R, F>(function: F) -> FromFn<F, I, Y, R>
where
    F: FnMut(Resume<I>) -> Step<Y, R>,
{
    FromFn {
        function,
        marker: PhantomData,
    }
}

impl<I, Y, R, F> Generator for FromFn<F, I, Y, R>
where
    F: FnMut(Resume<I>) -> Step<Y, R>,
{
    type Input = I;
    type Yield = Y;
    type Return = R;

    fn resume(&mut self, input: Resume<I>) -> Step<Y, R> {
        (self.function)(input)
    }
}

/// A two-variant type whose failure case short-circuits a step sequence.
///
/// Implemented by [`Option`](crate::option::Option) and
/// [`Result`](crate::result::Result).
pub trait ShortCircuit: Sized {
    /// The payload of the success case.
    type Output;
    /// Whatever the failure case carries (`()` for `None`, `E` for `Err`).
    type Residual;
    /// The same type constructor applied to another success type.
    type Rebind<R>;

    /// Splits the value into its success payload or its failure residual.
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output>;

    /// Rebuilds the failure case from its residual.
    fn from_residual<R>(residual: Self::Residual) -> Self::Rebind<R>;

    /// Wraps a value in the success case.
    fn from_output<R>(output: R) -> Self::Rebind<R>;
}

/// The outcome type of driving `G` to completion.
pub type Outcome<G> =
    <<G as Generator>::Yield as ShortCircuit>::Rebind<<G as Generator>::Return>;

/// Drives `generator` until it returns or yields a failed step.
///
/// Once a failed step is seen the generator is dropped without being
/// resumed, so no later step is ever constructed.
pub fn run<G>(mut generator: G) -> Outcome<G>
where
    G: Generator,
    G::Yield: ShortCircuit<Output = G::Input>,
{
    let mut state = generator.resume(Resume::Start);
    let mut completed_steps: usize = 0;

    loop {
        match state {
            Step::Return(value) => return <G::Yield as ShortCircuit>::from_output(value),
            Step::Yield(step) => match step.branch() {
                ControlFlow::Continue(value) => {
                    completed_steps += 1;
                    state = generator.resume(Resume::With(value));
                }
                ControlFlow::Break(residual) => {
                    tracing::trace!(completed_steps, "bind short-circuited on a failed step");
                    return <G::Yield as ShortCircuit>::from_residual(residual);
                }
            },
        }
    }
}
