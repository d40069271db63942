//! Error types raised at the unwrap boundary.
//!
//! The algebras in this crate never fail on their own: absence and `Err`
//! payloads are ordinary values. The only raised failures are the ones a
//! caller asks for by unwrapping the wrong variant, and they are described by
//! [`UnwrapError`]. A panic absorbed by one of the `try_catch` helpers is kept
//! as a [`PanicPayload`].

use std::any::Any;
use std::fmt;

use thiserror::Error;

/// Describes why an unwrap-family call could not produce a value.
///
/// The `Display` text of each variant is exactly the panic message used by
/// the corresponding panicking method.
///
/// # Examples
///
/// ```rust
/// use perlica::error::UnwrapError;
///
/// assert_eq!(
///     UnwrapError::OnAbsent.to_string(),
///     "called `Option.unwrap()` on a `None` value"
/// );
///
/// let error = UnwrapError::on_wrong_variant("unwrap", "Err", &1);
/// assert_eq!(
///     error.to_string(),
///     "called `Result.unwrap()` on an `Err` value: 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    /// `Option::unwrap` was called on `None`.
    #[error("called `Option.unwrap()` on a `None` value")]
    OnAbsent,
    /// A `Result` was unwrapped on the variant that does not hold the
    /// requested payload.
    #[error("called `Result.{method}()` on an `{variant}` value: {payload}")]
    OnWrongVariant {
        /// The method that was called (`unwrap` or `unwrapErr`).
        method: &'static str,
        /// The variant that was actually present (`Ok` or `Err`).
        variant: &'static str,
        /// The offending payload rendered through `Display`.
        payload: String,
    },
    /// An `expect`-family call failed; carries the caller's message.
    #[error("{0}")]
    Expect(String),
}

impl UnwrapError {
    /// Builds an [`UnwrapError::OnWrongVariant`] from the offending payload.
    pub fn on_wrong_variant<P>(method: &'static str, variant: &'static str, payload: &P) -> Self
    where
        P: fmt::Display + ?Sized,
    {
        Self::OnWrongVariant {
            method,
            variant,
            payload: payload.to_string(),
        }
    }

    /// Builds an [`UnwrapError::Expect`] carrying `message`.
    pub fn expect(message: impl Into<String>) -> Self {
        Self::Expect(message.into())
    }

    /// Panics with this error's message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// A panic caught by `try_catch` or [`Future::catch_unwind`].
///
/// Panic payloads are usually `&'static str` or `String`; those are kept
/// verbatim. Any other payload type cannot be rendered and is recorded as
/// `Box<dyn Any>`.
///
/// [`Future::catch_unwind`]: crate::future::Future::catch_unwind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct PanicPayload {
    message: String,
}

impl PanicPayload {
    /// Creates a payload from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a raw panic payload.
    pub fn from_any(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the payload, returning the panic message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<Box<dyn Any + Send>> for PanicPayload {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::from_any(payload.as_ref())
    }
}
