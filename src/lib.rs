//! # perlica
//!
//! Algebraic `Option`, `Result` and `Future` types with a uniform combinator
//! vocabulary, plus generator-driven do-notation and a small predicate
//! toolkit.
//!
//! ## Overview
//!
//! - **Option**: a present-or-absent value ([`option::Option`])
//! - **Result**: a success-or-failure value ([`result::Result`])
//! - **Future**: an awaitable, shareable `Result` that settles once
//!   ([`future::Future`])
//! - **Bind**: do-notation over Option and Result, both as a generator
//!   runner ([`bind::run`]) and as the [`bind!`] macro
//! - **Predicate**: composable boolean tests ([`predicate`])
//!
//! Combinators consume their receiver and return a new value. Nothing is
//! mutated after construction.
//!
//! ## Feature Flags
//!
//! - `async`: [`future::Future`] and the Result-to-Future lifts (tokio, futures)
//! - `predicate`: predicate combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use perlica::prelude::*;
//!
//! let total: Result<i32, String> = bind! {
//!     left <= ok(20);
//!     right <= some(22).ok_or(String::from("missing"));
//!     ok(left + right)
//! };
//! assert_eq!(total, ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the three algebraic types, their constructors and the
/// [`bind!`](crate::bind!) macro.
///
/// # Usage
///
/// ```rust
/// use perlica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bind;
    pub use crate::option::{Option, none, some};
    pub use crate::result::{Result, err, ok};

    #[cfg(feature = "async")]
    pub use crate::future::{Future, future, try_promise, try_task};
}

pub mod bind;
mod bind_macro;
pub mod error;
pub mod option;
pub mod result;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "predicate")]
pub mod predicate;

pub use error::{PanicPayload, UnwrapError};
pub use option::Option;
pub use result::Result;

#[cfg(feature = "async")]
pub use future::Future;
