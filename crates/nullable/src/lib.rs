#![no_std]

//! Combinators for values that may be absent.
//!
//! Every operation comes in two shapes: a method on [`Optional`] taking all
//! of its arguments at once, and a curried free function (see [`curried`])
//! that takes everything but the container and hands back a closure for
//! point-free pipelines.
//!
//! ```
//! use nullable::{Optional, and_then, pipe, with_default};
//!
//! fn safe_divide(divisor: f64) -> impl Fn(f64) -> Optional<f64> {
//!     move |n| if divisor == 0.0 { Optional::absent() } else { Optional::present(n / divisor) }
//! }
//!
//! let result = pipe!(32.0 =>
//!     safe_divide(2.0),
//!     and_then(safe_divide(0.0)),
//!     and_then(safe_divide(4.0)),
//!     with_default(-1.0),
//! );
//! assert_eq!(result, -1.0);
//! ```

pub mod optional;
pub use optional::{Absent, Optional, Present, is_none, is_some};

pub mod curried;
pub use curried::{and_then, ap, bind, map, maybe, with_default};

pub mod lift;
pub use lift::{lift2, lift3};

// pipe! / compose!
mod compose;

#[cfg(feature = "serde")]
mod serde_impl;
