//! Partially-applied forms of the `Optional` combinators.
//!
//! Each function takes the non-container argument up front and returns a
//! closure waiting for the `Optional`, so steps can be strung together
//! point-free with [`pipe!`](crate::pipe) or [`compose!`](crate::compose).
//! The returned closures are `Fn` and can be reused, e.g. as the argument
//! to `Iterator::map`.

use crate::optional::Optional;

/// Curried [`Optional::map`].
pub fn map<T, U, F>(f: F) -> impl Fn(Optional<T>) -> Optional<U>
where
    F: Fn(T) -> U,
{
    move |value| value.map(&f)
}

/// Curried [`Optional::and_then`]; absence short-circuits the rest of a chain.
pub fn and_then<T, U, F>(f: F) -> impl Fn(Optional<T>) -> Optional<U>
where
    F: Fn(T) -> Optional<U>,
{
    move |value| value.and_then(&f)
}

/// Alias for [`and_then`].
pub fn bind<T, U, F>(f: F) -> impl Fn(Optional<T>) -> Optional<U>
where
    F: Fn(T) -> Optional<U>,
{
    and_then(f)
}

/// Curried [`Optional::with_default`].
// The default is cloned per call since the closure may run more than once.
pub fn with_default<T: Clone>(default: T) -> impl Fn(Optional<T>) -> T {
    move |value| value.with_default(default.clone())
}

/// Curried [`Optional::maybe`].
pub fn maybe<T, U, F>(default: U, f: F) -> impl Fn(Optional<T>) -> U
where
    U: Clone,
    F: Fn(T) -> U,
{
    move |value| value.maybe(default.clone(), &f)
}

/// Curried applicative apply: supply the argument, then the wrapped function.
///
/// ```
/// use nullable::{Optional, ap, pipe};
///
/// let add3 = |a: i32| move |b: i32| move |c: i32| a + b + c;
/// let sum = pipe!(Optional::present(add3) =>
///     ap(Optional::present(1)),
///     ap(Optional::present(2)),
///     ap(Optional::present(3)),
/// );
/// assert_eq!(sum, Optional::present(6));
/// ```
pub fn ap<T, U, F>(target: Optional<T>) -> impl Fn(Optional<F>) -> Optional<U>
where
    T: Clone,
    F: FnOnce(T) -> U,
{
    move |applicative| applicative.ap(target.clone())
}
