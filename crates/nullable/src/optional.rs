/// A value that is either absent or present.
///
/// Every combinator consumes (or borrows) an `Optional` and produces a new
/// one; nothing here mutates the payload in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    Absent,
    Present(T),
}

pub use Optional::{Absent, Present};

impl<T> Optional<T> {
    /// Constructs an `Optional::Present(val)` variant.
    pub fn present(val: T) -> Self {
        Present(val)
    }

    /// Constructs an `Optional::Absent` variant.
    pub fn absent() -> Self {
        Absent
    }

    /// Converts a std `Option`, mapping `None` to `Absent`.
    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Present(val),
            None => Absent,
        }
    }

    /// Converts into a std `Option`, mapping `Absent` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(val) => Some(val),
            Absent => None,
        }
    }

    /// Returns true if the value is `Absent`.
    pub fn is_none(&self) -> bool {
        matches!(self, Absent)
    }

    /// Returns true if the value is `Present`.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to the contained value.
    ///
    /// `f` is not called when the value is absent.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Present(val) => Present(f(val)),
            Absent => Absent,
        }
    }

    /// Feeds the contained value to `f` and returns its result as-is.
    ///
    /// Absence short-circuits: `f` is not called and `Absent` is returned,
    /// so in a chain of `and_then` steps nothing after the first absent
    /// step runs.
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Present(val) => f(val),
            Absent => Absent,
        }
    }

    /// Alias for [`Optional::and_then`].
    pub fn bind<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.and_then(f)
    }

    /// Unwraps the contained value, falling back to `default` when absent.
    pub fn with_default(self, default: T) -> T {
        match self {
            Present(val) => val,
            Absent => default,
        }
    }

    /// Applies `f` to a present value, otherwise returns `default`.
    pub fn maybe<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Present(val) => f(val),
            Absent => default,
        }
    }

    /// Pairs two present values. Absent if either side is absent.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(val) => Present(val),
            Absent => Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(val) => Present(val),
            Absent => Absent,
        }
    }
}

impl<F> Optional<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The function only runs when both the function and `target` are
    /// present; otherwise the result is `Absent`. Chaining `ap` calls on a
    /// curried function supplies its arguments one at a time:
    ///
    /// ```
    /// use nullable::Optional;
    ///
    /// let add = |a: i32| move |b: i32| a + b;
    /// let sum = Optional::present(add).ap(Optional::present(1)).ap(Optional::present(2));
    /// assert_eq!(sum, Optional::present(3));
    /// ```
    pub fn ap<T, U>(self, target: Optional<T>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match (self, target) {
            (Present(f), Present(val)) => Present(f(val)),
            _ => Absent,
        }
    }
}

// No `T: Default` bound, unlike the derive.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        Optional::from_option(opt)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        opt.into_option()
    }
}

/// Free-standing absence check, usable as a predicate (`iter.filter(is_none)`).
pub fn is_none<T>(value: &Optional<T>) -> bool {
    value.is_none()
}

/// Free-standing presence check, the negation of [`is_none`].
pub fn is_some<T>(value: &Optional<T>) -> bool {
    value.is_some()
}
