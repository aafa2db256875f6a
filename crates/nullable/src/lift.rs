use crate::optional::Optional;

/// Runs a two-argument function over two optional arguments.
///
/// Present only if both arguments are; `f` runs at most once.
pub fn lift2<A, B, R, F>(f: F, a: Optional<A>, b: Optional<B>) -> Optional<R>
where
    F: FnOnce(A, B) -> R,
{
    a.zip(b).map(|(a, b)| f(a, b))
}

pub fn lift3<A, B, C, R, F>(f: F, a: Optional<A>, b: Optional<B>, c: Optional<C>) -> Optional<R>
where
    F: FnOnce(A, B, C) -> R,
{
    a.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
}
