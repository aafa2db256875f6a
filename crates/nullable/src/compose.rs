/// Threads a value left-to-right through a list of unary functions.
///
/// `pipe!(x => f, g, h)` evaluates to `h(g(f(x)))`.
#[macro_export]
macro_rules! pipe {
    ($value:expr => $($step:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($step)(value);
        )+
        value
    }};
}

/// Right-to-left function composition.
///
/// `compose!(h, g, f)` builds `|x| h(g(f(x)))`; the last function listed
/// runs first.
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |value| outer(inner(value))
    }};
}
