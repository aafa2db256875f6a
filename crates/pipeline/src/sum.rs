use nullable::{Optional, Present, and_then, ap, pipe};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SumReport {
    pub a: Optional<i64>,
    pub b: Optional<i64>,
    pub c: Optional<i64>,
    pub result: Optional<i64>,
}

/// Lifts a curried three-argument sum over optional operands, one `ap` per argument.
///
/// Overflow is reported as absence rather than a clamped value.
pub fn lifted_sum(a: Optional<i64>, b: Optional<i64>, c: Optional<i64>) -> SumReport {
    let add_three = |x: i64| {
        move |y: i64| {
            move |z: i64| Optional::from(x.checked_add(y).and_then(|xy| xy.checked_add(z)))
        }
    };

    let result = pipe!(Present(add_three) =>
        ap(a),
        ap(b),
        ap(c),
        and_then(|sum: Optional<i64>| sum),
    );

    SumReport { a, b, c, result }
}
