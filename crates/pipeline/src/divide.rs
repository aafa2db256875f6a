use std::cell::Cell;

use nullable::{Absent, Optional, Present};
use serde::Serialize;

/// Division that refuses a zero divisor instead of producing inf/NaN.
pub fn safe_divide(divisor: f64) -> impl Fn(f64) -> Optional<f64> {
    move |n| {
        if divisor == 0.0 {
            Absent
        } else {
            Present(n / divisor)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum StepOutcome {
    Value(f64),
    Absent,
    /// An earlier step was absent so this one never ran.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisionStep {
    pub divisor: f64,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisionReport {
    pub start: f64,
    pub steps: Vec<DivisionStep>,
    pub result: Optional<f64>,
}

/// Divides `start` by each divisor in turn, chaining through `and_then`.
pub fn run_chain(start: f64, divisors: &[f64]) -> DivisionReport {
    let mut current = Present(start);
    let mut steps = Vec::with_capacity(divisors.len());

    for &divisor in divisors {
        let ran = Cell::new(false);
        current = current.and_then(|n| {
            ran.set(true);
            safe_divide(divisor)(n)
        });

        let outcome = match (ran.get(), current) {
            (false, _) => StepOutcome::Skipped,
            (true, Present(value)) => StepOutcome::Value(value),
            (true, Absent) => StepOutcome::Absent,
        };
        steps.push(DivisionStep { divisor, outcome });
    }

    DivisionReport {
        start,
        steps,
        result: current,
    }
}
