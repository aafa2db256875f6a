use std::cell::Cell;

use nullable::{
    Absent, Optional, Present, ap, is_none, is_some, lift2, lift3, map, maybe, with_default,
};

const NAME: &str = "noob noob";

fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

#[test]
fn predicates_report_state() {
    let absent: Optional<u32> = Absent;
    assert!(absent.is_none());
    assert!(!absent.is_some());
    assert!(is_none(&absent));

    let present = Present(7u32);
    assert!(present.is_some());
    assert!(!present.is_none());
    assert!(is_some(&present));
}

#[test]
fn predicates_filter_iterators() {
    let values = vec![Present(1), Absent, Present(3), Absent];
    assert_eq!(values.iter().filter(|v| is_some(*v)).count(), 2);
    assert_eq!(values.iter().filter(|v| is_none(*v)).count(), 2);
}

#[test]
fn map_over_absent_returns_absent() {
    let result = map(to_upper)(Absent);
    assert_eq!(result, Absent);
}

#[test]
fn map_applies_function_to_present_value() {
    let result = map(to_upper)(Present(NAME));
    assert_eq!(result, Present(to_upper(NAME)));

    // direct form
    assert_eq!(Present(NAME).map(to_upper), Present(String::from("NOOB NOOB")));
}

#[test]
fn map_never_calls_function_on_absent() {
    let calls = Cell::new(0);
    let step = map(|n: u32| {
        calls.set(calls.get() + 1);
        n + 1
    });

    assert_eq!(step(Absent), Absent);
    assert_eq!(calls.get(), 0);

    assert_eq!(step(Present(1)), Present(2));
    assert_eq!(calls.get(), 1);
}

#[test]
fn curried_map_is_reusable_across_iterators() {
    let doubled: Vec<_> = vec![Present(1), Absent, Present(4)]
        .into_iter()
        .map(map(|n: i32| n * 2))
        .collect();
    assert_eq!(doubled, vec![Present(2), Absent, Present(8)]);
}

#[test]
fn with_default_returns_default_for_absent() {
    let result = with_default(NAME)(Absent);
    assert_eq!(result, NAME);
    assert_eq!(Optional::<&str>::absent().with_default(NAME), NAME);
}

#[test]
fn with_default_returns_present_value_regardless_of_default() {
    let result = with_default("foo")(Present(NAME));
    assert_eq!(result, NAME);
    assert_eq!(Present(NAME).with_default("foo"), NAME);
}

#[test]
fn maybe_folds_both_states() {
    let len = maybe(0usize, |s: &str| s.len());
    assert_eq!(len(Present(NAME)), 9);
    assert_eq!(len(Absent), 0);

    assert_eq!(Present(4).maybe(String::from("none"), |n| n.to_string()), "4");
}

#[test]
fn maybe_never_calls_function_on_absent() {
    let calls = Cell::new(0);
    let result = Optional::<u8>::absent().maybe(10u8, |n| {
        calls.set(calls.get() + 1);
        n
    });
    assert_eq!(result, 10);
    assert_eq!(calls.get(), 0);
}

#[test]
fn ap_with_absent_function_returns_absent() {
    let f: Optional<fn(&str) -> String> = Absent;
    assert_eq!(ap(Present(NAME))(f), Absent);
}

#[test]
fn ap_with_absent_target_returns_absent() {
    let calls = Cell::new(0);
    let f = |s: &str| {
        calls.set(calls.get() + 1);
        to_upper(s)
    };
    assert_eq!(ap(Optional::<&str>::absent())(Present(f)), Absent);
    assert_eq!(calls.get(), 0);
}

#[test]
fn ap_applies_wrapped_function_to_wrapped_value() {
    let result = ap(Present(NAME))(Present(to_upper));
    assert_eq!(result, Present(to_upper(NAME)));

    assert_eq!(Present(to_upper).ap(Present(NAME)), Present(String::from("NOOB NOOB")));
}

#[test]
fn ap_lifts_three_argument_function() {
    let add_three = |a: i32| move |b: i32| move |c: i32| a + b + c;

    let step_a = ap(Present(1));
    let step_b = ap(Present(2));
    let step_c = ap(Present(3));
    let result = step_c(step_b(step_a(Present(add_three))));
    assert_eq!(result, Present(1 + 2 + 3));
}

#[test]
fn ap_lift_with_missing_argument_returns_absent() {
    let add_three = |a: i32| move |b: i32| move |c: i32| a + b + c;

    let result = Present(add_three)
        .ap(Present(1))
        .ap(Optional::<i32>::absent())
        .ap(Present(3));
    assert_eq!(result, Absent);
}

#[test]
fn lift_helpers_require_every_argument() {
    assert_eq!(lift2(|a: i32, b: i32| a * b, Present(6), Present(7)), Present(42));
    assert_eq!(lift2(|a: i32, b: i32| a * b, Present(6), Absent), Absent);

    let sum = |a: i32, b: i32, c: i32| a + b + c;
    assert_eq!(lift3(sum, Present(1), Present(2), Present(3)), Present(6));
    assert_eq!(lift3(sum, Absent, Present(2), Present(3)), Absent);
}

#[test]
fn lift_never_calls_function_when_argument_missing() {
    let calls = Cell::new(0);
    let result = lift3(
        |a: u8, b: u8, c: u8| {
            calls.set(calls.get() + 1);
            a + b + c
        },
        Present(1),
        Present(2),
        Absent,
    );
    assert_eq!(result, Absent);
    assert_eq!(calls.get(), 0);
}

#[test]
fn converts_to_and_from_std_option() {
    assert_eq!(Optional::from(Some(3)), Present(3));
    assert_eq!(Optional::<i32>::from(None), Absent);
    let opt: Option<&str> = Present("x").into();
    assert_eq!(opt, Some("x"));
    assert_eq!(Optional::<u8>::absent().into_option(), None);
}

#[test]
fn default_is_absent_and_absent_orders_first() {
    assert_eq!(Optional::<String>::default(), Absent);
    assert!(Absent < Present(0));
    assert!(Present(1) < Present(2));
}

#[test]
fn borrowed_views_update_in_place() {
    let mut value = Present(String::from("abc"));
    assert_eq!(value.as_ref().map(|s| s.len()), Present(3));

    if let Present(s) = value.as_mut() {
        s.push('d');
    }
    assert_eq!(value, Present(String::from("abcd")));
}

#[test]
fn zip_pairs_present_values() {
    assert_eq!(Present(1).zip(Present('a')), Present((1, 'a')));
    assert_eq!(Present(1).zip(Optional::<char>::absent()), Absent);
}

#[test]
fn default_needs_no_default_payload() {
    struct NoDefault;
    assert!(Optional::<NoDefault>::default().is_none());
}
