//! Tests for the `Semigroup` and `Monoid` derive macros.

#![cfg(feature = "derive")]

use preludium::typeclass::{Max, Min, Monoid, Semigroup, Sum, mconcat};
use rstest::rstest;

/// Struct with named fields of different monoids.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Stats {
    count: Sum<u32>,
    highest: Max<i64>,
    lowest: Min<i64>,
    tags: Vec<String>,
}

impl Stats {
    fn single(value: i64, tag: &str) -> Self {
        Self {
            count: Sum(1),
            highest: Max(value),
            lowest: Min(value),
            tags: vec![tag.to_string()],
        }
    }
}

/// Tuple struct.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Pair(String, Sum<i32>);

/// Generic struct.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Tagged<T> {
    value: T,
    notes: String,
}

/// Unit struct.
#[derive(Debug, Clone, PartialEq, Semigroup, Monoid)]
struct Marker;

#[rstest]
fn named_fields_combine_pointwise() {
    let merged = Stats::single(4, "a").op(Stats::single(-2, "b"));
    assert_eq!(
        merged,
        Stats {
            count: Sum(2),
            highest: Max(4),
            lowest: Min(-2),
            tags: vec![String::from("a"), String::from("b")],
        }
    );
}

#[rstest]
fn mzero_is_field_wise_identity() {
    let zero = Stats::mzero();
    assert_eq!(zero.count, Sum(0));
    assert_eq!(zero.highest, Max(i64::MIN));
    assert_eq!(zero.lowest, Min(i64::MAX));
    assert!(zero.tags.is_empty());

    let sample = Stats::single(9, "x");
    assert_eq!(Stats::mzero().op(sample.clone()), sample);
    assert_eq!(sample.clone().op(Stats::mzero()), sample);
}

#[rstest]
fn mconcat_over_derived_monoid() {
    let summary: Stats = mconcat([3, 8, -1].into_iter().map(|v| Stats::single(v, "t")));
    assert_eq!(summary.count, Sum(3));
    assert_eq!(summary.highest, Max(8));
    assert_eq!(summary.lowest, Min(-1));
    assert_eq!(summary.tags.len(), 3);
}

#[rstest]
fn tuple_struct() {
    let joined = Pair(String::from("ab"), Sum(1)).op(Pair(String::from("cd"), Sum(2)));
    assert_eq!(joined, Pair(String::from("abcd"), Sum(3)));
    assert_eq!(Pair::mzero(), Pair(String::new(), Sum(0)));
}

#[rstest]
fn generic_struct() {
    let left = Tagged { value: Sum(1.5), notes: String::from("x") };
    let right = Tagged { value: Sum(2.0), notes: String::from("y") };
    assert_eq!(left.op(right), Tagged { value: Sum(3.5), notes: String::from("xy") });
    assert_eq!(Tagged::<Vec<u8>>::mzero().value, Vec::<u8>::new());
}

#[rstest]
fn unit_struct() {
    assert_eq!(Marker.op(Marker), Marker);
    assert_eq!(Marker::mzero(), Marker);
}
