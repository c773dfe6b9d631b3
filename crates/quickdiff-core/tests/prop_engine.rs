//! Property-based tests for the diff engine.
//!
//! Strategies generate arbitrary value trees (scalars including NaN and
//! huge integers, nested sequences, mappings with mixed-kind keys) and
//! check the engine's global guarantees:
//!
//! - reflexivity: `diff(v, v)` is empty for every constructible tree
//! - determinism: repeated runs produce byte-for-byte identical reports
//! - swap symmetry: `diff(b, a)` mirrors `diff(a, b)` with sides swapped
//!   and the added/removed partitions exchanged

use std::collections::HashSet;

use num_bigint::BigInt;
use proptest::prelude::*;
use quickdiff_core::{diff, DiffReport, Key, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Null),
        any::<bool>().prop_map(Key::Bool),
        any::<i64>().prop_map(|n| Key::Int(BigInt::from(n))),
        "[a-z]{0,6}".prop_map(Key::Text),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Int(BigInt::from(n))),
        // Shift well beyond the 64-bit range to exercise big-int equality.
        any::<i64>().prop_map(|n| Value::Int(BigInt::from(n) * BigInt::from(u64::MAX) * 7)),
        any::<f64>().prop_map(Value::Float),
        Just(Value::Float(f64::NAN)),
        Just(Value::Float(-0.0)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Text),
    ]
}

/// Arbitrary tree up to 4 levels deep. Mapping pairs are deduplicated by
/// key (first occurrence wins) to keep the uniqueness invariant.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                let mut seen = HashSet::new();
                Value::Mapping(
                    pairs
                        .into_iter()
                        .filter(|(k, _)| seen.insert(k.clone()))
                        .collect(),
                )
            }),
        ]
    })
}

// NaN-containing values serialize to null, so string comparison is total
// even where `PartialEq` on floats is not.
fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("report serialization is infallible")
}

/// Serialize each item and sort: traversal order over common mapping keys
/// follows the first argument, so findings collected from sibling subtrees
/// may be appended in a different order by `diff(b, a)`.
fn sorted_json<T: serde::Serialize>(items: &[T]) -> Vec<String> {
    let mut out: Vec<String> = items.iter().map(to_json).collect();
    out.sort();
    out
}

/// Order-insensitive fingerprint of the two side-carrying finding kinds,
/// with `a` and `b` swapped when requested. Traversal order over common
/// mapping keys follows the first argument, so `diff(b, a)` may visit in a
/// different order; the findings themselves must still mirror exactly.
fn side_findings(report: &DiffReport, swap: bool) -> Vec<(String, String, String)> {
    let mut out = Vec::new();
    for c in &report.value_changes {
        let (a, b) = (to_json(&c.a), to_json(&c.b));
        let (a, b) = if swap { (b, a) } else { (a, b) };
        out.push((format!("value@{}", c.path), a, b));
    }
    for c in &report.type_changes {
        let (a, b) = (to_json(&c.a), to_json(&c.b));
        let (a, b) = if swap { (b, a) } else { (a, b) };
        out.push((format!("type@{}", c.path), a, b));
    }
    for m in &report.length_mismatches {
        let (a, b) = (m.a_len.to_string(), m.b_len.to_string());
        let (a, b) = if swap { (b, a) } else { (a, b) };
        out.push((format!("len@{}", m.path), a, b));
    }
    out.sort();
    out
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn reflexivity(v in arb_value()) {
        let report = diff(&v, &v);
        prop_assert!(report.is_empty(), "diff(v, v) not empty: {:?}", report);
    }

    #[test]
    fn reflexivity_on_clones(v in arb_value()) {
        let w = v.clone();
        prop_assert!(diff(&v, &w).is_empty());
    }

    #[test]
    fn determinism(a in arb_value(), b in arb_value()) {
        let first = diff(&a, &b);
        let second = diff(&a, &b);
        prop_assert_eq!(to_json(&first), to_json(&second));
    }

    #[test]
    fn swap_symmetry(a in arb_value(), b in arb_value()) {
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);

        // Additions seen from one side are removals seen from the other.
        prop_assert_eq!(sorted_json(&forward.keys_added), sorted_json(&backward.keys_removed));
        prop_assert_eq!(sorted_json(&forward.keys_removed), sorted_json(&backward.keys_added));

        prop_assert_eq!(side_findings(&forward, false), side_findings(&backward, true));
    }

    #[test]
    fn empty_report_iff_zero_findings(a in arb_value(), b in arb_value()) {
        let report = diff(&a, &b);
        prop_assert_eq!(report.is_empty(), report.finding_count() == 0);
    }
}
