//! The recursive comparison engine.
//!
//! One pure depth-first walk over two trees in lock-step. Each node pair
//! hits exactly one decision: if the structural categories differ, a single
//! `TypeChange` is recorded and the walk does not descend (once shapes
//! diverge there is no meaningful alignment underneath, and one finding per
//! divergent subtree beats a cascade of meaningless child findings).
//! Otherwise scalars are compared exactly, sequences positionally, and
//! mappings key-wise.
//!
//! The walk terminates on any finite acyclic input. Cyclic or unboundedly
//! deep trees are unsupported: there is no cycle guard and recursion depth
//! is bounded only by the call stack.

use crate::path::{Path, PathSegment};
use crate::report::{DiffReport, LengthMismatch, MappingKeyDiff, TypeChange, ValueChange};
use crate::value::{float_eq, Key, Value};

/// Compare two value trees and report every discrepancy, path-addressed.
///
/// Total and pure: no I/O, no shared state, inputs are never mutated.
/// Independent calls may run in parallel with no coordination.
///
/// ```
/// use quickdiff_core::{diff, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"user": {"name": "Alice", "age": 30}}));
/// let b = Value::from(json!({"user": {"name": "Alice", "age": 31}}));
///
/// let report = diff(&a, &b);
/// assert_eq!(report.finding_count(), 1);
/// assert_eq!(report.value_changes[0].path.to_string(), "$.user.age");
/// ```
pub fn diff(a: &Value, b: &Value) -> DiffReport {
    let mut report = DiffReport::default();
    let mut path = Path::root();
    walk(a, b, &mut path, &mut report);
    report
}

fn walk(a: &Value, b: &Value, path: &mut Path, report: &mut DiffReport) {
    if a.category() != b.category() {
        report.type_changes.push(TypeChange {
            path: path.clone(),
            a: a.clone(),
            b: b.clone(),
        });
        return;
    }

    let changed = match (a, b) {
        (Value::Null, Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x != y,
        (Value::Int(x), Value::Int(y)) => x != y,
        (Value::Float(x), Value::Float(y)) => !float_eq(*x, *y),
        (Value::Text(x), Value::Text(y)) => x != y,
        (Value::Sequence(xs), Value::Sequence(ys)) => {
            walk_sequences(xs, ys, path, report);
            return;
        }
        (Value::Mapping(xs), Value::Mapping(ys)) => {
            walk_mappings(xs, ys, path, report);
            return;
        }
        // The category gate above admits only same-variant pairs.
        _ => unreachable!("mismatched categories are reported before descent"),
    };

    if changed {
        report.value_changes.push(ValueChange {
            path: path.clone(),
            a: a.clone(),
            b: b.clone(),
        });
    }
}

/// Positional comparison. A length mismatch is one finding and a full stop:
/// index alignment past the mismatch point is undefined without a
/// realignment strategy this engine does not implement.
fn walk_sequences(xs: &[Value], ys: &[Value], path: &mut Path, report: &mut DiffReport) {
    if xs.len() != ys.len() {
        report.length_mismatches.push(LengthMismatch {
            path: path.clone(),
            a_len: xs.len(),
            b_len: ys.len(),
        });
        return;
    }
    for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
        path.push(PathSegment::Index(i));
        walk(x, y, path, report);
        path.pop();
    }
}

/// Key-wise comparison in three partitions, emitted in a fixed order for
/// reproducible reports: common keys recursed first (in `a`'s insertion
/// order), then removals (`a`'s order), then additions (`b`'s order).
fn walk_mappings(
    xs: &[(Key, Value)],
    ys: &[(Key, Value)],
    path: &mut Path,
    report: &mut DiffReport,
) {
    for (key, x) in xs {
        if let Some(y) = lookup(ys, key) {
            path.push(PathSegment::Key(key.clone()));
            walk(x, y, path, report);
            path.pop();
        }
    }
    for (key, x) in xs {
        if lookup(ys, key).is_none() {
            report.keys_removed.push(MappingKeyDiff {
                path: path.clone(),
                key: key.clone(),
                value: x.clone(),
            });
        }
    }
    for (key, y) in ys {
        if lookup(xs, key).is_none() {
            report.keys_added.push(MappingKeyDiff {
                path: path.clone(),
                key: key.clone(),
                value: y.clone(),
            });
        }
    }
}

/// Linear scan; mappings store pairs in insertion order, not a hash table.
fn lookup<'m>(pairs: &'m [(Key, Value)], key: &Key) -> Option<&'m Value> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
