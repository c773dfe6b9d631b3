//! Finding records and the categorized diff report.

use serde::Serialize;

use crate::path::Path;
use crate::value::{Key, Value};

/// Same category on both sides, unequal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueChange {
    pub path: Path,
    pub a: Value,
    pub b: Value,
}

/// Differing structural categories. Covers scalar-kind mismatches
/// (including Int vs Float) as well as sequence-vs-mapping divergence.
/// The engine does not descend below a type change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeChange {
    pub path: Path,
    pub a: Value,
    pub b: Value,
}

/// A mapping key present on only one side, with the value it carried there.
/// Appears in [`DiffReport::keys_added`] (only in `b`) or
/// [`DiffReport::keys_removed`] (only in `a`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingKeyDiff {
    pub path: Path,
    pub key: Key,
    pub value: Value,
}

/// Both sides are sequences of unequal length. No per-element findings are
/// emitted underneath: positional alignment past the mismatch is undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthMismatch {
    pub path: Path,
    pub a_len: usize,
    pub b_len: usize,
}

/// The complete result of one comparison: five vectors, one per finding
/// kind, each populated in traversal order (pre-order, left to right).
/// Returned by value from [`diff`](crate::diff) and never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffReport {
    pub value_changes: Vec<ValueChange>,
    pub type_changes: Vec<TypeChange>,
    pub keys_added: Vec<MappingKeyDiff>,
    pub keys_removed: Vec<MappingKeyDiff>,
    pub length_mismatches: Vec<LengthMismatch>,
}

impl DiffReport {
    /// True when the two trees were structurally identical.
    pub fn is_empty(&self) -> bool {
        self.value_changes.is_empty()
            && self.type_changes.is_empty()
            && self.keys_added.is_empty()
            && self.keys_removed.is_empty()
            && self.length_mismatches.is_empty()
    }

    /// Total number of findings across all five kinds.
    pub fn finding_count(&self) -> usize {
        self.value_changes.len()
            + self.type_changes.len()
            + self.keys_added.len()
            + self.keys_removed.len()
            + self.length_mismatches.len()
    }
}
