//! # quickdiff-core
//!
//! Structural diff engine for arbitrarily nested, dynamically typed values.
//!
//! Given two [`Value`] trees (scalars, ordered sequences, insertion-ordered
//! mappings), [`diff`] walks them in lock-step and produces a [`DiffReport`]
//! explaining precisely where and how they differ: value changes, type
//! changes, sequence-length mismatches, and mapping key additions/removals,
//! each tagged with the [`Path`] at which it occurred.
//!
//! ## Quick start
//!
//! ```rust
//! use quickdiff_core::{diff, Value};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"a": 1, "b": 2}));
//! let b = Value::from(json!({"a": 1, "c": 3}));
//!
//! let report = diff(&a, &b);
//! assert_eq!(report.keys_removed[0].key, "b".into());
//! assert_eq!(report.keys_added[0].key, "c".into());
//! assert!(report.value_changes.is_empty());
//! ```
//!
//! ## What it does not do
//!
//! No minimal edit scripts, no similarity-based sequence alignment
//! (elements pair by position only), no merging or patching, and no
//! numeric equivalence across categories: `Int(1)` vs `Float(1.0)` is a
//! type change. Inputs must be finite and acyclic; there is no cycle guard.
//!
//! ## Modules
//!
//! - [`value`] -- the closed [`Value`]/[`Key`] model and [`Category`] tags
//! - [`engine`] -- the recursive [`diff`] walk
//! - [`path`] -- [`Path`] / [`PathSegment`] addressing
//! - [`report`] -- finding records and [`DiffReport`]
//! - [`error`] -- construction-time errors (the engine itself cannot fail)

pub mod engine;
pub mod error;
pub mod path;
pub mod report;
pub mod value;

pub use engine::diff;
pub use error::ValueError;
pub use path::{Path, PathSegment};
pub use report::{DiffReport, LengthMismatch, MappingKeyDiff, TypeChange, ValueChange};
pub use value::{Category, Key, Value};
