//! Error types for value-tree construction.
//!
//! The diff engine itself is total: once two well-formed [`Value`](crate::Value)
//! trees exist, `diff` cannot fail. Errors only arise at the construction
//! boundary, where host data is reshaped into the value model.

use thiserror::Error;

use crate::value::Category;

/// Errors that can occur while building a [`Value`](crate::Value) tree.
#[derive(Error, Debug)]
pub enum ValueError {
    /// A mapping was constructed with the same key appearing twice.
    #[error("duplicate mapping key: {key}")]
    DuplicateKey { key: String },

    /// A value of this category cannot be used as a mapping key.
    /// Keys are restricted to null, booleans, integers, and text; floats
    /// are excluded because NaN has no coherent equality or hash.
    #[error("{category} values cannot be used as mapping keys")]
    InvalidKey { category: Category },
}

/// Convenience alias used throughout quickdiff-core.
pub type Result<T> = std::result::Result<T, ValueError>;
