//! The value model: a closed sum type for any tree the engine can compare.
//!
//! Mirrors the dynamically typed data the engine was built for (decoded
//! documents, configs, records) but with the type universe pinned down:
//! every node is one of seven variants, and the engine matches on them
//! exhaustively. Mappings keep insertion order in a `Vec<(Key, Value)>`
//! rather than a hash map, so reporting order is reproducible and key order
//! survives conversion from ordered host mappings.

use std::collections::HashSet;
use std::fmt;

use num_bigint::BigInt;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{Result, ValueError};

/// A node in a compared tree.
///
/// Integers are arbitrary precision: magnitudes beyond the 64-bit range
/// compare without loss or wraparound. Values are inert data; the engine
/// never mutates its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Text(String),
    /// Positionally indexed, order-significant.
    Sequence(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique; use
    /// [`Value::mapping`] to construct with the invariant checked.
    Mapping(Vec<(Key, Value)>),
}

/// The hashable subset of [`Value`] admitted as a mapping key.
///
/// Floats are deliberately absent: NaN breaks both `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Null,
    Bool(bool),
    Int(BigInt),
    Text(String),
}

/// The structural category of a [`Value`]: its variant tag, used as the
/// type-match gate before any comparison. Int and Float are distinct
/// categories, so `Int(1)` vs `Float(1.0)` is a type change, never a
/// value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Sequence,
    Mapping,
}

impl Value {
    /// The structural category of this value.
    pub fn category(&self) -> Category {
        match self {
            Value::Null => Category::Null,
            Value::Bool(_) => Category::Bool,
            Value::Int(_) => Category::Int,
            Value::Float(_) => Category::Float,
            Value::Text(_) => Category::Text,
            Value::Sequence(_) => Category::Sequence,
            Value::Mapping(_) => Category::Mapping,
        }
    }

    /// Build a mapping from key-value pairs, rejecting duplicate keys.
    ///
    /// Insertion order of `pairs` is preserved. Conversions from host
    /// mappings whose keys are unique by construction (e.g. JSON objects,
    /// Python dicts) may build `Value::Mapping` directly.
    pub fn mapping(pairs: Vec<(Key, Value)>) -> Result<Value> {
        let mut seen = HashSet::with_capacity(pairs.len());
        for (key, _) in &pairs {
            if !seen.insert(key) {
                return Err(ValueError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(Value::Mapping(pairs))
    }
}

/// Exact float equality with a bit-pattern fallback.
///
/// IEEE `==` alone would make a NaN-carrying tree unequal to itself and
/// break the engine's reflexivity guarantee, so identical bit patterns are
/// also treated as equal. `-0.0` and `0.0` still compare equal via `==`.
/// No epsilon tolerance: callers wanting fuzzy comparison must pre-round.
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    a == b || a.to_bits() == b.to_bits()
}

impl TryFrom<Value> for Key {
    type Error = ValueError;

    /// Narrow a scalar [`Value`] to a mapping key. Floats, sequences and
    /// mappings are rejected with [`ValueError::InvalidKey`].
    fn try_from(value: Value) -> Result<Key> {
        match value {
            Value::Null => Ok(Key::Null),
            Value::Bool(b) => Ok(Key::Bool(b)),
            Value::Int(n) => Ok(Key::Int(n)),
            Value::Text(s) => Ok(Key::Text(s)),
            other => Err(ValueError::InvalidKey {
                category: other.category(),
            }),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Value {
        match key {
            Key::Null => Value::Null,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(n) => Value::Int(n),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Convert a decoded JSON document into the value model.
    ///
    /// Numbers that fit `i64`/`u64` become `Int`; everything else numeric
    /// becomes `Float`. Object key order is preserved (serde_json is built
    /// with `preserve_order`), and object keys are unique by construction,
    /// so no duplicate check is needed.
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(BigInt::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(BigInt::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Key::Text(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Key {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Key {
        Key::Text(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Key {
        Key::Int(BigInt::from(n))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Null => "null",
            Category::Bool => "bool",
            Category::Int => "int",
            Category::Float => "float",
            Category::Text => "text",
            Category::Sequence => "sequence",
            Category::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Key {
    /// Text keys render quoted, scalar keys render bare: `"name"`, `7`,
    /// `true`, `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(n) => write!(f, "{}", n),
            Key::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON-like rendering, used by the CLI's text report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Render a key for use in a JSON object position, where only strings are
/// possible: text keys stay as-is, other scalars use their bare rendering.
fn map_key_string(key: &Key) -> String {
    match key {
        Key::Null => "null".to_string(),
        Key::Bool(b) => b.to_string(),
        Key::Int(n) => n.to_string(),
        Key::Text(s) => s.clone(),
    }
}

impl Serialize for Value {
    /// Serialize in natural JSON shape (not as a tagged enum): integers
    /// that fit 64 bits become JSON numbers, larger ones become decimal
    /// strings so no precision is lost.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serialize_bigint(n, serializer),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(&map_key_string(key), value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Key::Null => serializer.serialize_unit(),
            Key::Bool(b) => serializer.serialize_bool(*b),
            Key::Int(n) => serialize_bigint(n, serializer),
            Key::Text(s) => serializer.serialize_str(s),
        }
    }
}

fn serialize_bigint<S: Serializer>(
    n: &BigInt,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if let Ok(i) = i64::try_from(n) {
        serializer.serialize_i64(i)
    } else if let Ok(u) = u64::try_from(n) {
        serializer.serialize_u64(u)
    } else {
        serializer.collect_str(n)
    }
}
