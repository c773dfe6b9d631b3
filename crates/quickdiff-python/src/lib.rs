//! # quickdiff-python
//!
//! PyO3 bindings exposing the structural diff engine as the `quickdiff`
//! Python module.
//!
//! The binding is a pure adaptation layer: it converts native Python
//! objects into the engine's value model (dicts become mappings, lists and
//! tuples become sequences, ints of any magnitude convert losslessly via
//! big integers), runs `diff`, and reshapes the report into Python record
//! classes. No comparison logic lives here.

use num_bigint::BigInt;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use quickdiff_core::{diff, Key, PathSegment, Value};

/// A same-type value discrepancy at `path`.
#[pyclass(get_all)]
struct ValChange {
    path: Py<PyAny>,
    a: Py<PyAny>,
    b: Py<PyAny>,
}

/// A type-category discrepancy at `path` (e.g. int vs float, list vs dict).
#[pyclass(get_all)]
struct TypeAndValChange {
    path: Py<PyAny>,
    a: Py<PyAny>,
    b: Py<PyAny>,
}

/// A dict key present on only one side, with the value it carried there.
#[pyclass(get_all)]
struct DictDiff {
    path: Py<PyAny>,
    key: Py<PyAny>,
    val: Py<PyAny>,
}

/// Two sequences of unequal length at `path`.
#[pyclass(get_all)]
struct IterLenMismatch {
    path: Py<PyAny>,
    a_len: usize,
    b_len: usize,
}

/// The complete result of one comparison: five lists, one per finding kind,
/// each in traversal order.
#[pyclass(get_all)]
struct DiffReport {
    val_changes: Py<PyList>,
    type_and_val_changes: Py<PyList>,
    dict_items_added: Py<PyList>,
    dict_items_removed: Py<PyList>,
    iter_len_mismatch: Py<PyList>,
}

/// Structurally compare two Python values.
///
/// Args:
///     a: Left-hand value (None, bool, int, float, str, list, tuple, dict,
///        arbitrarily nested).
///     b: Right-hand value.
///
/// Returns:
///     A `DiffReport` with the findings partitioned by kind, each tagged
///     with the path (a list of indices and keys) where it occurred.
///
/// Raises:
///     TypeError: If either tree contains an unsupported type, or a dict
///         uses a key the engine cannot compare (e.g. a float).
#[pyfunction]
fn quickdiff(py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<DiffReport> {
    let av = value_from_py(a)?;
    let bv = value_from_py(b)?;
    let report = diff(&av, &bv);

    let val_changes = PyList::empty(py);
    for f in &report.value_changes {
        val_changes.append(Py::new(
            py,
            ValChange {
                path: path_to_py(py, f.path.segments())?,
                a: value_to_py(py, &f.a)?,
                b: value_to_py(py, &f.b)?,
            },
        )?)?;
    }

    let type_and_val_changes = PyList::empty(py);
    for f in &report.type_changes {
        type_and_val_changes.append(Py::new(
            py,
            TypeAndValChange {
                path: path_to_py(py, f.path.segments())?,
                a: value_to_py(py, &f.a)?,
                b: value_to_py(py, &f.b)?,
            },
        )?)?;
    }

    let dict_items_added = PyList::empty(py);
    for f in &report.keys_added {
        dict_items_added.append(Py::new(py, dict_diff(py, f)?)?)?;
    }

    let dict_items_removed = PyList::empty(py);
    for f in &report.keys_removed {
        dict_items_removed.append(Py::new(py, dict_diff(py, f)?)?)?;
    }

    let iter_len_mismatch = PyList::empty(py);
    for f in &report.length_mismatches {
        iter_len_mismatch.append(Py::new(
            py,
            IterLenMismatch {
                path: path_to_py(py, f.path.segments())?,
                a_len: f.a_len,
                b_len: f.b_len,
            },
        )?)?;
    }

    Ok(DiffReport {
        val_changes: val_changes.unbind(),
        type_and_val_changes: type_and_val_changes.unbind(),
        dict_items_added: dict_items_added.unbind(),
        dict_items_removed: dict_items_removed.unbind(),
        iter_len_mismatch: iter_len_mismatch.unbind(),
    })
}

fn dict_diff(py: Python<'_>, f: &quickdiff_core::MappingKeyDiff) -> PyResult<DictDiff> {
    Ok(DictDiff {
        path: path_to_py(py, f.path.segments())?,
        key: key_to_py(py, &f.key)?,
        val: value_to_py(py, &f.value)?,
    })
}

/// Convert a Python object into the engine's value model.
///
/// `bool` must be checked before `int` (bool subtypes int in Python).
/// Lists and tuples both become sequences: the engine has a single
/// sequence category with no list/tuple distinction.
fn value_from_py(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if obj.downcast::<PyInt>().is_ok() {
        return Ok(Value::Int(obj.extract::<BigInt>()?));
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(f.value()));
    }
    if obj.downcast::<PyString>().is_ok() {
        return Ok(Value::Text(obj.extract::<String>()?));
    }
    if let Ok(dict) = obj.downcast::<PyDict>() {
        // dict keys are unique by construction; insertion order carries over
        let mut pairs = Vec::with_capacity(dict.len());
        for (key, value) in dict.iter() {
            pairs.push((key_from_py(&key)?, value_from_py(&value)?));
        }
        return Ok(Value::Mapping(pairs));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let items: PyResult<Vec<Value>> = list.iter().map(|item| value_from_py(&item)).collect();
        return Ok(Value::Sequence(items?));
    }
    if let Ok(tuple) = obj.downcast::<PyTuple>() {
        let items: PyResult<Vec<Value>> = tuple.iter().map(|item| value_from_py(&item)).collect();
        return Ok(Value::Sequence(items?));
    }
    Err(PyTypeError::new_err(format!(
        "unsupported value type: {}",
        obj.get_type().name()?
    )))
}

fn key_from_py(obj: &Bound<'_, PyAny>) -> PyResult<Key> {
    if obj.is_none() {
        return Ok(Key::Null);
    }
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Key::Bool(b.is_true()));
    }
    if obj.downcast::<PyInt>().is_ok() {
        return Ok(Key::Int(obj.extract::<BigInt>()?));
    }
    if obj.downcast::<PyString>().is_ok() {
        return Ok(Key::Text(obj.extract::<String>()?));
    }
    Err(PyTypeError::new_err(format!(
        "unsupported mapping key type: {}",
        obj.get_type().name()?
    )))
}

fn value_to_py(py: Python<'_>, value: &Value) -> PyResult<Py<PyAny>> {
    Ok(match value {
        Value::Null => py.None(),
        Value::Bool(b) => PyBool::new(py, *b).to_owned().into_any().unbind(),
        Value::Int(n) => n.into_pyobject(py)?.into_any().unbind(),
        Value::Float(x) => PyFloat::new(py, *x).into_any().unbind(),
        Value::Text(s) => PyString::new(py, s).into_any().unbind(),
        Value::Sequence(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(value_to_py(py, item)?)?;
            }
            list.into_any().unbind()
        }
        Value::Mapping(pairs) => {
            let dict = PyDict::new(py);
            for (key, val) in pairs {
                dict.set_item(key_to_py(py, key)?, value_to_py(py, val)?)?;
            }
            dict.into_any().unbind()
        }
    })
}

fn key_to_py(py: Python<'_>, key: &Key) -> PyResult<Py<PyAny>> {
    Ok(match key {
        Key::Null => py.None(),
        Key::Bool(b) => PyBool::new(py, *b).to_owned().into_any().unbind(),
        Key::Int(n) => n.into_pyobject(py)?.into_any().unbind(),
        Key::Text(s) => PyString::new(py, s).into_any().unbind(),
    })
}

/// A path becomes a Python list mixing indices (int) and keys.
fn path_to_py(py: Python<'_>, segments: &[PathSegment]) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for segment in segments {
        match segment {
            PathSegment::Index(i) => list.append(*i)?,
            PathSegment::Key(key) => list.append(key_to_py(py, key)?)?,
        }
    }
    Ok(list.into_any().unbind())
}

/// The `quickdiff` Python module, implemented in Rust via PyO3.
#[pymodule]
#[pyo3(name = "quickdiff")]
fn quickdiff_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(quickdiff, m)?)?;
    m.add_class::<DiffReport>()?;
    m.add_class::<ValChange>()?;
    m.add_class::<TypeAndValChange>()?;
    m.add_class::<DictDiff>()?;
    m.add_class::<IterLenMismatch>()?;
    Ok(())
}
