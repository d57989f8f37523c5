//! Python extension module, importable as `add` with the submodule `add.test`.
//!
//! Build with the `extension-module` feature to produce a module loadable by
//! an interpreter. The `python` feature alone links against `libpython`, which
//! is what the tests below need.

use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;

use crate::error::{AddError, ParsePolicyError};
use crate::policy::{add_with_policy, checked_add, OverflowPolicy};
use crate::test;

const TEST_MODULE_DOC: &str = "Integer addition over 32-bit signed integers.";

impl From<AddError> for PyErr {
    fn from(err: AddError) -> Self {
        PyOverflowError::new_err(err.to_string())
    }
}

impl From<ParsePolicyError> for PyErr {
    fn from(err: ParsePolicyError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Adds two integers, wrapping on overflow.
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(a: i32, b: i32) -> i32 {
    test::add(a, b)
}

/// Adds two integers, raising OverflowError if the sum does not fit in 32 bits.
#[pyfunction]
#[pyo3(name = "checked_add")]
fn py_checked_add(a: i32, b: i32) -> PyResult<i32> {
    Ok(checked_add(a, b)?)
}

/// Adds two integers under the overflow policy "wrap", "saturate" or "fail".
///
/// Raises ValueError for an unknown policy, and OverflowError when the policy
/// is "fail" and the sum does not fit in 32 bits.
#[pyfunction]
#[pyo3(name = "add_with_policy")]
fn py_add_with_policy(a: i32, b: i32, policy: &str) -> PyResult<i32> {
    let policy: OverflowPolicy = policy.parse()?;
    Ok(add_with_policy(a, b, policy)?)
}

/// Fixed-width integer addition, bound from Rust.
#[pymodule]
#[pyo3(name = "add")]
fn add_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let test = PyModule::new_bound(m.py(), "test")?;
    test.setattr("__doc__", TEST_MODULE_DOC)?;
    test.add_function(wrap_pyfunction!(py_add, &test)?)?;
    test.add_function(wrap_pyfunction!(py_checked_add, &test)?)?;
    test.add_function(wrap_pyfunction!(py_add_with_policy, &test)?)?;
    m.add_submodule(&test)?;
    Ok(())
}
