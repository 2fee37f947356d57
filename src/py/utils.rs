// src/py/utils.rs
//! Shared helpers for converting registry results into Python exceptions.

use crate::AliasError;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::PyErr;

/// Map an [`AliasError`] onto the closest built-in Python exception.
pub(crate) fn alias_error_to_py(err: AliasError) -> PyErr {
    let msg = err.to_string();
    match err {
        AliasError::InvalidArgument(_) => PyValueError::new_err(msg),
        AliasError::UnknownAlias(_) => PyKeyError::new_err(msg),
        AliasError::AliasConflict { .. } | AliasError::CircularAlias { .. } => {
            PyRuntimeError::new_err(msg)
        }
    }
}
