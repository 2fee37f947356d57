// src/py/wrappers.rs
//! Python-facing helper functions and module initialization.
#![allow(non_local_definitions)]

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use super::registry::PyAliasRegistry;

#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn populate_module(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_class::<PyAliasRegistry>()?;
    Ok(())
}

#[pymodule]
fn alias_registry(_py: Python, m: &PyModule) -> PyResult<()> {
    #[cfg(feature = "tracing-subscriber")]
    crate::init_tracing();
    populate_module(m)
}

pub fn make_module(py: Python) -> PyResult<Py<PyModule>> {
    let m = PyModule::new(py, "alias_registry")?;
    populate_module(m)?;
    Ok(m.into())
}
