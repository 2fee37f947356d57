// src/py/registry.rs
//! Python-facing alias registry wrapper.
#![allow(non_local_definitions)]

use pyo3::prelude::*;
use std::sync::Arc;

use crate::{AliasRegistry, RegistryConfig, RenameError};

use super::utils::alias_error_to_py;

#[pyclass]
pub struct PyAliasRegistry {
    pub(crate) inner: Arc<AliasRegistry>,
}

#[pymethods]
impl PyAliasRegistry {
    #[new]
    #[pyo3(signature = (allow_overriding = true))]
    fn new(allow_overriding: bool) -> Self {
        let config = RegistryConfig::new().allow_overriding(allow_overriding);
        Self {
            inner: Arc::new(AliasRegistry::with_config(config)),
        }
    }

    /// Build a registry configured from the process environment.
    #[staticmethod]
    fn from_env() -> Self {
        Self {
            inner: Arc::new(AliasRegistry::with_config(RegistryConfig::from_env())),
        }
    }

    #[getter]
    fn allow_overriding(&self) -> bool {
        self.inner.allow_overriding()
    }

    /// Bind `alias` to `name`.
    /// Releases the GIL while waiting for the registry lock.
    fn register_alias(&self, py: Python, name: String, alias: String) -> PyResult<()> {
        py.allow_threads(|| self.inner.register(&name, &alias))
            .map_err(alias_error_to_py)
    }

    fn remove_alias(&self, py: Python, alias: String) -> PyResult<()> {
        py.allow_threads(|| self.inner.remove(&alias))
            .map_err(alias_error_to_py)
    }

    fn is_alias(&self, name: String) -> bool {
        self.inner.is_alias(&name)
    }

    fn has_alias(&self, name: String, alias: String) -> bool {
        self.inner.has_alias(&name, &alias)
    }

    fn get_aliases(&self, py: Python, name: String) -> Vec<String> {
        py.allow_threads(|| self.inner.get_aliases(&name))
    }

    fn canonical_name(&self, name: String) -> String {
        self.inner.canonical_name(&name)
    }

    /// Rewrite every alias and target through `resolver`, a callable taking
    /// a string and returning a string or None.
    /// Exceptions raised by the resolver abort the pass unchanged.
    /// The resolver runs under the registry's write lock and must not call
    /// back into this registry; doing so deadlocks.
    fn resolve_aliases(&self, py: Python, resolver: PyObject) -> PyResult<()> {
        self.inner
            .try_apply_rename(|value| -> PyResult<Option<String>> {
                resolver.call1(py, (value,))?.extract(py)
            })
            .map_err(|e| match e {
                RenameError::Alias(e) => alias_error_to_py(e),
                RenameError::Resolver(e) => e,
            })
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}
