use std::time::Duration;

use pyo3::exceptions::{PyLookupError, PyPermissionError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::{BlockingJudicialClient, ClientError, DEFAULT_SERVER_URL};

#[pyclass(name = "Client")]
pub struct PyClient {
    inner: BlockingJudicialClient,
}

#[pymethods]
impl PyClient {
    #[new]
    #[pyo3(signature = (base_url=None, timeout_secs=None))]
    fn new(base_url: Option<String>, timeout_secs: Option<f64>) -> PyResult<Self> {
        let client = match base_url {
            Some(url) => BlockingJudicialClient::new(url).map_err(to_py_value_error)?,
            None => BlockingJudicialClient::from_default_server().map_err(to_py_value_error)?,
        };
        let client = if let Some(secs) = timeout_secs {
            let timeout = Duration::try_from_secs_f64(secs).map_err(to_py_value_error)?;
            client.with_timeout(timeout)
        } else {
            client
        };

        Ok(Self { inner: client })
    }

    #[staticmethod]
    fn default_server_url() -> &'static str {
        DEFAULT_SERVER_URL
    }

    fn authenticate(&self, user: String, password: String) -> PyResult<String> {
        self.inner
            .authenticate(&user, &password)
            .map_err(to_py_client_error)
    }

    /// Returns the change batches as a JSON array string.
    fn list_changes(&self, token: String) -> PyResult<String> {
        let batches = self.inner.list_changes(&token).map_err(to_py_client_error)?;
        serde_json::to_string(&batches).map_err(to_py_runtime_error)
    }

    /// Returns the document as a JSON object string using the wire field names.
    fn get_document(&self, token: String, identifier: String) -> PyResult<String> {
        let document = self
            .inner
            .get_document(&token, &identifier)
            .map_err(to_py_client_error)?;
        serde_json::to_string(&document).map_err(to_py_runtime_error)
    }
}

#[pymodule]
fn tw_judicial(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyClient>()?;
    Ok(())
}

fn to_py_client_error(error: ClientError) -> PyErr {
    match error {
        ClientError::Auth(_) | ClientError::AuthExpired => {
            PyPermissionError::new_err(error.to_string())
        }
        ClientError::Fetch(_) => PyLookupError::new_err(error.to_string()),
        other => to_py_runtime_error(other),
    }
}

fn to_py_value_error(error: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn to_py_runtime_error(error: impl std::fmt::Display) -> PyErr {
    PyRuntimeError::new_err(error.to_string())
}
