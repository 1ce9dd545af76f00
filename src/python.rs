//! Python bindings
//!
//! Batch functions release the GIL while rayon does the work.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{batch, classify, validators};

/// card_validator native extension module
#[pymodule]
fn card_validator(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_card, m)?)?;
    m.add_function(wrap_pyfunction!(validate_checksum, m)?)?;
    m.add_function(wrap_pyfunction!(diagnose, m)?)?;

    // Batch
    m.add_function(wrap_pyfunction!(classify_many, m)?)?;
    m.add_function(wrap_pyfunction!(validate_many, m)?)?;

    m.add_function(wrap_pyfunction!(is_native_available, m)?)?;
    Ok(())
}

/// Card issuer label, or None if no pattern matches
#[pyfunction]
fn classify_card(number: &str) -> Option<&'static str> {
    classify::classify_card(number).map(|t| t.as_str())
}

/// Validate card number length, issuer and Luhn checksum
#[pyfunction]
fn validate_checksum(number: &str) -> bool {
    validators::validate_checksum(number)
}

/// Issuer label of a valid card, raising ValueError with the reason otherwise
#[pyfunction]
fn diagnose(number: &str) -> PyResult<&'static str> {
    validators::diagnose(number)
        .map(|t| t.as_str())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn classify_many(py: Python<'_>, numbers: Vec<String>) -> Vec<Option<&'static str>> {
    py.allow_threads(|| {
        batch::classify_many(&numbers)
            .into_iter()
            .map(|t| t.map(|t| t.as_str()))
            .collect()
    })
}

#[pyfunction]
fn validate_many(py: Python<'_>, numbers: Vec<String>) -> Vec<bool> {
    py.allow_threads(|| batch::validate_many(&numbers))
}

/// Check if native extension is working
#[pyfunction]
fn is_native_available() -> bool {
    true
}
