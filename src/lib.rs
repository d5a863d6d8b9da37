//! Text cleaning for classifier input
//!
//! A fixed pipeline of string rewrites: NFKD normalization, whitespace
//! collapsing, contraction expansion, punctuation spacing and digit-run
//! bucketing. Usable from Rust directly or, with the `python` feature,
//! as a Python extension module.

pub mod contractions;
pub mod document;
pub mod error;
pub mod normalization;
pub mod numbers;
pub mod parallel_processor;
pub mod punctuation;
pub mod text_cleaner;

pub use contractions::expand_contractions;
pub use document::TextDocument;
pub use error::CleaningError;
pub use normalization::{collapse_whitespace, normalize_unicode};
pub use numbers::bucket_numbers;
pub use parallel_processor::ParallelProcessor;
pub use punctuation::{space_out_punctuation, space_out_punctuation_with, PunctuationSet};
pub use text_cleaner::{CleanerConfig, Stage, TextCleaner};

#[cfg(feature = "python")]
mod python {
    use super::*;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    impl From<CleaningError> for PyErr {
        fn from(err: CleaningError) -> PyErr {
            match err {
                CleaningError::ParallelError(_) => PyRuntimeError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    fn build_cleaner(config_json: Option<&str>) -> Result<TextCleaner, CleaningError> {
        match config_json {
            Some(json) => TextCleaner::from_config(&CleanerConfig::from_json(json)?),
            None => Ok(TextCleaner::new()),
        }
    }

    /// Python module initialization
    /// This is the entry point that Maturin uses to create the Python extension
    #[pymodule]
    fn textcleaner(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Ignore the error when a logger is already installed (module reload)
        let _ = env_logger::try_init();

        m.add_function(wrap_pyfunction!(clean_text, m)?)?;
        m.add_function(wrap_pyfunction!(clean_texts, m)?)?;
        m.add_function(wrap_pyfunction!(tokenize, m)?)?;
        m.add_function(wrap_pyfunction!(py_normalize_unicode, m)?)?;
        m.add_function(wrap_pyfunction!(py_collapse_whitespace, m)?)?;
        m.add_function(wrap_pyfunction!(py_expand_contractions, m)?)?;
        m.add_function(wrap_pyfunction!(py_space_out_punctuation, m)?)?;
        m.add_function(wrap_pyfunction!(py_bucket_numbers, m)?)?;

        m.add("__version__", env!("CARGO_PKG_VERSION"))?;

        Ok(())
    }

    /// Clean one string with the full pipeline or the stages named in `config_json`
    #[pyfunction]
    #[pyo3(signature = (text, config_json=None))]
    fn clean_text(text: &str, config_json: Option<&str>) -> PyResult<String> {
        let cleaner = build_cleaner(config_json)?;
        Ok(cleaner.clean(text))
    }

    /// Clean a list of strings in parallel, releasing the GIL while working
    #[pyfunction]
    #[pyo3(signature = (texts, config_json=None))]
    fn clean_texts(py: Python<'_>, texts: Vec<String>, config_json: Option<&str>) -> PyResult<Vec<String>> {
        let cleaner = build_cleaner(config_json)?;
        let cleaned = py.allow_threads(|| -> Result<Vec<String>, CleaningError> {
            let processor = ParallelProcessor::with_detected_cores()?;
            Ok(processor.clean_batch(&cleaner, &texts))
        })?;
        Ok(cleaned)
    }

    /// Full pipeline, then whitespace split
    #[pyfunction]
    fn tokenize(text: &str) -> Vec<String> {
        TextCleaner::new().tokenize(text)
    }

    #[pyfunction]
    #[pyo3(name = "normalize_unicode")]
    fn py_normalize_unicode(text: &str) -> String {
        normalize_unicode(text)
    }

    #[pyfunction]
    #[pyo3(name = "collapse_whitespace")]
    fn py_collapse_whitespace(text: &str) -> String {
        collapse_whitespace(text)
    }

    #[pyfunction]
    #[pyo3(name = "expand_contractions")]
    fn py_expand_contractions(text: &str) -> String {
        expand_contractions(text)
    }

    #[pyfunction]
    #[pyo3(name = "space_out_punctuation")]
    fn py_space_out_punctuation(text: &str) -> String {
        space_out_punctuation(text)
    }

    #[pyfunction]
    #[pyo3(name = "bucket_numbers")]
    fn py_bucket_numbers(text: &str) -> String {
        bucket_numbers(text)
    }
}
