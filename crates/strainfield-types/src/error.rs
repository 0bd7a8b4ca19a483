//! Error types for the strainfield engine.
//!
//! All crates return `StrainResult<T>` from fallible operations. Every
//! variant is raised synchronously during pass-start validation: a run
//! either completes fully or fails before writing any output.

use thiserror::Error;

/// Unified error type for the strainfield engine.
#[derive(Debug, Error)]
pub enum StrainError {
    /// Configuration is inconsistent with the input, e.g. a component mask
    /// whose length does not match the component count, or a degenerate
    /// grid description.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A raw strain-form value outside the three defined forms.
    #[error("Invalid strain form: {0}")]
    InvalidStrainForm(i32),

    /// A required input was not supplied, e.g. transform mode selected
    /// without a transform.
    #[error("Missing input: {0}")]
    MissingInput(String),
}

/// Convenience alias for `Result<T, StrainError>`.
pub type StrainResult<T> = Result<T, StrainError>;
