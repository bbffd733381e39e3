//! Error types exposed by the review analysis layer.

use thiserror::Error;

/// Errors surfaced while validating input, fetching reviews, or analysing them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The listing link was empty or otherwise unusable.
    #[error("listing link is invalid: {message}")]
    InputInvalid {
        /// Why the link was rejected.
        message: String,
    },

    /// The review source could not provide reviews for the link.
    #[error("review source unavailable: {message}")]
    SourceUnavailable {
        /// Failure detail reported by the review source.
        message: String,
    },

    /// The analysis service failed to produce a result.
    #[error("review analysis failed: {message}")]
    AnalysisFailed {
        /// Failure detail reported by the analysis service.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl AnalyzerError {
    /// Short label naming the pipeline stage that produced the error.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::InputInvalid { .. } => "input",
            Self::SourceUnavailable { .. } => "fetch",
            Self::AnalysisFailed { .. } => "analyse",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
        }
    }
}
