use thiserror::Error;

/// Application-level error type for the analysis core.
///
/// The extractor and the cache are infallible by design; errors come from the
/// boundaries: category parsing, spec construction, and the provider call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid analysis category: {0}")]
    InvalidCategory(String),

    #[error("Section spec error: {0}")]
    SectionSpec(#[from] regex::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
