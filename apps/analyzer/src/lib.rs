//! Resume analysis core: a deterministic section extractor and a TTL-bounded
//! result cache, composed into a pipeline that shields the external model
//! provider from repeated identical inputs.
//!
//! The HTTP surface, document parsing (PDF/DOCX), and the concrete provider
//! client live in the embedding service; this crate exposes the pieces they
//! compose.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod errors;
pub mod extract;

pub use analysis::keys::{paired_subject_key, subject_key};
pub use analysis::pipeline::Analyzer;
pub use analysis::provider::{AnalysisCategory, AnalysisProvider, AnalysisRequest};
pub use cache::{CacheKey, Clock, ResultCache, SystemClock};
pub use config::AnalysisConfig;
pub use errors::AnalysisError;
pub use extract::{extract_sections, SectionSpec};
