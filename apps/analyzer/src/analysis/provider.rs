//! Provider seam: the external model is consumed through this trait.
//!
//! The embedding service supplies the implementation (an HTTP client, an SDK,
//! or a test double); the pipeline only ever sees the trait. Carried as
//! `Arc<dyn AnalysisProvider>` so backends swap without touching callers.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AnalysisError;

/// The analysis kinds computed from the same input text. Two entries with the
/// same subject but different categories never share a cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisCategory {
    /// Company suggestions for a resume.
    Companies,
    /// Job-title suggestions for a resume.
    Jobs,
    /// Full resume-vs-job-description match report.
    Comprehensive,
}

impl AnalysisCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisCategory::Companies => "companies",
            AnalysisCategory::Jobs => "jobs",
            AnalysisCategory::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisCategory {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "companies" => Ok(AnalysisCategory::Companies),
            "jobs" => Ok(AnalysisCategory::Jobs),
            "comprehensive" => Ok(AnalysisCategory::Comprehensive),
            other => Err(AnalysisError::InvalidCategory(other.to_string())),
        }
    }
}

/// A normalized analysis request handed to the provider on a cache miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub category: AnalysisCategory,
    /// Section-extracted resume text.
    pub resume: String,
    /// Section-extracted job description; present only for comprehensive
    /// matches.
    pub job_description: Option<String>,
}

/// The external analysis backend. The result payload is opaque to the core;
/// it is cached and returned as-is.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, AnalysisError>;
}
