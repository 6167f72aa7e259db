//! Cache-shielded analysis pipeline.
//!
//! Composition per request: normalize the input via the section extractor,
//! derive a stable subject key from the normalized text, consult the cache,
//! and only on a miss call the provider and store its result under the same
//! key. Extractor determinism is what makes the key derivation sound.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::analysis::keys::{paired_subject_key, subject_key};
use crate::analysis::provider::{AnalysisCategory, AnalysisProvider, AnalysisRequest};
use crate::cache::{CacheKey, ResultCache};
use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;
use crate::extract::extract_sections;
use crate::extract::presets::{job_description_spec, resume_spec};

/// Shared analysis entry point. Owns the result cache; the provider is
/// injected at startup and swapped freely in tests.
pub struct Analyzer {
    cache: ResultCache<Value>,
    provider: Arc<dyn AnalysisProvider>,
}

impl Analyzer {
    pub fn new(config: &AnalysisConfig, provider: Arc<dyn AnalysisProvider>) -> Self {
        Self::with_cache(
            ResultCache::new(config.cache_ttl, config.cache_sweep_threshold),
            provider,
        )
    }

    /// Builds an analyzer around an existing cache. Used by tests that need
    /// a manually clocked cache.
    pub fn with_cache(cache: ResultCache<Value>, provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { cache, provider }
    }

    /// Runs a single-document analysis ("companies" or "jobs") over a resume.
    /// These analyses prompt on a tight excerpt, so the compact preset is
    /// used for normalization.
    pub async fn analyze_resume(
        &self,
        resume_text: &str,
        category: AnalysisCategory,
    ) -> Result<Value, AnalysisError> {
        let resume = extract_sections(resume_text, &resume_spec(true));
        let key = CacheKey::new(subject_key(&resume), category.as_str());

        self.run(
            key,
            AnalysisRequest {
                category,
                resume,
                job_description: None,
            },
        )
        .await
    }

    /// Runs the comprehensive resume-vs-job-description match analysis. Both
    /// documents are normalized with their full presets and the key covers
    /// both, so a change to either side is a fresh cache entry.
    pub async fn match_resume(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Value, AnalysisError> {
        let resume = extract_sections(resume_text, &resume_spec(false));
        let jd = extract_sections(job_description, &job_description_spec(false));
        let key = CacheKey::new(
            paired_subject_key(&resume, &jd),
            AnalysisCategory::Comprehensive.as_str(),
        );

        self.run(
            key,
            AnalysisRequest {
                category: AnalysisCategory::Comprehensive,
                resume,
                job_description: Some(jd),
            },
        )
        .await
    }

    /// Drops all cached results. Test/reset paths only.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of live cached results.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    async fn run(&self, key: CacheKey, request: AnalysisRequest) -> Result<Value, AnalysisError> {
        if let Some(cached) = self.cache.get(&key) {
            debug!(category = %request.category, "returning cached analysis result");
            return Ok(cached);
        }

        debug!(category = %request.category, "cache miss, calling analysis provider");
        let result = self.provider.analyze(&request).await?;
        self.cache.set(key, result.clone());

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::cache::clock::ManualClock;

    const RESUME: &str = "Experience: Built APIs at Acme.\n\nSkills: Rust, SQL, Kafka";
    const JD: &str = "Requirements: 3+ years Rust. Responsibilities: own the billing service.";

    /// Counting provider double; returns a payload echoing the request.
    struct MockProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockProvider {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: true,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisProvider for MockProvider {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AnalysisError::Provider("model unavailable".to_string()));
            }
            Ok(json!({
                "category": request.category.as_str(),
                "resume_len": request.resume.len(),
            }))
        }
    }

    fn analyzer(provider: Arc<MockProvider>) -> Analyzer {
        Analyzer::new(&AnalysisConfig::default(), provider)
    }

    #[tokio::test]
    async fn test_repeated_analysis_calls_provider_once() {
        let provider = MockProvider::new();
        let analyzer = analyzer(provider.clone());

        let first = analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();
        let second = analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(analyzer.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_categories_are_cached_independently() {
        let provider = MockProvider::new();
        let analyzer = analyzer(provider.clone());

        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();
        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Companies)
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(analyzer.cached_entries(), 2);
    }

    #[tokio::test]
    async fn test_formatting_noise_still_hits_the_cache() {
        // Same content with different whitespace normalizes identically, so
        // the second request is served from the cache.
        let provider = MockProvider::new();
        let analyzer = analyzer(provider.clone());

        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();
        let reformatted = RESUME.replace(' ', "\n");
        analyzer
            .analyze_resume(&reformatted, AnalysisCategory::Jobs)
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_match_resume_keys_on_both_documents() {
        let provider = MockProvider::new();
        let analyzer = analyzer(provider.clone());

        analyzer.match_resume(RESUME, JD).await.unwrap();
        analyzer.match_resume(RESUME, JD).await.unwrap();
        assert_eq!(provider.call_count(), 1);

        // A different job description is a fresh analysis.
        analyzer
            .match_resume(RESUME, "Requirements: 5+ years Go.")
            .await
            .unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(analyzer.cached_entries(), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated_and_not_cached() {
        let provider = MockProvider::failing();
        let analyzer = analyzer(provider.clone());

        let result = analyzer.analyze_resume(RESUME, AnalysisCategory::Jobs).await;
        assert!(matches!(result, Err(AnalysisError::Provider(_))));
        assert_eq!(analyzer.cached_entries(), 0);

        // The next attempt reaches the provider again instead of a cached error.
        let _ = analyzer.analyze_resume(RESUME, AnalysisCategory::Jobs).await;
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_a_fresh_provider_call() {
        let clock = ManualClock::new();
        let cache = ResultCache::with_clock(Duration::from_secs(3600), 100, clock.clone());
        let provider = MockProvider::new();
        let analyzer = Analyzer::with_cache(cache, provider.clone());

        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();
        clock.advance(Duration::from_secs(3601));
        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Jobs)
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(analyzer.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_a_fresh_provider_call() {
        let provider = MockProvider::new();
        let analyzer = analyzer(provider.clone());

        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Companies)
            .await
            .unwrap();
        analyzer.clear_cache();
        analyzer
            .analyze_resume(RESUME, AnalysisCategory::Companies)
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
    }
}
