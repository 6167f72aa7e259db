// Analysis pipeline: category model, subject-key derivation, the provider
// seam, and the cache-shielded composition.
// All model interaction goes through the AnalysisProvider trait; this crate
// never talks to a provider API directly.

pub mod keys;
pub mod pipeline;
pub mod provider;
