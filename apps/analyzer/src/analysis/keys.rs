//! Subject-key derivation for cache lookups.
//!
//! Keys are stable 64-bit XxHash digests of the normalized text, rendered as
//! fixed-width hex. Collisions are an accepted tradeoff for a shield cache;
//! the key is deterministic, never unique by guarantee.

use std::hash::Hasher;

use twox_hash::XxHash64;

const KEY_SEED: u64 = 0;

/// Derives a stable subject key from normalized document text.
pub fn subject_key(text: &str) -> String {
    let mut hasher = XxHash64::with_seed(KEY_SEED);
    hasher.write(text.as_bytes());
    format!("{:016x}", hasher.finish())
}

/// Derives a subject key for a (resume, job description) pair. The two
/// digests are kept separate so either input changing changes the key.
pub fn paired_subject_key(resume: &str, job_description: &str) -> String {
    format!(
        "{}_{}",
        subject_key(resume),
        subject_key(job_description)
    )
}
