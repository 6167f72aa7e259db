//! Skill-list heuristic for compact mode.
//!
//! Skill-bearing sections (SKILLS, QUALIFICATIONS, REQUIREMENTS and their
//! variants) compress better as a comma-joined list of short token runs than
//! as truncated prose. The heuristic is approximate by design and lives in
//! this file so a real tokenizer can replace it without touching the
//! segmentation logic.

use std::sync::OnceLock;

use regex::Regex;

/// One to three word runs of letters, digits, and the punctuation that shows
/// up inside skill names (Node.js, CI-CD, F#).
const TOKEN_RUN: &str = r"\b[A-Za-z0-9#+\-.]+(?:\s+[A-Za-z0-9#+\-.]+){0,2}\b";

/// Canonical header substrings that mark a section as skill-bearing.
const SKILL_MARKERS: &[&str] = &["SKILL", "QUALIFICATION", "REQUIREMENT"];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TOKEN_RUN).expect("skill token pattern is valid"))
}

/// True when a canonical header names a skill-bearing section.
pub fn is_skill_header(header: &str) -> bool {
    SKILL_MARKERS.iter().any(|marker| header.contains(marker))
}

/// Collapses a section body into a comma-joined list of short token runs.
pub fn skill_token_list(content: &str) -> String {
    token_pattern()
        .find_iter(content)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
