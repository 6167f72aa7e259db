//! Section Extractor: normalizes noisy free-form documents (resumes, job
//! postings) into a compact string with canonical section headers.
//!
//! The output of `extract_sections` is exactly what gets hashed into cache
//! keys, so the extractor must be deterministic and total: any input string,
//! including empty or adversarial text, produces a well-formed result. It is
//! NOT a layout-preserving transform; whitespace is collapsed before header
//! matching, so content order survives only as substring order.

pub mod presets;
pub mod skills;

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::errors::AnalysisError;

/// Per-section content limit in compact mode.
const COMPACT_SECTION_CHARS: usize = 200;

/// Fallback prefix lengths when no recognized header is found.
const COMPACT_FALLBACK_CHARS: usize = 1000;
const FULL_FALLBACK_CHARS: usize = 2000;

/// Appended when the overall output exceeds the configured maximum.
const TRUNCATION_MARKER: &str = "...";

/// Configuration for one extraction: the recognized headers, the alias table
/// mapping header variants to canonical names, the compaction flag, and the
/// overall output length bound.
///
/// Alias targets that are not listed as headers are still treated as
/// canonical; deduplication keys on the resolved name either way.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    headers: Vec<String>,
    aliases: HashMap<String, String>,
    compact: bool,
    max_chars: usize,
    header_pattern: Option<Regex>,
}

impl SectionSpec {
    pub fn new(
        headers: &[&str],
        aliases: &[(&str, &str)],
        compact: bool,
        max_chars: usize,
    ) -> Result<Self, AnalysisError> {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_uppercase()).collect();
        let aliases: HashMap<String, String> = aliases
            .iter()
            .map(|(variant, canonical)| {
                (variant.trim().to_uppercase(), canonical.trim().to_uppercase())
            })
            .collect();

        let header_pattern = if headers.is_empty() {
            None
        } else {
            // The regex engine picks the first alternative that matches at a
            // position, so when one enabled header is a prefix of another
            // ("SKILLS" vs "SKILLS AND TOOLS") the longer name must come
            // first in the alternation to win.
            let mut ordered = headers.clone();
            ordered.sort_by(|a, b| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.cmp(b))
            });
            let alternation = ordered
                .iter()
                .map(|h| regex::escape(h))
                .collect::<Vec<_>>()
                .join("|");
            // Whole-word, case-insensitive; each match also consumes an
            // optional colon and surrounding spaces.
            Some(Regex::new(&format!(r"(?i)\b({alternation})\b\s*:?\s*"))?)
        };

        Ok(Self {
            headers,
            aliases,
            compact,
            max_chars,
            header_pattern,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Resolves a matched header through the alias table to its canonical name.
    fn canonical_header(&self, matched: &str) -> String {
        let upper = matched.to_uppercase();
        self.aliases.get(&upper).cloned().unwrap_or(upper)
    }
}

/// Extracts recognized sections from `text` as `HEADER:\ncontent\n\n` blocks.
///
/// Headers are matched in document order, deduplicated first-occurrence-wins,
/// and resolved to canonical names through the spec's alias table. When no
/// recognized header matches at all, the cleaned text is truncated to a
/// fallback prefix instead; recognition failure is a degrade, not an error.
/// The result never exceeds the spec's max length plus the `...` marker.
pub fn extract_sections(text: &str, spec: &SectionSpec) -> String {
    let cleaned = clean_whitespace(text);

    let mut extracted = String::new();
    let mut seen: HashSet<String> = HashSet::new();

    if let Some(pattern) = &spec.header_pattern {
        let matches: Vec<_> = pattern.captures_iter(&cleaned).collect();

        for (i, caps) in matches.iter().enumerate() {
            let (whole, header_text) = match (caps.get(0), caps.get(1)) {
                (Some(whole), Some(header)) => (whole, header.as_str()),
                _ => continue,
            };

            let header = spec.canonical_header(header_text);
            // First occurrence wins; later blocks under a repeated header are
            // discarded rather than merged.
            if !seen.insert(header.clone()) {
                continue;
            }

            let content_end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(cleaned.len());
            let content = cleaned[whole.end()..content_end].trim();

            let mut section = content.to_string();
            if spec.compact {
                section = truncate_chars(&section, COMPACT_SECTION_CHARS);
                if skills::is_skill_header(&header) {
                    section = skills::skill_token_list(&section);
                }
            }

            extracted.push_str(&header);
            extracted.push_str(":\n");
            extracted.push_str(&section);
            extracted.push_str("\n\n");
        }
    }

    if extracted.trim().is_empty() {
        let fallback = if spec.compact {
            COMPACT_FALLBACK_CHARS
        } else {
            FULL_FALLBACK_CHARS
        };
        extracted = truncate_chars(&cleaned, fallback);
    }

    if extracted.chars().count() > spec.max_chars {
        let mut truncated = truncate_chars(&extracted, spec.max_chars);
        truncated.push_str(TRUNCATION_MARKER);
        return truncated;
    }

    extracted
}

/// Collapses every run of whitespace (including CR/LF) to a single space and
/// trims both ends.
fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to at most `max` characters, never splitting a code point.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
