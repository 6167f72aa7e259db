//! Fixed `SectionSpec` configurations for the two document kinds the
//! application analyzes: uploaded resumes and pasted job descriptions.

use super::SectionSpec;

/// Output length bounds per document kind.
pub const RESUME_MAX_CHARS: usize = 3000;
pub const RESUME_MAX_CHARS_COMPACT: usize = 1500;
pub const JOB_DESCRIPTION_MAX_CHARS: usize = 2000;
pub const JOB_DESCRIPTION_MAX_CHARS_COMPACT: usize = 1000;

const RESUME_HEADERS: &[&str] = &[
    "EDUCATION",
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "SKILLS",
    "TECHNICAL SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
    "SUMMARY",
    "OBJECTIVE",
];

const RESUME_ALIASES: &[(&str, &str)] = &[
    ("WORK EXPERIENCE", "EXPERIENCE"),
    ("TECHNICAL SKILLS", "SKILLS"),
];

const JOB_DESCRIPTION_HEADERS: &[&str] = &[
    "REQUIREMENTS",
    "QUALIFICATIONS",
    "RESPONSIBILITIES",
    "SKILLS",
    "REQUIRED SKILLS",
    "PREFERRED SKILLS",
    "ABOUT THE ROLE",
    "JOB DESCRIPTION",
];

const JOB_DESCRIPTION_ALIASES: &[(&str, &str)] = &[
    ("REQUIRED SKILLS", "SKILLS"),
    ("PREFERRED SKILLS", "SKILLS"),
];

/// Spec for uploaded resume text.
pub fn resume_spec(compact: bool) -> SectionSpec {
    let max_chars = if compact {
        RESUME_MAX_CHARS_COMPACT
    } else {
        RESUME_MAX_CHARS
    };
    SectionSpec::new(RESUME_HEADERS, RESUME_ALIASES, compact, max_chars)
        .expect("resume section spec is valid")
}

/// Spec for pasted job-description text.
pub fn job_description_spec(compact: bool) -> SectionSpec {
    let max_chars = if compact {
        JOB_DESCRIPTION_MAX_CHARS_COMPACT
    } else {
        JOB_DESCRIPTION_MAX_CHARS
    };
    SectionSpec::new(
        JOB_DESCRIPTION_HEADERS,
        JOB_DESCRIPTION_ALIASES,
        compact,
        max_chars,
    )
    .expect("job description section spec is valid")
}
